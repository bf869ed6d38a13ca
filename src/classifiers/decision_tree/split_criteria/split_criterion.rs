/// Scores how well a candidate split separates the labels.
///
/// Distributions are label counts: `pre_split_distribution[c]` over the whole
/// subset, `post_split_dists[b][c]` over the records sent to branch `b`, with
/// the same label order in every vector. Higher merit is better.
pub trait SplitCriterion {
    fn get_merit_of_split(&self, pre_split_distribution: &[f64], post_split_dists: &[Vec<f64>])
    -> f64;

    fn name(&self) -> &'static str;
}
