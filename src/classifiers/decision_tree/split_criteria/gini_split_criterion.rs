use crate::classifiers::decision_tree::split_criteria::split_criterion::SplitCriterion;

/// Reduction in Gini impurity achieved by a split.
#[derive(Debug, Default, Clone, Copy)]
pub struct GiniSplitCriterion {}

impl GiniSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }

    pub fn compute_gini(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        if distribution_sum_of_weights <= 0.0 {
            return 0.0;
        }
        let mut gini = 1.0;
        for i in distribution {
            let rel_freq = i / distribution_sum_of_weights;
            gini -= rel_freq.powf(2.0);
        }
        gini
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn get_merit_of_split(&self, pre_split_distribution: &[f64], post_split_dists: &[Vec<f64>]) -> f64 {
        let total: f64 = pre_split_distribution.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let mut remainder = 0.0;
        for dist in post_split_dists {
            let weight: f64 = dist.iter().sum();
            remainder += (weight / total) * self.compute_gini(dist, weight);
        }
        (self.compute_gini(pre_split_distribution, total) - remainder).max(0.0)
    }

    fn name(&self) -> &'static str {
        "gini"
    }
}
