use crate::classifiers::decision_tree::split_criteria::split_criterion::SplitCriterion;

/// Reduction in Shannon entropy (base 2) achieved by a split.
#[derive(Debug, Default, Clone, Copy)]
pub struct InfoGainSplitCriterion {}

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }

    /// `-Σ p·log2(p)`, with `0·log2(0) = 0`. An empty distribution has zero
    /// entropy.
    pub fn compute_entropy(&self, distribution: &[f64]) -> f64 {
        let total: f64 = distribution.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let mut entropy = 0.0;
        for &count in distribution {
            if count > 0.0 {
                let p = count / total;
                entropy -= p * p.log2();
            }
        }
        entropy
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn get_merit_of_split(&self, pre_split_distribution: &[f64], post_split_dists: &[Vec<f64>]) -> f64 {
        let total: f64 = pre_split_distribution.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let mut remainder = 0.0;
        for dist in post_split_dists {
            let weight: f64 = dist.iter().sum();
            remainder += (weight / total) * self.compute_entropy(dist);
        }
        // rounding can push a zero gain slightly below zero
        (self.compute_entropy(pre_split_distribution) - remainder).max(0.0)
    }

    fn name(&self) -> &'static str {
        "information gain"
    }
}
