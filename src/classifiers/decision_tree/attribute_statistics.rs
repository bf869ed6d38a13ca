use crate::classifiers::decision_tree::split_criteria::{InfoGainSplitCriterion, SplitCriterion};
use crate::core::instances::Instance;

/// Distinct values considered per field unless configured otherwise.
pub const DEFAULT_MAX_DISTINCT_VALUES: usize = 6;

/// Values a field takes over a sample collection, in first-seen order.
///
/// At most `bound` values are kept; `observed` is the true cardinality, so a
/// truncated list is detectable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinctValues {
    pub values: Vec<i32>,
    pub observed: usize,
}

impl DistinctValues {
    pub fn is_truncated(&self) -> bool {
        self.observed > self.values.len()
    }
}

/// Label counts before and after splitting on one field.
///
/// `pre` is indexed by label in first-seen order. `post` holds one
/// distribution per observed value in first-seen order, so its first
/// `values.values.len()` entries line up with the branches and any further
/// entries cover the values cut off by the bound.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDistributions {
    pub field: usize,
    pub values: DistinctValues,
    pub pre: Vec<f64>,
    pub post: Vec<Vec<f64>>,
}

/// Per-field figures of the legacy statistics dump.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    pub field: usize,
    pub gini_impurity: f64,
    pub information_gain: f64,
    pub value_counts: Vec<(i32, usize)>,
}

/// Counting and impurity measures over a borrowed sample collection.
pub struct AttributeStatistics<'a, I: Instance> {
    samples: &'a [&'a I],
    class_index: usize,
    max_distinct_values: usize,
}

impl<'a, I: Instance> AttributeStatistics<'a, I> {
    pub fn new(samples: &'a [&'a I], class_index: usize) -> Self {
        Self {
            samples,
            class_index,
            max_distinct_values: DEFAULT_MAX_DISTINCT_VALUES,
        }
    }

    pub fn with_max_distinct_values(mut self, max_distinct_values: usize) -> Self {
        self.max_distinct_values = max_distinct_values;
        self
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn distinct_values(&self, field: usize) -> DistinctValues {
        let mut values = Vec::new();
        let mut observed = 0;
        let mut seen = Vec::new();
        for value in self.samples.iter().filter_map(|s| s.value_at_index(field)) {
            if seen.contains(&value) {
                continue;
            }
            seen.push(value);
            observed += 1;
            if values.len() < self.max_distinct_values {
                values.push(value);
            }
        }
        DistinctValues { values, observed }
    }

    pub fn occurrence_count(&self, field: usize, value: i32) -> usize {
        self.samples
            .iter()
            .filter(|s| s.value_at_index(field) == Some(value))
            .count()
    }

    /// `(label, count)` pairs in first-seen order. Not bounded.
    pub fn class_distribution(&self) -> Vec<(i32, usize)> {
        let mut distribution: Vec<(i32, usize)> = Vec::new();
        for label in self.samples.iter().filter_map(|s| s.class_value()) {
            match distribution.iter_mut().find(|(l, _)| *l == label) {
                Some((_, count)) => *count += 1,
                None => distribution.push((label, 1)),
            }
        }
        distribution
    }

    /// Most frequent label; on ties the one seen first wins.
    pub fn majority_class(&self) -> Option<i32> {
        let mut best: Option<(i32, usize)> = None;
        for (label, count) in self.class_distribution() {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }

    /// True when every sample carries the same label.
    pub fn is_unambiguous(&self) -> bool {
        self.class_distribution().len() <= 1
    }

    pub fn entropy(&self) -> f64 {
        let counts: Vec<f64> = self
            .class_distribution()
            .into_iter()
            .map(|(_, c)| c as f64)
            .collect();
        InfoGainSplitCriterion::new().compute_entropy(&counts)
    }

    pub fn split_distributions(&self, field: usize) -> SplitDistributions {
        let labels: Vec<i32> = self
            .class_distribution()
            .into_iter()
            .map(|(l, _)| l)
            .collect();
        let values = self.distinct_values(field);

        let mut partition = values.values.clone();
        let mut pre = vec![0.0; labels.len()];
        let mut post = vec![vec![0.0; labels.len()]; partition.len()];
        for sample in self.samples {
            let Some(label) = sample.class_value() else {
                continue;
            };
            let Some(l) = labels.iter().position(|&x| x == label) else {
                continue;
            };
            pre[l] += 1.0;
            let Some(value) = sample.value_at_index(field) else {
                continue;
            };
            let b = match partition.iter().position(|&x| x == value) {
                Some(b) => b,
                None => {
                    partition.push(value);
                    post.push(vec![0.0; labels.len()]);
                    partition.len() - 1
                }
            };
            post[b][l] += 1.0;
        }

        SplitDistributions {
            field,
            values,
            pre,
            post,
        }
    }

    pub fn merit(&self, field: usize, criterion: &dyn SplitCriterion) -> f64 {
        let split = self.split_distributions(field);
        criterion.get_merit_of_split(&split.pre, &split.post)
    }

    pub fn information_gain(&self, field: usize) -> f64 {
        self.merit(field, &InfoGainSplitCriterion::new())
    }

    /// `Σ p_v·(1 - p_v)` over the field's own value distribution.
    pub fn gini_impurity(&self, field: usize) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let n = self.samples.len() as f64;
        self.distinct_values(field)
            .values
            .iter()
            .map(|&v| {
                let p = self.occurrence_count(field, v) as f64 / n;
                p * (1.0 - p)
            })
            .sum()
    }

    pub fn summary(&self) -> Vec<FieldSummary> {
        let fields = self
            .samples
            .first()
            .map(|s| s.number_of_attributes())
            .unwrap_or(0);

        (0..fields)
            .filter(|&f| f != self.class_index)
            .map(|field| FieldSummary {
                field,
                gini_impurity: self.gini_impurity(field),
                information_gain: self.information_gain(field),
                value_counts: self
                    .distinct_values(field)
                    .values
                    .into_iter()
                    .map(|v| (v, self.occurrence_count(field, v)))
                    .collect(),
            })
            .collect()
    }
}
