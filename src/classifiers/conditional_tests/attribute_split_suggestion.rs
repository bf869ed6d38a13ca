use crate::classifiers::decision_tree::instance_conditional_test::NominalAttributeMultiwayTest;
use crate::classifiers::decision_tree::{DistinctValues, SplitDistributions};
use std::cmp::Ordering;

/// A scored candidate split on one attribute.
#[derive(Debug, Clone)]
pub struct AttributeSplitSuggestion {
    split_test: NominalAttributeMultiwayTest,
    merit: f64,
    observed_values: usize,
}

impl AttributeSplitSuggestion {
    pub fn new(
        split_test: NominalAttributeMultiwayTest,
        merit: f64,
        observed_values: usize,
    ) -> Self {
        Self {
            split_test,
            merit,
            observed_values,
        }
    }

    pub fn from_distributions(split: SplitDistributions, merit: f64) -> Self {
        let SplitDistributions {
            field,
            values: DistinctValues { values, observed },
            ..
        } = split;
        Self::new(NominalAttributeMultiwayTest::new(field, values), merit, observed)
    }

    pub fn into_split_test(self) -> NominalAttributeMultiwayTest {
        self.split_test
    }

    pub fn get_merit(&self) -> f64 {
        self.merit
    }

    pub fn attribute_index(&self) -> usize {
        self.split_test.attribute_index()
    }

    /// Cardinality seen before the branch list was cut to the bound.
    pub fn observed_values(&self) -> usize {
        self.observed_values
    }

    pub fn is_truncated(&self) -> bool {
        self.observed_values > self.split_test.max_branches()
    }

    /// First suggestion with the strictly greatest merit, so ties go to the
    /// earliest candidate.
    pub fn best_of(suggestions: Vec<Self>) -> Option<Self> {
        let mut best: Option<Self> = None;
        for suggestion in suggestions {
            if best.as_ref().is_none_or(|b| suggestion > *b) {
                best = Some(suggestion);
            }
        }
        best
    }
}

impl PartialEq for AttributeSplitSuggestion {
    fn eq(&self, other: &Self) -> bool {
        self.merit == other.merit
    }
}

impl PartialOrd for AttributeSplitSuggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.merit.partial_cmp(&other.merit)
    }
}
