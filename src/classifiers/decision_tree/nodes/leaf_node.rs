use crate::classifiers::decision_tree::nodes::node::ParentLink;

/// Terminal node predicting the majority label of the records that reached it.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    label: i32,
    observed_class_distribution: Vec<(i32, usize)>,
    parent: Option<ParentLink>,
}

impl LeafNode {
    pub fn new(
        label: i32,
        observed_class_distribution: Vec<(i32, usize)>,
        parent: Option<ParentLink>,
    ) -> Self {
        Self {
            label,
            observed_class_distribution,
            parent,
        }
    }

    pub fn label(&self) -> i32 {
        self.label
    }

    pub fn parent(&self) -> Option<ParentLink> {
        self.parent
    }

    pub fn get_observed_class_distribution(&self) -> &[(i32, usize)] {
        &self.observed_class_distribution
    }

    pub fn observed_class_distribution_is_pure(&self) -> bool {
        self.observed_class_distribution
            .iter()
            .filter(|(_, count)| *count > 0)
            .count()
            < 2
    }
}
