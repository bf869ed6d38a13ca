use crate::classifiers::decision_tree::instance_conditional_test::NominalAttributeMultiwayTest;
use crate::classifiers::decision_tree::nodes::node::{NodeId, ParentLink};
use crate::core::instances::Instance;

/// Inner node: one arm per value of the split attribute, in test order.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitNode {
    observed_class_distribution: Vec<(i32, usize)>,
    split_test: NominalAttributeMultiwayTest,
    children: Vec<Option<NodeId>>,
    parent: Option<ParentLink>,
}

impl SplitNode {
    pub fn new(
        split_test: NominalAttributeMultiwayTest,
        observed_class_distribution: Vec<(i32, usize)>,
        parent: Option<ParentLink>,
    ) -> Self {
        let children = vec![None; split_test.max_branches()];
        Self {
            observed_class_distribution,
            split_test,
            children,
            parent,
        }
    }

    pub fn set_child(&mut self, index: usize, child: NodeId) {
        if index >= self.children.len() {
            self.children.resize(index + 1, None);
        }
        self.children[index] = Some(child);
    }

    pub fn get_child(&self, index: usize) -> Option<NodeId> {
        self.children.get(index).copied().flatten()
    }

    pub fn split_test(&self) -> &NominalAttributeMultiwayTest {
        &self.split_test
    }

    pub fn split_attribute(&self) -> usize {
        self.split_test.attribute_index()
    }

    pub fn number_of_arms(&self) -> usize {
        self.children.len()
    }

    /// `(value, child)` pairs in branch order; `None` marks an absent child.
    pub fn arms(&self) -> impl Iterator<Item = (i32, Option<NodeId>)> + '_ {
        self.split_test
            .branch_values()
            .iter()
            .copied()
            .zip(self.children.iter().copied())
    }

    pub fn instance_child_index(&self, instance: &dyn Instance) -> Option<usize> {
        self.split_test.branch_for_instance(instance)
    }

    pub fn parent(&self) -> Option<ParentLink> {
        self.parent
    }

    pub fn get_observed_class_distribution(&self) -> &[(i32, usize)] {
        &self.observed_class_distribution
    }
}
