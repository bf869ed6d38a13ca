use crate::classifiers::decision_tree::nodes::node::NodeId;

/// Where a record ended up while walking the tree.
///
/// `node` is the leaf reached, or `None` when the walk stopped at `parent`
/// because no arm matched (`parent_branch` is then `None`) or the matching
/// arm has no child (`parent_branch` names that arm).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundNode {
    node: Option<NodeId>,
    parent: Option<NodeId>,
    parent_branch: Option<usize>,
}

impl FoundNode {
    pub fn new(node: Option<NodeId>, parent: Option<NodeId>, parent_branch: Option<usize>) -> Self {
        Self {
            node,
            parent,
            parent_branch,
        }
    }

    pub fn get_node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn get_parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn get_parent_branch(&self) -> Option<usize> {
        self.parent_branch
    }
}
