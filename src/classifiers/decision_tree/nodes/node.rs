use crate::classifiers::decision_tree::nodes::leaf_node::LeafNode;
use crate::classifiers::decision_tree::nodes::split_node::SplitNode;

/// Index of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Non-owning link from a node to the split that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    pub node: NodeId,
    pub branch: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Split(SplitNode),
    Leaf(LeafNode),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn parent(&self) -> Option<ParentLink> {
        match self {
            Node::Split(split) => split.parent(),
            Node::Leaf(leaf) => leaf.parent(),
        }
    }

    pub fn get_observed_class_distribution(&self) -> &[(i32, usize)] {
        match self {
            Node::Split(split) => split.get_observed_class_distribution(),
            Node::Leaf(leaf) => leaf.get_observed_class_distribution(),
        }
    }

    pub fn as_split(&self) -> Option<&SplitNode> {
        match self {
            Node::Split(split) => Some(split),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Split(_) => None,
        }
    }
}
