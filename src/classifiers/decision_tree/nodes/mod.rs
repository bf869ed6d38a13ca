mod found_node;
mod leaf_node;
mod node;
mod split_node;

pub use found_node::FoundNode;
pub use leaf_node::LeafNode;
pub use node::{Node, NodeId, ParentLink};
pub use split_node::SplitNode;
