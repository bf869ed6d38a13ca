use crate::classifiers::Classifier;
use crate::classifiers::decision_tree::builder::TreeBuilder;
use crate::classifiers::decision_tree::diagnostics::{Diagnostic, NodeTrace};
use crate::classifiers::decision_tree::error::{DecisionError, TreeError};
use crate::classifiers::decision_tree::nodes::{FoundNode, Node, NodeId};
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use std::sync::Arc;

/// A categorical decision tree. Built once, read-only afterwards.
///
/// Nodes live in one arena owned by the tree; children and parents refer to
/// each other by [`NodeId`].
#[derive(Debug, Clone)]
pub struct DecisionTree {
    header: Arc<InstanceHeader>,
    nodes: Vec<Node>,
    root: NodeId,
    diagnostics: Vec<Diagnostic>,
    trace: Vec<NodeTrace>,
}

impl DecisionTree {
    pub(crate) fn new(
        header: Arc<InstanceHeader>,
        nodes: Vec<Node>,
        root: NodeId,
        diagnostics: Vec<Diagnostic>,
        trace: Vec<NodeTrace>,
    ) -> Self {
        Self {
            header,
            nodes,
            root,
            diagnostics,
            trace,
        }
    }

    /// Induces a tree with information gain and the default cardinality bound.
    pub fn build(dataset: &Dataset) -> Result<Self, TreeError> {
        TreeBuilder::new().build(dataset)
    }

    /// Releases the tree. Equivalent to dropping it.
    pub fn destroy(self) {}

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn number_of_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Anomalies recovered from while building.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Per-node induction trace; empty unless tracing was enabled.
    pub fn trace(&self) -> &[NodeTrace] {
        &self.trace
    }

    /// Walks from the root as far as the record's values allow.
    pub fn filter_instance_to_leaf(&self, instance: &dyn Instance) -> FoundNode {
        let mut current = self.root;
        let mut parent = None;
        let mut parent_branch = None;
        loop {
            let Node::Split(split) = self.node(current) else {
                return FoundNode::new(Some(current), parent, parent_branch);
            };
            let Some(branch) = split.instance_child_index(instance) else {
                return FoundNode::new(None, Some(current), None);
            };
            let Some(child) = split.get_child(branch) else {
                return FoundNode::new(None, Some(current), Some(branch));
            };
            parent = Some(current);
            parent_branch = Some(branch);
            current = child;
        }
    }

    pub fn decide(&self, instance: &dyn Instance) -> Result<i32, DecisionError> {
        let found = self.filter_instance_to_leaf(instance);
        let reached = found
            .get_node()
            .or(found.get_parent())
            .unwrap_or(self.root);

        match self.node(reached) {
            Node::Leaf(leaf) => Ok(leaf.label()),
            Node::Split(split) => {
                let field = split.split_attribute();
                match instance.value_at_index(field) {
                    Some(value) => Err(DecisionError::NoMatchingBranch { field, value }),
                    None => Err(DecisionError::MissingField { field }),
                }
            }
        }
    }
}

impl Classifier for DecisionTree {
    fn decide(&self, instance: &dyn Instance) -> Result<i32, DecisionError> {
        DecisionTree::decide(self, instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::AttributeStatistics;
    use crate::classifiers::decision_tree::sample_filter::{self, Constraint};
    use crate::core::instances::DenseInstance;
    use crate::streams::{course_outcomes, course_outcomes_header};
    use crate::testing::dummies::header_xor;

    fn record(values: Vec<i32>) -> DenseInstance {
        DenseInstance::new(course_outcomes_header(), values)
    }

    #[test]
    fn course_table_tree_shape() {
        let ds = course_outcomes().unwrap();
        let tree = DecisionTree::build(&ds).unwrap();
        // ass2 has the highest gain over the full table
        let root = tree.node(tree.root()).as_split().unwrap();
        assert_eq!(root.split_attribute(), 2);
        assert_eq!(root.split_test().branch_values(), &[0, 10, 5, 15, 20]);
        assert_eq!(tree.number_of_nodes(), 25);
        assert_eq!(tree.number_of_leaves(), 16);
        assert_eq!(
            tree.diagnostics(),
            &[Diagnostic::DegenerateSplit {
                field: 1,
                value: 0,
                samples: 2,
                path: vec![Constraint::new(2, 15), Constraint::new(0, 2)],
            }]
        );
    }

    #[test]
    fn every_training_record_reaches_a_leaf() {
        let ds = course_outcomes().unwrap();
        let tree = DecisionTree::build(&ds).unwrap();
        let mut reproduced = 0;
        for inst in ds.instances() {
            let label = tree.decide(inst).unwrap();
            if Some(label) == inst.class_value() {
                reproduced += 1;
            }
        }
        assert_eq!(reproduced, 36);
    }

    #[test]
    fn unambiguous_records_reproduce_their_label() {
        let ds = course_outcomes().unwrap();
        let tree = DecisionTree::build(&ds).unwrap();
        let samples = ds.samples();
        for inst in ds.instances() {
            let twins: Vec<Constraint> = (0..3)
                .map(|f| Constraint::new(f, inst.values[f]))
                .collect();
            let same_predictors = sample_filter::filter(&samples, &twins);
            let stats = AttributeStatistics::new(&same_predictors, 3);
            if stats.is_unambiguous() {
                assert_eq!(tree.decide(inst), Ok(inst.class_value().unwrap()));
            }
        }
    }

    #[test]
    fn leaves_hold_the_majority_of_their_subset() {
        let ds = course_outcomes().unwrap();
        let tree = DecisionTree::build(&ds).unwrap();
        let samples = ds.samples();
        for path in tree.decision_paths() {
            let subset = sample_filter::filter(&samples, &path.steps);
            let mut counts: Vec<(i32, usize)> = Vec::new();
            for inst in &subset {
                let label = inst.class_value().unwrap();
                match counts.iter_mut().find(|(l, _)| *l == label) {
                    Some((_, c)) => *c += 1,
                    None => counts.push((label, 1)),
                }
            }
            let top = counts.iter().map(|&(_, c)| c).max().unwrap();
            let first_top = counts.iter().find(|&&(_, c)| c == top).unwrap().0;
            assert_eq!(path.label, first_top, "path {:?}", path.steps);
        }
    }

    #[test]
    fn unseen_value_has_no_matching_branch() {
        let ds = course_outcomes().unwrap();
        let tree = DecisionTree::build(&ds).unwrap();
        // ass2 = 10 only ever occurs with ASTAR and GAMES
        let query = record(vec![1, 1, 10, 0]);
        assert_eq!(
            tree.decide(&query),
            Err(DecisionError::NoMatchingBranch { field: 0, value: 1 })
        );
        let found = tree.filter_instance_to_leaf(&query);
        assert_eq!(found.get_node(), None);
        assert_eq!(found.get_parent_branch(), None);

        let unknown_ass2 = record(vec![0, 1, 7, 0]);
        assert_eq!(
            tree.decide(&unknown_ass2),
            Err(DecisionError::NoMatchingBranch { field: 2, value: 7 })
        );
    }

    #[test]
    fn query_follows_arms_to_a_leaf() {
        let ds = course_outcomes().unwrap();
        let tree = DecisionTree::build(&ds).unwrap();
        assert_eq!(tree.decide(&record(vec![0, 1, 10, 0])), Ok(1));
        assert_eq!(tree.decide(&record(vec![1, 0, 15, 1])), Ok(0));
        let found = tree.filter_instance_to_leaf(&record(vec![2, 0, 20, 0]));
        let leaf = tree.node(found.get_node().unwrap()).as_leaf().unwrap();
        assert_eq!(leaf.label(), 1);
        assert_eq!(found.get_parent(), Some(tree.root()));
    }

    #[test]
    fn record_lacking_the_split_field() {
        let ds = Dataset::from_rows(header_xor(), vec![vec![0, 0, 0], vec![1, 0, 1]]).unwrap();
        let tree = DecisionTree::build(&ds).unwrap();
        let short = DenseInstance::new(header_xor(), vec![]);
        assert_eq!(
            tree.decide(&short),
            Err(DecisionError::MissingField { field: 0 })
        );
    }

    #[test]
    fn classifier_trait_delegates_to_decide() {
        let ds = course_outcomes().unwrap();
        let tree = DecisionTree::build(&ds).unwrap();
        let classifier: &dyn Classifier = &tree;
        let query = record(vec![2, 1, 20, 0]);
        assert_eq!(classifier.decide(&query), tree.decide(&query));
    }

    #[test]
    fn destroy_consumes_the_tree() {
        let tree = DecisionTree::build(&course_outcomes().unwrap()).unwrap();
        let copy = tree.clone();
        tree.destroy();
        assert_eq!(copy.number_of_nodes(), 25);
    }

    #[test]
    fn empty_dataset_builds_nothing() {
        let ds = Dataset::from_rows(course_outcomes_header(), vec![]).unwrap();
        assert_eq!(DecisionTree::build(&ds).unwrap_err(), TreeError::EmptyDataset);
    }
}
