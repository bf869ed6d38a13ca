use crate::classifiers::conditional_tests::AttributeSplitSuggestion;
use crate::classifiers::decision_tree::attribute_statistics::{
    AttributeStatistics, DEFAULT_MAX_DISTINCT_VALUES,
};
use crate::classifiers::decision_tree::decision_tree::DecisionTree;
use crate::classifiers::decision_tree::diagnostics::{Diagnostic, NodeTrace};
use crate::classifiers::decision_tree::error::TreeError;
use crate::classifiers::decision_tree::nodes::{LeafNode, Node, NodeId, ParentLink, SplitNode};
use crate::classifiers::decision_tree::sample_filter::{self, Constraint, ConstraintPath};
use crate::classifiers::decision_tree::split_criteria::{InfoGainSplitCriterion, SplitCriterion};
use crate::core::dataset::Dataset;
use crate::core::instances::DenseInstance;
use std::collections::BTreeSet;

/// ID3 induction settings.
pub struct TreeBuilder {
    split_criterion: Box<dyn SplitCriterion>,
    max_distinct_values: usize,
    trace: bool,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            split_criterion: Box::new(InfoGainSplitCriterion::new()),
            max_distinct_values: DEFAULT_MAX_DISTINCT_VALUES,
            trace: false,
        }
    }

    pub fn with_split_criterion(mut self, split_criterion: Box<dyn SplitCriterion>) -> Self {
        self.split_criterion = split_criterion;
        self
    }

    /// Values of a field beyond this many are ignored (at least one is kept).
    pub fn with_max_distinct_values(mut self, max_distinct_values: usize) -> Self {
        self.max_distinct_values = max_distinct_values.max(1);
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn split_criterion(&self) -> &dyn SplitCriterion {
        self.split_criterion.as_ref()
    }

    pub fn build(&self, dataset: &Dataset) -> Result<DecisionTree, TreeError> {
        if dataset.is_empty() {
            return Err(TreeError::EmptyDataset);
        }

        let header = dataset.header();
        let mut induction = Induction {
            builder: self,
            class_index: header.class_index(),
            predictors: header.predictor_indices().collect(),
            nodes: Vec::new(),
            diagnostics: Vec::new(),
            traces: Vec::new(),
            reported_fields: BTreeSet::new(),
        };

        let samples = dataset.samples();
        let root = induction
            .grow(&samples, &mut ConstraintPath::new(), None)
            .ok_or(TreeError::EmptyDataset)?;

        Ok(DecisionTree::new(
            header.clone(),
            induction.nodes,
            root,
            induction.diagnostics,
            induction.traces,
        ))
    }
}

enum Arm {
    Degenerate,
    Child(Option<NodeId>),
}

/// State of a single build pass.
struct Induction<'b> {
    builder: &'b TreeBuilder,
    class_index: usize,
    predictors: Vec<usize>,
    nodes: Vec<Node>,
    diagnostics: Vec<Diagnostic>,
    traces: Vec<NodeTrace>,
    reported_fields: BTreeSet<usize>,
}

impl Induction<'_> {
    fn grow(
        &mut self,
        active: &[&DenseInstance],
        path: &mut ConstraintPath,
        parent: Option<ParentLink>,
    ) -> Option<NodeId> {
        if active.is_empty() {
            return None;
        }

        let stats = AttributeStatistics::new(active, self.class_index)
            .with_max_distinct_values(self.builder.max_distinct_values);
        let ambiguous = !stats.is_unambiguous();

        let suggestions = self.suggest_splits(&stats, path);
        self.report_truncation(&suggestions);
        if self.builder.trace {
            self.traces.push(NodeTrace {
                samples: active.len(),
                ambiguous,
                path: path.to_vec(),
                merits: suggestions
                    .iter()
                    .map(|s| (s.attribute_index(), s.get_merit()))
                    .collect(),
            });
        }

        let best = match AttributeSplitSuggestion::best_of(suggestions) {
            Some(best) if ambiguous => best,
            _ => return self.push_leaf(&stats, parent),
        };

        let split_test = best.into_split_test();
        let field = split_test.attribute_index();
        let checkpoint = self.nodes.len();
        let split_id = self.push(Node::Split(SplitNode::new(
            split_test.clone(),
            stats.class_distribution(),
            parent,
        )));

        for (branch, &value) in split_test.branch_values().iter().enumerate() {
            let arm = path.scoped(Constraint::new(field, value), |path| {
                let subset = sample_filter::filter(active, path);
                if subset.len() == active.len() {
                    return Arm::Degenerate;
                }
                let link = ParentLink {
                    node: split_id,
                    branch,
                };
                Arm::Child(self.grow(&subset, path, Some(link)))
            });

            match arm {
                Arm::Degenerate => {
                    self.nodes.truncate(checkpoint);
                    self.diagnostics.push(Diagnostic::DegenerateSplit {
                        field,
                        value,
                        samples: active.len(),
                        path: path.to_vec(),
                    });
                    return self.push_leaf(&stats, parent);
                }
                Arm::Child(Some(child)) => {
                    if let Node::Split(split) = &mut self.nodes[split_id.0] {
                        split.set_child(branch, child);
                    }
                }
                Arm::Child(None) => {}
            }
        }

        Some(split_id)
    }

    /// One suggestion per predictor not fixed on the current path, in field
    /// order.
    fn suggest_splits(
        &self,
        stats: &AttributeStatistics<'_, DenseInstance>,
        path: &ConstraintPath,
    ) -> Vec<AttributeSplitSuggestion> {
        self.predictors
            .iter()
            .filter(|&&field| !path.constrains(field))
            .map(|&field| {
                let split = stats.split_distributions(field);
                let merit = self
                    .builder
                    .split_criterion
                    .get_merit_of_split(&split.pre, &split.post);
                AttributeSplitSuggestion::from_distributions(split, merit)
            })
            .collect()
    }

    fn report_truncation(&mut self, suggestions: &[AttributeSplitSuggestion]) {
        for suggestion in suggestions.iter().filter(|s| s.is_truncated()) {
            let field = suggestion.attribute_index();
            if self.reported_fields.insert(field) {
                self.diagnostics.push(Diagnostic::FieldCardinalityExceeded {
                    field,
                    observed: suggestion.observed_values(),
                    bound: self.builder.max_distinct_values,
                });
            }
        }
    }

    fn push_leaf(
        &mut self,
        stats: &AttributeStatistics<'_, DenseInstance>,
        parent: Option<ParentLink>,
    ) -> Option<NodeId> {
        let label = stats.majority_class()?;
        Some(self.push(Node::Leaf(LeafNode::new(
            label,
            stats.class_distribution(),
            parent,
        ))))
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}
