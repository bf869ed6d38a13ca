use crate::classifiers::decision_tree::decision_tree::DecisionTree;
use crate::classifiers::decision_tree::nodes::{Node, NodeId};
use crate::classifiers::decision_tree::sample_filter::Constraint;
use crate::core::instance_header::InstanceHeader;
use std::io::{self, Write};

/// How decision paths are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    /// `{0 => 2}{2 => 20} => 1`
    #[default]
    Codes,
    /// `{topic => GAMES}{ass2 => 20} => pass = true`
    Named,
}

/// The decisions from the root to one leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionPath {
    pub steps: Vec<Constraint>,
    pub label: i32,
}

impl DecisionPath {
    pub fn render(&self, header: &InstanceHeader, style: PathStyle) -> String {
        let mut line = String::new();
        if self.steps.is_empty() {
            line.push('*');
        }
        for step in &self.steps {
            match style {
                PathStyle::Codes => line.push_str(&step.to_string()),
                PathStyle::Named => line.push_str(&format!(
                    "{{{} => {}}}",
                    header.attribute_name(step.field),
                    header.describe_value(step.field, step.value)
                )),
            }
        }
        let class_index = header.class_index();
        match style {
            PathStyle::Codes => line.push_str(&format!(" => {}", self.label)),
            PathStyle::Named => line.push_str(&format!(
                " => {} = {}",
                header.attribute_name(class_index),
                header.describe_value(class_index, self.label)
            )),
        }
        line
    }
}

impl DecisionTree {
    /// One path per leaf, depth-first in arm order.
    pub fn decision_paths(&self) -> Vec<DecisionPath> {
        let mut paths = Vec::new();
        let mut pending = vec![self.root()];
        while let Some(id) = pending.pop() {
            match self.node(id) {
                Node::Leaf(leaf) => paths.push(DecisionPath {
                    steps: self.steps_to(id),
                    label: leaf.label(),
                }),
                Node::Split(split) => {
                    let children: Vec<NodeId> =
                        split.arms().filter_map(|(_, child)| child).collect();
                    pending.extend(children.into_iter().rev());
                }
            }
        }
        paths
    }

    pub fn print_paths(&self, out: &mut impl Write, style: PathStyle) -> io::Result<()> {
        for path in self.decision_paths() {
            writeln!(out, "{}", path.render(self.header(), style))?;
        }
        Ok(())
    }

    /// Rebuilds the constraints leading to `id` from the parent links.
    fn steps_to(&self, id: NodeId) -> Vec<Constraint> {
        let mut steps = Vec::new();
        let mut link = self.node(id).parent();
        while let Some(parent) = link {
            if let Node::Split(split) = self.node(parent.node) {
                if let Some(value) = split.split_test().branch_value(parent.branch) {
                    steps.push(Constraint::new(split.split_attribute(), value));
                }
            }
            link = self.node(parent.node).parent();
        }
        steps.reverse();
        steps
    }
}
