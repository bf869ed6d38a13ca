use crate::classifiers::decision_tree::sample_filter::{Constraint, format_constraints};
use std::fmt;
use thiserror::Error;

/// Anomalies the builder recovered from. Advisory only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    #[error(
        "degenerate split on field {field}: value {value} keeps all {samples} samples under {}; using a majority leaf",
        path_or_root(.path)
    )]
    DegenerateSplit {
        field: usize,
        value: i32,
        samples: usize,
        path: Vec<Constraint>,
    },

    #[error("field {field} shows {observed} distinct values, only the first {bound} are used")]
    FieldCardinalityExceeded {
        field: usize,
        observed: usize,
        bound: usize,
    },
}

fn path_or_root(path: &[Constraint]) -> String {
    if path.is_empty() {
        "the root".to_string()
    } else {
        format_constraints(path)
    }
}

/// What the builder saw at one node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTrace {
    pub samples: usize,
    pub ambiguous: bool,
    pub path: Vec<Constraint>,
    pub merits: Vec<(usize, f64)>,
}

impl fmt::Display for NodeTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "items: {}", self.samples)?;
        writeln!(f, "ambiguous: {}", if self.ambiguous { "yes" } else { "no" })?;
        writeln!(f, "where: {}", path_or_root(&self.path))?;
        if !self.merits.is_empty() {
            writeln!(f, "Uncategorized fields:")?;
        }
        for (field, merit) in &self.merits {
            writeln!(f, "field {field} merit: {merit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_split_message_names_the_path() {
        let d = Diagnostic::DegenerateSplit {
            field: 0,
            value: 0,
            samples: 2,
            path: vec![Constraint::new(2, 5)],
        };
        let msg = d.to_string();
        assert!(msg.contains("field 0"));
        assert!(msg.contains("{2 => 5}"));

        let at_root = Diagnostic::DegenerateSplit {
            field: 1,
            value: 1,
            samples: 3,
            path: vec![],
        };
        assert!(at_root.to_string().contains("the root"));
    }

    #[test]
    fn trace_lists_candidate_fields() {
        let trace = NodeTrace {
            samples: 4,
            ambiguous: true,
            path: vec![],
            merits: vec![(0, 1.0), (1, 0.0)],
        };
        let text = trace.to_string();
        assert!(text.starts_with("items: 4\nambiguous: yes\n"));
        assert!(text.contains("field 0 merit: 1"));
        assert!(text.contains("field 1 merit: 0"));
    }
}
