use crate::classifiers::DecisionTree;
use crate::classifiers::decision_tree::AttributeStatistics;
use crate::core::dataset::Dataset;
use std::io::{self, Write};

/// Size of the tree, then the induction trace when one was recorded.
/// Diagnostics go to stderr.
pub fn write_build_report<W: Write>(tree: &DecisionTree, out: &mut W) -> io::Result<()> {
    for diagnostic in tree.diagnostics() {
        eprintln!("✗ {diagnostic}");
    }
    for node in tree.trace() {
        writeln!(out, "{node}")?;
    }
    writeln!(
        out,
        "tree: {} nodes, {} leaves",
        tree.number_of_nodes(),
        tree.number_of_leaves()
    )
}

/// Gini impurity, information gain and value counts of every predictor.
pub fn write_stats<W: Write>(dataset: &Dataset, out: &mut W) -> io::Result<()> {
    let header = dataset.header();
    let samples = dataset.samples();
    let stats = AttributeStatistics::new(&samples, header.class_index());

    writeln!(out, "{}: {} records", header.relation_name(), dataset.len())?;
    for summary in stats.summary() {
        writeln!(
            out,
            "{}: gini {:.4}, gain {:.4}",
            header.attribute_name(summary.field),
            summary.gini_impurity,
            summary.information_gain
        )?;
        for (value, count) in &summary.value_counts {
            writeln!(
                out,
                "  {} = {count}",
                header.describe_value(summary.field, *value)
            )?;
        }
    }
    Ok(())
}
