mod attribute_statistics;
mod builder;
mod decision_tree;
mod diagnostics;
mod error;
pub mod instance_conditional_test;
pub mod nodes;
mod printer;
pub mod sample_filter;
pub mod split_criteria;

pub use attribute_statistics::{
    AttributeStatistics, DEFAULT_MAX_DISTINCT_VALUES, DistinctValues, FieldSummary,
    SplitDistributions,
};
pub use builder::TreeBuilder;
pub use decision_tree::DecisionTree;
pub use diagnostics::{Diagnostic, NodeTrace};
pub use error::{DecisionError, TreeError};
pub use printer::{DecisionPath, PathStyle};
pub use sample_filter::{Constraint, ConstraintPath};
