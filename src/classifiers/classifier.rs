use crate::classifiers::decision_tree::DecisionError;
use crate::core::instances::Instance;

pub trait Classifier {
    /// Predicted label for the record, or why no prediction exists.
    fn decide(&self, instance: &dyn Instance) -> Result<i32, DecisionError>;
}
