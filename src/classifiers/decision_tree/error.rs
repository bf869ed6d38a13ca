use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("cannot build a decision tree from an empty dataset")]
    EmptyDataset,
}

/// Why a record could not be given a label. Both cases are ordinary
/// outcomes for records unlike anything seen in training.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("no branch for value {value} of field {field}")]
    NoMatchingBranch { field: usize, value: i32 },

    #[error("record has no field {field}")]
    MissingField { field: usize },
}
