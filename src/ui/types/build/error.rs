use crate::classifiers::decision_tree::TreeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("malformed parameters: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
