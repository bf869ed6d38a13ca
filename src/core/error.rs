use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("record has {found} fields, expected {expected}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("unknown label {label:?} for attribute {attribute}")]
    UnknownLabel { attribute: String, label: String },

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<DatasetError>,
    },

    #[error("class index {class_index} is outside a header of {attributes} attributes")]
    InvalidClassIndex {
        class_index: usize,
        attributes: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
