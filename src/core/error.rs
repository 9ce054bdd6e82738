//! Error types for the classifier adapter and its building blocks

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvcError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown kernel '{0}': expected one of linear, poly, rbf, sigmoid")]
    InvalidKernel(String),

    #[error("Invalid hyperparameter document: {0}")]
    Config(String),

    #[error("Optimization failed: {0}")]
    OptimizationError(String),

    #[error("Model not fitted")]
    NotFitted,

    #[error("Probability estimates are not enabled for this model")]
    ProbabilityNotEnabled,

    #[error("Invalid label: expected -1 or +1, got {0}")]
    InvalidLabel(f64),

    #[error("Target must contain at least 2 distinct classes, got {0}")]
    InsufficientClasses(usize),

    #[error("Row count mismatch: {features} feature rows, {targets} target rows")]
    RowCountMismatch { features: usize, targets: usize },

    #[error("Non-finite value at row {row}, column {column}")]
    NonFiniteValue { row: usize, column: usize },

    #[error("Row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for SvcError {
    fn from(err: serde_json::Error) -> Self {
        SvcError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SvcError>;
