//! Error types for the community-summary library.

use crate::summary::Statistic;
use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid count value '{value}' at row {row}, column {col}")]
    InvalidCount {
        value: String,
        row: usize,
        col: usize,
    },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Dataset '{dataset}' is empty ({n_features} OTUs x {n_samples} samples)")]
    EmptyDataset {
        dataset: String,
        n_features: usize,
        n_samples: usize,
    },

    #[error("Statistic '{0}' is missing from the summary")]
    MissingStatistic(Statistic),

    #[error("Duplicate dataset name '{0}' after sanitization")]
    DuplicateDatasetName(String),

    #[error("Invalid dataset specification: {0}")]
    InvalidDatasetSpec(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, SummaryError>;

impl SummaryError {
    /// Attach a dataset name to errors raised while summarizing one matrix.
    pub(crate) fn for_dataset(self, name: &str) -> Self {
        match self {
            SummaryError::EmptyDataset {
                n_features,
                n_samples,
                ..
            } => SummaryError::EmptyDataset {
                dataset: name.to_string(),
                n_features,
                n_samples,
            },
            other => other,
        }
    }
}
