//! Error types for the forecast_view crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the forecast_view crate
#[derive(Debug, Error)]
pub enum ViewError {
    /// A series contained NaN or an infinite value
    #[error("Non-finite value {value} in {series} at index {index}")]
    NonFiniteValue {
        series: String,
        index: usize,
        value: f64,
    },

    /// A prediction parameter was inserted twice
    #[error("Duplicate prediction key: n = {0}")]
    DuplicateKey(i32),

    /// A prediction parameter that is not part of the prediction set
    #[error("Unknown prediction key: n = {0}")]
    UnknownKey(i32),

    /// Error related to view configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error while writing CSV output
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),

    /// Error from JSON (de)serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ViewError>;

impl From<PolarsError> for ViewError {
    fn from(err: PolarsError) -> Self {
        ViewError::PolarsError(err.to_string())
    }
}

impl From<csv::Error> for ViewError {
    fn from(err: csv::Error) -> Self {
        ViewError::CsvError(err.to_string())
    }
}

impl From<serde_json::Error> for ViewError {
    fn from(err: serde_json::Error) -> Self {
        ViewError::SerializationError(err.to_string())
    }
}
