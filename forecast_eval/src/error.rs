//! Error types for the forecast_eval crate

use thiserror::Error;

/// Custom error types for the forecast_eval crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Split requested with a horizon outside `0 < horizon < len`
    #[error("Invalid horizon: {horizon} for a series of {len} observations (need 0 < horizon < length)")]
    InvalidHorizon { horizon: usize, len: usize },

    /// Actual and predicted sequences differ in length
    #[error("Alignment error: {actual} actual values vs {predicted} predicted values")]
    Alignment { actual: usize, predicted: usize },

    /// Zero-length input, or nothing left to score
    #[error("Empty series: {0}")]
    EmptySeries(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data validation or ingestion
    #[error("Data error: {0}")]
    DataError(String),

    /// A forecasting model could not be trained or queried
    #[error("Model error: {0}")]
    ModelError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the CSV reader
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error reading or writing JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error from rolling-window calculations
    #[error("Math error: {0}")]
    MathError(#[from] series_math::MathError),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
