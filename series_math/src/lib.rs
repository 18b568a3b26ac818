//! # Series Math
//!
//! Numeric building blocks for ordered series: a streaming fixed-window mean
//! and a few summary statistics that tolerate missing (`NaN`) entries.

use thiserror::Error;

pub mod rolling;
pub mod stats;

pub use rolling::RollingMean;

/// Errors that can occur in series calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for series math operations
pub type Result<T> = std::result::Result<T, MathError>;
