//! # Sales Forecast Workspace
//!
//! Facade over the workspace crates:
//!
//! - [`forecast_eval`]: series, splitting, scoring, features, baselines and evaluation
//! - [`series_math`]: rolling-window and summary statistics
//!
//! ## Example
//!
//! ```
//! use sales_forecast_workspace::forecast_eval::ForecastScorer;
//!
//! let result = ForecastScorer::new()
//!     .score("Naive", &[100.0, 200.0, 300.0], &[110.0, 190.0, 300.0])
//!     .unwrap();
//! assert!((result.mape - 0.05).abs() < 1e-12);
//! ```

pub use forecast_eval;
pub use series_math;
