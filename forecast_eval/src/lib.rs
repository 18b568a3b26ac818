//! # Forecast Eval
//!
//! Holdout evaluation for retail sales forecasts.
//!
//! ## Features
//!
//! - Per-entity (store × department) observation series loaded from CSV
//! - Positional train/validation splitting and walk-forward folds
//! - RMSE, MAE and MAPE scoring with missing-value handling
//! - Lag-1 and rolling-mean feature rows
//! - Baseline models (naive, seasonal naive, moving average, exponential
//!   smoothing) behind a pluggable `ForecastModel` trait
//! - Model comparison across many series
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forecast_eval::data::SalesLoader;
//! use forecast_eval::evaluate::Evaluator;
//! use forecast_eval::models::ModelSpec;
//!
//! let series = SalesLoader::default().load_csv("train.csv")?;
//! let evaluator = Evaluator::from_specs(12, &ModelSpec::defaults())?;
//! let report = evaluator.evaluate(&series);
//! println!("{}", report.comparison);
//! # Ok::<(), forecast_eval::ForecastError>(())
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod evaluate;
pub mod features;
pub mod metrics;
pub mod models;
pub mod series;
pub mod split;

// Re-export commonly used types
pub use crate::config::EvalConfig;
pub use crate::data::{ColumnConfig, SalesLoader};
pub use crate::error::{ForecastError, Result};
pub use crate::evaluate::{EvaluationReport, Evaluator, ModelComparison};
pub use crate::features::{FeatureBuilder, FeatureRow};
pub use crate::metrics::{ForecastScorer, MetricResult};
pub use crate::models::{ForecastModel, ForecastResult, ModelSpec, TrainedForecastModel};
pub use crate::series::{Observation, ObservationSeries};
pub use crate::split::{Split, TimeSeriesSplitter, WalkForward};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
