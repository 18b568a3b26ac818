//! Evaluation configuration

use crate::data::ColumnConfig;
use crate::error::{ForecastError, Result};
use crate::models::ModelSpec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one evaluation run, loadable from JSON
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Sales CSV to load
    pub input: Option<PathBuf>,
    /// Where to write the JSON report
    pub output: Option<PathBuf>,
    /// Trailing observations held out per series
    pub horizon: usize,
    /// Rolling-mean window for feature output
    pub window: usize,
    pub columns: ColumnConfig,
    pub models: Vec<ModelSpec>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            horizon: 12,
            window: 4,
            columns: ColumnConfig::default(),
            models: ModelSpec::defaults(),
        }
    }
}

impl EvalConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "horizon must be positive".to_string(),
            ));
        }
        if self.window < 2 {
            return Err(ForecastError::InvalidParameter(format!(
                "window must be at least 2, got {}",
                self.window
            )));
        }
        if self.models.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "at least one model must be configured".to_string(),
            ));
        }
        if self.columns.date_column.is_empty() || self.columns.value_column.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "date and value column names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
