//! Simple exponential smoothing baseline

use crate::error::{ForecastError, Result};
use crate::models::{
    check_horizon, observed_training_values, ForecastModel, ForecastResult, TrainedForecastModel,
};
use crate::series::ObservationSeries;

/// Simple exponential smoothing model
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    name: String,
    alpha: f64,
}

/// Trained exponential smoothing model
#[derive(Debug, Clone)]
pub struct TrainedExponentialSmoothing {
    name: String,
    level: f64,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing model
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ForecastError::InvalidParameter(
                "Alpha must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            alpha,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl ForecastModel for ExponentialSmoothing {
    type Trained = TrainedExponentialSmoothing;

    fn train(&self, series: &ObservationSeries) -> Result<Self::Trained> {
        let values = observed_training_values(series)?;

        // Level starts at the first observation
        let level = values[1..]
            .iter()
            .fold(values[0], |level, &value| {
                self.alpha * value + (1.0 - self.alpha) * level
            });

        Ok(TrainedExponentialSmoothing {
            name: self.name.clone(),
            level,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedExponentialSmoothing {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        check_horizon(horizon)?;
        ForecastResult::new(vec![self.level; horizon], horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
