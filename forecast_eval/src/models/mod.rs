//! Forecasting models behind an interchangeable train/forecast seam
//!
//! Any model, in-crate baseline or external, plugs into evaluation by
//! implementing [`ForecastModel`] and [`TrainedForecastModel`].

use crate::error::{ForecastError, Result};
use crate::series::ObservationSeries;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub mod exponential_smoothing;
pub mod moving_average;
pub mod naive;

pub use exponential_smoothing::ExponentialSmoothing;
pub use moving_average::MovingAverage;
pub use naive::{Naive, SeasonalNaive};

/// Forecast result containing predicted values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    values: Vec<f64>,
    horizon: usize,
}

impl ForecastResult {
    /// Create a new forecast result
    pub fn new(values: Vec<f64>, horizon: usize) -> Result<Self> {
        if values.len() != horizon {
            return Err(ForecastError::ModelError(format!(
                "Values length ({}) doesn't match horizon ({})",
                values.len(),
                horizon
            )));
        }

        Ok(Self { values, horizon })
    }

    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of periods forecasted
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Generate forecast for the next `horizon` periods
    fn forecast(&self, horizon: usize) -> Result<ForecastResult>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on a series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on a series
    fn train(&self, series: &ObservationSeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

/// Object-safe train-then-forecast, so different models can share one list
pub trait DynForecaster: Debug + Send + Sync {
    /// Label used in metric results
    fn label(&self) -> &str;

    /// Train on `train` and forecast the next `horizon` periods
    fn fit_forecast(&self, train: &ObservationSeries, horizon: usize) -> Result<ForecastResult>;
}

impl<M> DynForecaster for M
where
    M: ForecastModel + Send + Sync,
{
    fn label(&self) -> &str {
        ForecastModel::name(self)
    }

    fn fit_forecast(&self, train: &ObservationSeries, horizon: usize) -> Result<ForecastResult> {
        self.train(train)?.forecast(horizon)
    }
}

/// Configurable choice of a baseline model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ModelSpec {
    Naive,
    SeasonalNaive { period: usize },
    MovingAverage { window: usize },
    ExponentialSmoothing { alpha: f64 },
}

impl ModelSpec {
    /// Instantiate the model this spec describes
    pub fn build(&self) -> Result<Box<dyn DynForecaster>> {
        let model: Box<dyn DynForecaster> = match *self {
            ModelSpec::Naive => Box::new(Naive::new()),
            ModelSpec::SeasonalNaive { period } => Box::new(SeasonalNaive::new(period)?),
            ModelSpec::MovingAverage { window } => Box::new(MovingAverage::new(window)?),
            ModelSpec::ExponentialSmoothing { alpha } => {
                Box::new(ExponentialSmoothing::new(alpha)?)
            }
        };
        Ok(model)
    }

    /// Baselines compared when nothing else is configured (weekly data)
    pub fn defaults() -> Vec<ModelSpec> {
        vec![
            ModelSpec::Naive,
            ModelSpec::SeasonalNaive { period: 52 },
            ModelSpec::MovingAverage { window: 4 },
            ModelSpec::ExponentialSmoothing { alpha: 0.3 },
        ]
    }
}

/// Known training values, failing when the series has none
pub(crate) fn observed_training_values(series: &ObservationSeries) -> Result<Vec<f64>> {
    let values = series.observed_values();
    if values.is_empty() {
        return Err(ForecastError::EmptySeries(format!(
            "series '{}' has no observed values to train on",
            series.key()
        )));
    }
    Ok(values)
}

pub(crate) fn check_horizon(horizon: usize) -> Result<()> {
    if horizon == 0 {
        return Err(ForecastError::InvalidParameter(
            "Forecast horizon must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_result_length_checked() {
        assert!(ForecastResult::new(vec![1.0, 2.0], 2).is_ok());
        assert!(ForecastResult::new(vec![1.0], 2).is_err());
    }

    #[test]
    fn test_model_spec_from_json() {
        let specs: Vec<ModelSpec> = serde_json::from_str(
            r#"[{"model": "naive"}, {"model": "moving_average", "window": 3}]"#,
        )
        .unwrap();

        assert_eq!(
            specs,
            vec![ModelSpec::Naive, ModelSpec::MovingAverage { window: 3 }]
        );
        assert_eq!(specs[1].build().unwrap().label(), "Moving Average (window=3)");
    }

    #[test]
    fn test_model_spec_build_validates() {
        assert!(ModelSpec::SeasonalNaive { period: 0 }.build().is_err());
        assert!(ModelSpec::ExponentialSmoothing { alpha: 1.5 }.build().is_err());
        assert_eq!(ModelSpec::defaults().len(), 4);
    }
}
