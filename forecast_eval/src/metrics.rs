//! Forecast accuracy scoring

use crate::error::{ForecastError, Result};
use crate::series::ObservationSeries;
use serde::Serialize;
use tracing::debug;

/// Accuracy of one model's predictions over one aligned window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    /// Model label supplied by the caller
    pub model: String,
    /// Entity the predictions belong to, when scored from a series
    pub entity: Option<String>,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Absolute Percentage Error as a fraction; `NaN` when every actual is zero
    pub mape: f64,
    /// Number of aligned points that were scored
    pub count: usize,
}

impl MetricResult {
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// MAPE expressed in percent
    pub fn mape_percent(&self) -> f64 {
        self.mape * 100.0
    }
}

impl std::fmt::Display for MetricResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.entity {
            Some(entity) => writeln!(f, "{} [{}] ({} points):", self.model, entity, self.count)?,
            None => writeln!(f, "{} ({} points):", self.model, self.count)?,
        }
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  MAPE:  {:.4}%", self.mape_percent())?;
        Ok(())
    }
}

/// Scores predictions against actual values with RMSE, MAE and MAPE
///
/// Positions where the actual value is missing (`NaN`) or the prediction is
/// not finite are dropped from all three metrics. MAPE additionally skips
/// positions whose actual value is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastScorer;

impl ForecastScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score `predicted` against `actual`, index by index
    pub fn score(&self, model: &str, actual: &[f64], predicted: &[f64]) -> Result<MetricResult> {
        if actual.len() != predicted.len() {
            return Err(ForecastError::Alignment {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }
        if actual.is_empty() {
            return Err(ForecastError::EmptySeries(
                "nothing to score: actual and predicted are empty".to_string(),
            ));
        }

        let mut count = 0usize;
        let mut squared_sum = 0.0;
        let mut absolute_sum = 0.0;
        let mut percentage_count = 0usize;
        let mut percentage_sum = 0.0;

        for (&a, &p) in actual.iter().zip(predicted) {
            if !a.is_finite() || !p.is_finite() {
                continue;
            }

            let error = a - p;
            count += 1;
            squared_sum += error * error;
            absolute_sum += error.abs();

            if a != 0.0 {
                percentage_count += 1;
                percentage_sum += (error / a).abs();
            }
        }

        if count == 0 {
            return Err(ForecastError::EmptySeries(
                "no aligned points have both an actual and a predicted value".to_string(),
            ));
        }

        let n = count as f64;
        let mape = if percentage_count == 0 {
            f64::NAN
        } else {
            percentage_sum / percentage_count as f64
        };

        let result = MetricResult {
            model: model.to_string(),
            entity: None,
            rmse: (squared_sum / n).sqrt(),
            mae: absolute_sum / n,
            mape,
            count,
        };
        debug!(model, rmse = result.rmse, mae = result.mae, mape = result.mape, count, "scored forecast");

        Ok(result)
    }

    /// Score predictions for a validation series, tagging the result with its entity key
    pub fn score_series(
        &self,
        model: &str,
        validation: &ObservationSeries,
        predicted: &[f64],
    ) -> Result<MetricResult> {
        let actual = validation.values_or_nan();
        Ok(self
            .score(model, &actual, predicted)?
            .with_entity(validation.key()))
    }
}
