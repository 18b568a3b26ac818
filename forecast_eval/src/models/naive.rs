//! Naive and seasonal naive baselines

use crate::error::{ForecastError, Result};
use crate::models::{
    check_horizon, observed_training_values, ForecastModel, ForecastResult, TrainedForecastModel,
};
use crate::series::ObservationSeries;

/// Repeats the last observed value
#[derive(Debug, Clone)]
pub struct Naive {
    name: String,
}

/// Trained naive model
#[derive(Debug, Clone)]
pub struct TrainedNaive {
    name: String,
    last_value: f64,
}

impl Naive {
    pub fn new() -> Self {
        Self {
            name: "Naive".to_string(),
        }
    }
}

impl Default for Naive {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for Naive {
    type Trained = TrainedNaive;

    fn train(&self, series: &ObservationSeries) -> Result<Self::Trained> {
        let values = observed_training_values(series)?;

        Ok(TrainedNaive {
            name: self.name.clone(),
            last_value: values[values.len() - 1],
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedNaive {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        check_horizon(horizon)?;
        ForecastResult::new(vec![self.last_value; horizon], horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Repeats the last full season of observed values
#[derive(Debug, Clone)]
pub struct SeasonalNaive {
    name: String,
    period: usize,
}

/// Trained seasonal naive model
#[derive(Debug, Clone)]
pub struct TrainedSeasonalNaive {
    name: String,
    season: Vec<f64>,
}

impl SeasonalNaive {
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(ForecastError::InvalidParameter(
                "Seasonal period must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Seasonal Naive (period={})", period),
            period,
        })
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

impl ForecastModel for SeasonalNaive {
    type Trained = TrainedSeasonalNaive;

    fn train(&self, series: &ObservationSeries) -> Result<Self::Trained> {
        let values = observed_training_values(series)?;
        if values.len() < self.period {
            return Err(ForecastError::ModelError(format!(
                "Insufficient data for {}. Need at least {} observations, have {}.",
                self.name,
                self.period,
                values.len()
            )));
        }

        Ok(TrainedSeasonalNaive {
            name: self.name.clone(),
            season: values[values.len() - self.period..].to_vec(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedSeasonalNaive {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        check_horizon(horizon)?;
        let values = (0..horizon)
            .map(|i| self.season[i % self.season.len()])
            .collect();

        ForecastResult::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
