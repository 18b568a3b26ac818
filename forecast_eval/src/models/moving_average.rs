//! Moving average baseline

use crate::error::{ForecastError, Result};
use crate::models::{
    check_horizon, observed_training_values, ForecastModel, ForecastResult, TrainedForecastModel,
};
use crate::series::ObservationSeries;
use series_math::RollingMean;

/// Forecasts the mean of the last `window` observed values
#[derive(Debug, Clone)]
pub struct MovingAverage {
    name: String,
    window: usize,
}

/// Trained moving average model
#[derive(Debug, Clone)]
pub struct TrainedMovingAverage {
    name: String,
    last_average: f64,
}

impl MovingAverage {
    /// Create a new moving average model
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Moving Average (window={})", window),
            window,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl ForecastModel for MovingAverage {
    type Trained = TrainedMovingAverage;

    fn train(&self, series: &ObservationSeries) -> Result<Self::Trained> {
        let values = observed_training_values(series)?;

        let mut rolling = RollingMean::new(self.window)?;
        for value in values {
            rolling.update(value);
        }

        Ok(TrainedMovingAverage {
            name: self.name.clone(),
            last_average: rolling.value()?,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedForecastModel for TrainedMovingAverage {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        check_horizon(horizon)?;
        // Flat forecast at the last window mean
        ForecastResult::new(vec![self.last_average; horizon], horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
