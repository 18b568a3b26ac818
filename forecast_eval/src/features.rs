//! Lag and rolling-mean features over one ordered series

use crate::error::{ForecastError, Result};
use crate::series::{Observation, ObservationSeries};
use chrono::NaiveDate;
use serde::Serialize;
use series_math::RollingMean;
use std::iter::FusedIterator;

/// One input observation extended with its derived features
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRow {
    pub timestamp: NaiveDate,
    pub value: Option<f64>,
    /// Value of the previous observation; `None` for the first row
    pub lag_1: Option<f64>,
    /// Mean of this value and the `window - 1` before it; `None` until the window is full
    pub rolling_mean: Option<f64>,
}

/// Builds lag-1 and trailing rolling-mean features
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureBuilder {
    window: usize,
}

impl FeatureBuilder {
    /// Create a builder with a rolling window of `window` (at least 2) values
    pub fn new(window: usize) -> Result<Self> {
        if window < 2 {
            return Err(ForecastError::InvalidParameter(format!(
                "Rolling window must be at least 2, got {}",
                window
            )));
        }

        Ok(Self { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Lazily derive one [`FeatureRow`] per observation, in input order
    pub fn build<'a>(&self, series: &'a ObservationSeries) -> Result<FeatureRows<'a>> {
        Ok(FeatureRows {
            observations: series.observations(),
            position: 0,
            rolling: RollingMean::new(self.window)?,
        })
    }
}

/// Iterator over the feature rows of a series
///
/// A missing value clears the rolling window, so no rolling mean is reported
/// until `window` consecutive known values follow the gap.
#[derive(Debug, Clone)]
pub struct FeatureRows<'a> {
    observations: &'a [Observation],
    position: usize,
    rolling: RollingMean,
}

impl Iterator for FeatureRows<'_> {
    type Item = FeatureRow;

    fn next(&mut self) -> Option<Self::Item> {
        let observation = self.observations.get(self.position)?;
        let lag_1 = self
            .position
            .checked_sub(1)
            .and_then(|prev| self.observations[prev].value);

        let rolling_mean = match observation.value {
            Some(value) => {
                self.rolling.update(value);
                self.rolling.current()
            }
            None => {
                self.rolling.reset();
                None
            }
        };

        self.position += 1;

        Some(FeatureRow {
            timestamp: observation.timestamp,
            value: observation.value,
            lag_1,
            rolling_mean,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.observations.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FeatureRows<'_> {}

impl FusedIterator for FeatureRows<'_> {}
