//! Ordered, per-entity observation series

use crate::error::{ForecastError, Result};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single timestamped value; `None` marks a missing observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: NaiveDate,
    pub value: Option<f64>,
}

impl Observation {
    /// Create an observation, treating non-finite values as missing
    pub fn new(timestamp: NaiveDate, value: Option<f64>) -> Self {
        Self {
            timestamp,
            value: value.filter(|v| v.is_finite()),
        }
    }

    /// Observation with a known value
    pub fn observed(timestamp: NaiveDate, value: f64) -> Self {
        Self::new(timestamp, Some(value))
    }

    /// Observation whose value is unknown
    pub fn missing(timestamp: NaiveDate) -> Self {
        Self::new(timestamp, None)
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

/// Chronologically ordered observations for one entity (e.g. store × department)
///
/// Timestamps are strictly increasing and the series is never empty. Once
/// built the series is not mutated; splitting produces new series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationSeries {
    key: String,
    observations: Vec<Observation>,
}

impl ObservationSeries {
    /// Build a series, validating that it is non-empty and strictly increasing in time
    pub fn new(key: impl Into<String>, observations: Vec<Observation>) -> Result<Self> {
        let key = key.into();

        if observations.is_empty() {
            return Err(ForecastError::EmptySeries(format!(
                "series '{}' has no observations",
                key
            )));
        }

        if let Some(pair) = observations
            .windows(2)
            .find(|pair| pair[0].timestamp >= pair[1].timestamp)
        {
            return Err(ForecastError::DataError(format!(
                "timestamps in series '{}' must be strictly increasing: {} is followed by {}",
                key, pair[0].timestamp, pair[1].timestamp
            )));
        }

        Ok(Self { key, observations })
    }

    /// Build a regularly spaced series of observed values starting at `start`
    pub fn from_values(
        key: impl Into<String>,
        start: NaiveDate,
        step: Duration,
        values: &[f64],
    ) -> Result<Self> {
        if step <= Duration::zero() {
            return Err(ForecastError::InvalidParameter(
                "Step between observations must be positive".to_string(),
            ));
        }

        let observations = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let timestamp = i32::try_from(i)
                    .ok()
                    .and_then(|n| step.checked_mul(n))
                    .and_then(|offset| start.checked_add_signed(offset))
                    .ok_or_else(|| {
                        ForecastError::InvalidParameter(format!(
                            "Timestamp of observation {} is out of the supported date range",
                            i
                        ))
                    })?;
                Ok(Observation::observed(timestamp, value))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(key, observations)
    }

    /// Entity key this series belongs to
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn timestamps(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.observations.iter().map(|o| o.timestamp)
    }

    /// Values in order, with `None` for missing observations
    pub fn values(&self) -> Vec<Option<f64>> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Values in order with missing observations as `NaN`
    pub fn values_or_nan(&self) -> Vec<f64> {
        self.observations
            .iter()
            .map(|o| o.value.unwrap_or(f64::NAN))
            .collect()
    }

    /// Only the known values, in order
    pub fn observed_values(&self) -> Vec<f64> {
        self.observations.iter().filter_map(|o| o.value).collect()
    }

    /// Number of missing observations
    pub fn missing_count(&self) -> usize {
        self.observations.iter().filter(|o| o.is_missing()).count()
    }

    pub fn first_timestamp(&self) -> NaiveDate {
        self.observations[0].timestamp
    }

    pub fn last_timestamp(&self) -> NaiveDate {
        self.observations[self.observations.len() - 1].timestamp
    }

    /// The first `len` observations as a new series
    pub fn head(&self, len: usize) -> Result<Self> {
        if len == 0 || len > self.len() {
            return Err(ForecastError::InvalidParameter(format!(
                "cannot take {} leading observations from a series of {}",
                len,
                self.len()
            )));
        }

        Ok(Self {
            key: self.key.clone(),
            observations: self.observations[..len].to_vec(),
        })
    }

    /// Split into `[..at]` and `[at..]`; callers guarantee `0 < at < len`
    pub(crate) fn split_at(&self, at: usize) -> (Self, Self) {
        debug_assert!(at > 0 && at < self.len());
        let (head, tail) = self.observations.split_at(at);
        (
            Self {
                key: self.key.clone(),
                observations: head.to_vec(),
            },
            Self {
                key: self.key.clone(),
                observations: tail.to_vec(),
            },
        )
    }
}
