//! Streaming fixed-window mean
//!
//! `RollingMean` keeps the last `period` values and sums the window on read.
//! The mean is only available once the window is full.

use crate::{MathError, Result};
use serde::Serialize;
use std::collections::VecDeque;

/// Trailing fixed-window mean over a stream of values
#[derive(Debug, Clone, Serialize)]
pub struct RollingMean {
    period: usize,
    values: VecDeque<f64>,
}

impl RollingMean {
    /// Create a new rolling mean over `period` values
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(MathError::InvalidInput(
                "Period must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            values: VecDeque::with_capacity(period),
        })
    }

    /// Push a value into the window, evicting the oldest one when full
    pub fn update(&mut self, value: f64) {
        if self.values.len() == self.period {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Get the current mean
    pub fn value(&self) -> Result<f64> {
        if !self.is_ready() {
            return Err(MathError::InsufficientData(format!(
                "Not enough data for rolling mean. Need {} values, have {}.",
                self.period,
                self.values.len()
            )));
        }

        Ok(self.sum() / self.period as f64)
    }

    /// Current mean if the window is full
    pub fn current(&self) -> Option<f64> {
        self.value().ok()
    }

    /// True once `period` values have been pushed since the last reset
    pub fn is_ready(&self) -> bool {
        self.values.len() == self.period
    }

    /// Number of values currently held
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the window length
    pub fn period(&self) -> usize {
        self.period
    }

    /// Sum of the values in the window
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Clear the window
    pub fn reset(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rolling_mean_calculation() {
        let mut rm = RollingMean::new(3).unwrap();

        // Not enough data yet
        assert!(rm.value().is_err());

        rm.update(2.0);
        rm.update(4.0);
        assert!(rm.current().is_none());

        rm.update(6.0);
        assert_relative_eq!(rm.value().unwrap(), 4.0);

        rm.update(8.0);
        assert_relative_eq!(rm.value().unwrap(), 6.0);
        assert_eq!(rm.len(), 3);
        assert_relative_eq!(rm.sum(), 18.0);
    }

    #[test]
    fn test_large_value_leaves_no_residue() {
        let mut rm = RollingMean::new(2).unwrap();
        rm.update(1e17);
        rm.update(1.0);
        assert_relative_eq!(rm.value().unwrap(), 5e16);

        rm.update(1.0);
        assert_eq!(rm.value().unwrap(), 1.0);
        rm.update(1.0);
        assert_eq!(rm.value().unwrap(), 1.0);
    }

    #[test]
    fn test_zero_period_rejected() {
        assert_eq!(
            RollingMean::new(0).unwrap_err(),
            MathError::InvalidInput("Period must be greater than zero".to_string())
        );
    }

    #[test]
    fn test_reset_restarts_window() {
        let mut rm = RollingMean::new(2).unwrap();
        rm.update(1.0);
        rm.update(3.0);
        assert!(rm.is_ready());

        rm.reset();
        assert!(rm.is_empty());
        assert!(rm.value().is_err());

        rm.update(5.0);
        rm.update(7.0);
        assert_relative_eq!(rm.value().unwrap(), 6.0);
    }
}
