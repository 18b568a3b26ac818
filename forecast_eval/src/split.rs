//! Positional train/validation splitting for ordered series
//!
//! The split point is always `len - horizon`; it never depends on dates or
//! on a fraction of the series.

use crate::error::{ForecastError, Result};
use crate::series::ObservationSeries;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// A training prefix and the held-out validation suffix of one series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Split {
    pub train: ObservationSeries,
    pub validation: ObservationSeries,
}

impl Split {
    /// Number of held-out observations
    pub fn horizon(&self) -> usize {
        self.validation.len()
    }

    /// First timestamp of the validation window
    pub fn cutoff(&self) -> NaiveDate {
        self.validation.first_timestamp()
    }
}

/// Holds out the last `horizon` observations of a series for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSeriesSplitter {
    horizon: usize,
}

impl TimeSeriesSplitter {
    pub fn new(horizon: usize) -> Self {
        Self { horizon }
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Split `series` into `series[..len - horizon]` and `series[len - horizon..]`
    pub fn split(&self, series: &ObservationSeries) -> Result<Split> {
        let len = series.len();
        if len == 0 {
            return Err(ForecastError::EmptySeries(format!(
                "cannot split empty series '{}'",
                series.key()
            )));
        }

        if self.horizon == 0 || self.horizon >= len {
            return Err(ForecastError::InvalidHorizon {
                horizon: self.horizon,
                len,
            });
        }

        let at = len - self.horizon;
        let (train, validation) = series.split_at(at);
        debug!(
            entity = series.key(),
            train = train.len(),
            validation = validation.len(),
            "split series"
        );

        Ok(Split { train, validation })
    }
}

/// Split a series holding out its last `horizon` observations
pub fn train_validation_split(series: &ObservationSeries, horizon: usize) -> Result<Split> {
    TimeSeriesSplitter::new(horizon).split(series)
}

/// Expanding-window folds for walk-forward evaluation
///
/// Fold `i` sees the first `initial_train + i * step + horizon` observations
/// and splits them with [`TimeSeriesSplitter`], so every fold validates on the
/// `horizon` points right after its training prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkForward {
    horizon: usize,
    initial_train: usize,
    step: usize,
}

impl WalkForward {
    pub fn new(horizon: usize, initial_train: usize, step: usize) -> Result<Self> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Walk-forward horizon must be positive".to_string(),
            ));
        }
        if initial_train == 0 {
            return Err(ForecastError::InvalidParameter(
                "Initial training window must be positive".to_string(),
            ));
        }
        if step == 0 {
            return Err(ForecastError::InvalidParameter(
                "Walk-forward step must be positive".to_string(),
            ));
        }

        Ok(Self {
            horizon,
            initial_train,
            step,
        })
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn initial_train(&self) -> usize {
        self.initial_train
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of folds a series of `len` observations yields
    pub fn fold_count(&self, len: usize) -> usize {
        let first_end = self.initial_train + self.horizon;
        if len < first_end {
            0
        } else {
            (len - first_end) / self.step + 1
        }
    }

    /// All folds of `series`, oldest cutoff first
    pub fn folds(&self, series: &ObservationSeries) -> Result<Vec<Split>> {
        let len = series.len();
        let count = self.fold_count(len);
        if count == 0 {
            return Err(ForecastError::InvalidHorizon {
                horizon: self.horizon,
                len: len.min(self.initial_train),
            });
        }

        let splitter = TimeSeriesSplitter::new(self.horizon);
        (0..count)
            .map(|i| {
                let visible = series.head(self.initial_train + i * self.step + self.horizon)?;
                splitter.split(&visible)
            })
            .collect()
    }
}
