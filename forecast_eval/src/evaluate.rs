//! Split → train → forecast → score, across series and models

use crate::error::{ForecastError, Result};
use crate::metrics::{ForecastScorer, MetricResult};
use crate::models::{DynForecaster, ModelSpec};
use crate::series::ObservationSeries;
use crate::split::{Split, TimeSeriesSplitter, WalkForward};
use chrono::NaiveDate;
use serde::Serialize;
use series_math::stats::{mean, nan_mean};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A (series, model) pair that could not be scored
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedEvaluation {
    pub entity: String,
    /// `None` when the series itself could not be split
    pub model: Option<String>,
    pub reason: String,
}

/// Mean scores of one model across every series it was scored on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub model: String,
    /// Mean over all `series_scored` series; infinite if any series was
    pub mean_rmse: f64,
    pub mean_mae: f64,
    /// Mean over series with a defined MAPE; `NaN` if none had one
    pub mean_mape: f64,
    pub series_scored: usize,
}

/// Per-model summaries, best (lowest mean RMSE) first
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ModelComparison {
    pub summaries: Vec<ModelSummary>,
}

impl ModelComparison {
    /// Aggregate metric results by model label
    pub fn from_results(results: &[MetricResult]) -> Self {
        let mut labels: Vec<&str> = Vec::new();
        for result in results {
            if !labels.contains(&result.model.as_str()) {
                labels.push(&result.model);
            }
        }

        let mut summaries: Vec<ModelSummary> = labels
            .into_iter()
            .map(|label| {
                let scored: Vec<&MetricResult> =
                    results.iter().filter(|r| r.model == label).collect();
                let rmse: Vec<f64> = scored.iter().map(|r| r.rmse).collect();
                let mae: Vec<f64> = scored.iter().map(|r| r.mae).collect();
                let mape: Vec<f64> = scored.iter().map(|r| r.mape).collect();

                ModelSummary {
                    model: label.to_string(),
                    mean_rmse: mean(&rmse).unwrap_or(f64::NAN),
                    mean_mae: mean(&mae).unwrap_or(f64::NAN),
                    mean_mape: nan_mean(&mape),
                    series_scored: scored.len(),
                }
            })
            .collect();

        summaries.sort_by(|a, b| a.mean_rmse.total_cmp(&b.mean_rmse));
        Self { summaries }
    }

    /// Model with the lowest mean RMSE
    pub fn best(&self) -> Option<&ModelSummary> {
        self.summaries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

impl std::fmt::Display for ModelComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<36} {:>14} {:>14} {:>10} {:>8}",
            "Model", "RMSE", "MAE", "MAPE%", "Series"
        )?;
        writeln!(f, "{}", "-".repeat(86))?;
        for s in &self.summaries {
            writeln!(
                f,
                "{:<36} {:>14.4} {:>14.4} {:>10.2} {:>8}",
                s.model,
                s.mean_rmse,
                s.mean_mae,
                s.mean_mape * 100.0,
                s.series_scored
            )?;
        }
        Ok(())
    }
}

/// Outcome of evaluating every model on every series
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub horizon: usize,
    pub results: Vec<MetricResult>,
    pub skipped: Vec<SkippedEvaluation>,
    pub comparison: ModelComparison,
}

impl EvaluationReport {
    /// Results for one model label
    pub fn results_for<'a>(&'a self, model: &'a str) -> impl Iterator<Item = &'a MetricResult> + 'a {
        self.results.iter().filter(move |r| r.model == model)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Scores of every model on one walk-forward fold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoldResult {
    pub fold: usize,
    /// First validation date of the fold
    pub cutoff: NaiveDate,
    pub train_len: usize,
    pub metrics: Vec<MetricResult>,
}

#[derive(Debug, Default)]
struct SeriesOutcome {
    results: Vec<MetricResult>,
    skipped: Vec<SkippedEvaluation>,
}

/// Runs the holdout evaluation for a fixed horizon and set of models
#[derive(Debug)]
pub struct Evaluator {
    splitter: TimeSeriesSplitter,
    scorer: ForecastScorer,
    models: Vec<Box<dyn DynForecaster>>,
}

impl Evaluator {
    pub fn new(horizon: usize, models: Vec<Box<dyn DynForecaster>>) -> Result<Self> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Evaluation horizon must be positive".to_string(),
            ));
        }
        if models.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "At least one model is required".to_string(),
            ));
        }

        Ok(Self {
            splitter: TimeSeriesSplitter::new(horizon),
            scorer: ForecastScorer::new(),
            models,
        })
    }

    /// Build an evaluator from configured model specs
    pub fn from_specs(horizon: usize, specs: &[ModelSpec]) -> Result<Self> {
        let models = specs
            .iter()
            .map(ModelSpec::build)
            .collect::<Result<Vec<_>>>()?;
        Self::new(horizon, models)
    }

    pub fn horizon(&self) -> usize {
        self.splitter.horizon()
    }

    pub fn model_labels(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.label()).collect()
    }

    /// Score every model on the holdout window of every series
    ///
    /// Series are independent; a failure on one (series, model) pair is
    /// recorded in [`EvaluationReport::skipped`] and the run continues.
    pub fn evaluate(&self, series: &[ObservationSeries]) -> EvaluationReport {
        info!(
            series = series.len(),
            models = self.models.len(),
            horizon = self.horizon(),
            "evaluating forecasts"
        );

        #[cfg(feature = "parallel")]
        let outcomes: Vec<SeriesOutcome> =
            series.par_iter().map(|s| self.evaluate_series(s)).collect();
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<SeriesOutcome> = series.iter().map(|s| self.evaluate_series(s)).collect();

        let mut results = Vec::new();
        let mut skipped = Vec::new();
        for outcome in outcomes {
            results.extend(outcome.results);
            skipped.extend(outcome.skipped);
        }

        let comparison = ModelComparison::from_results(&results);
        info!(
            scored = results.len(),
            skipped = skipped.len(),
            "evaluation finished"
        );

        EvaluationReport {
            horizon: self.horizon(),
            results,
            skipped,
            comparison,
        }
    }

    /// Score every model on each walk-forward fold of one series
    pub fn walk_forward(
        &self,
        series: &ObservationSeries,
        walk: &WalkForward,
    ) -> Result<Vec<FoldResult>> {
        walk.folds(series)?
            .iter()
            .enumerate()
            .map(|(fold, split)| {
                let metrics = self
                    .models
                    .iter()
                    .map(|model| self.score_split(model.as_ref(), split))
                    .collect::<Result<Vec<_>>>()?;

                Ok(FoldResult {
                    fold,
                    cutoff: split.cutoff(),
                    train_len: split.train.len(),
                    metrics,
                })
            })
            .collect()
    }

    fn evaluate_series(&self, series: &ObservationSeries) -> SeriesOutcome {
        let mut outcome = SeriesOutcome::default();

        let split = match self.splitter.split(series) {
            Ok(split) => split,
            Err(e) => {
                warn!(entity = series.key(), error = %e, "skipping series");
                outcome.skipped.push(SkippedEvaluation {
                    entity: series.key().to_string(),
                    model: None,
                    reason: e.to_string(),
                });
                return outcome;
            }
        };

        for model in &self.models {
            match self.score_split(model.as_ref(), &split) {
                Ok(result) => outcome.results.push(result),
                Err(e) => {
                    warn!(entity = series.key(), model = model.label(), error = %e, "skipping model");
                    outcome.skipped.push(SkippedEvaluation {
                        entity: series.key().to_string(),
                        model: Some(model.label().to_string()),
                        reason: e.to_string(),
                    });
                }
            }
        }

        outcome
    }

    fn score_split(&self, model: &dyn DynForecaster, split: &Split) -> Result<MetricResult> {
        let forecast = model.fit_forecast(&split.train, split.horizon())?;
        self.scorer
            .score_series(model.label(), &split.validation, forecast.values())
    }
}
