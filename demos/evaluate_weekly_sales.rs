//! Walk through split → forecast → score on a synthetic weekly sales series
//!
//! Run with: cargo run --example evaluate_weekly_sales

use chrono::{Duration, NaiveDate};
use sales_forecast_workspace::forecast_eval::split::WalkForward;
use sales_forecast_workspace::forecast_eval::{
    Evaluator, FeatureBuilder, ModelSpec, ObservationSeries, TimeSeriesSplitter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two years of weekly sales with a yearly cycle and a slow upward trend
    let values: Vec<f64> = (0..104)
        .map(|week| {
            let trend = 20_000.0 + 25.0 * week as f64;
            let season = 4_000.0 * ((week % 52) as f64 * std::f64::consts::PI / 26.0).sin();
            trend + season
        })
        .collect();
    let series = ObservationSeries::from_values(
        "1-1",
        NaiveDate::from_ymd_opt(2010, 2, 5).unwrap(),
        Duration::weeks(1),
        &values,
    )?;

    let split = TimeSeriesSplitter::new(12).split(&series)?;
    println!(
        "Train: {} weeks up to {}, validation: {} weeks from {}",
        split.train.len(),
        split.train.last_timestamp(),
        split.validation.len(),
        split.cutoff()
    );

    println!("\nFirst features (window=4):");
    for row in FeatureBuilder::new(4)?.build(&series)?.take(6) {
        println!(
            "  {}  value={:?}  lag_1={:?}  rolling={:?}",
            row.timestamp, row.value, row.lag_1, row.rolling_mean
        );
    }

    let evaluator = Evaluator::from_specs(12, &ModelSpec::defaults())?;
    let report = evaluator.evaluate(std::slice::from_ref(&series));
    println!("\n{}", report.comparison);

    let walk = WalkForward::new(12, 60, 8)?;
    println!("Walk-forward folds:");
    for fold in evaluator.walk_forward(&series, &walk)? {
        let best = fold
            .metrics
            .iter()
            .min_by(|a, b| a.rmse.total_cmp(&b.rmse))
            .map(|m| m.model.as_str())
            .unwrap_or("-");
        println!(
            "  fold {} (cutoff {}, {} train weeks): best = {}",
            fold.fold, fold.cutoff, fold.train_len, best
        );
    }

    Ok(())
}
