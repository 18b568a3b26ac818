//! Evaluate baseline forecasts on a sales CSV and print the model comparison

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use forecast_eval::cli::Args;
use forecast_eval::{Evaluator, FeatureBuilder, SalesLoader};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args
        .resolve_config()
        .context("failed to resolve configuration")?;
    let input = config
        .input
        .clone()
        .ok_or_else(|| anyhow!("no input file: pass --input or set \"input\" in the config"))?;

    let start_time = Instant::now();
    let series = SalesLoader::new(config.columns.clone())
        .load_csv(&input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    println!("Loaded {} series from {}", series.len(), input.display());

    if args.features {
        let builder = FeatureBuilder::new(config.window)?;
        if let Some(first) = series.first() {
            println!("\nFeatures for {} (window={}):", first.key(), config.window);
            println!("{:<12} {:>14} {:>14} {:>14}", "Date", "Value", "Lag 1", "Rolling");
            for row in builder.build(first)? {
                println!(
                    "{:<12} {:>14} {:>14} {:>14}",
                    row.timestamp,
                    fmt_opt(row.value),
                    fmt_opt(row.lag_1),
                    fmt_opt(row.rolling_mean)
                );
            }
        }
    }

    let evaluator = Evaluator::from_specs(config.horizon, &config.models)
        .context("failed to build models")?;
    let report = evaluator.evaluate(&series);

    println!("\n=== Model Comparison (horizon={}) ===", report.horizon);
    print!("{}", report.comparison);
    if let Some(best) = report.comparison.best() {
        println!("\nBest model: {} (mean RMSE {:.4})", best.model, best.mean_rmse);
    }
    if !report.skipped.is_empty() {
        println!("{} series/model pairs skipped (see log)", report.skipped.len());
    }

    if let Some(output) = &config.output {
        report
            .write_json(output)
            .with_context(|| format!("failed to write report to {}", output.display()))?;
        println!("Report saved to: {}", output.display());
    }

    info!(elapsed_secs = start_time.elapsed().as_secs_f64(), "done");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "forecast_eval=debug"
    } else {
        "forecast_eval=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v))
}
