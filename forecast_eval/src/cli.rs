//! Command-line interface definitions and argument parsing

use crate::config::EvalConfig;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Evaluate baseline sales forecasts on a held-out window per store and department
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the input sales CSV
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of trailing observations held out per series
    #[arg(short = 'H', long)]
    pub horizon: Option<usize>,

    /// Rolling-mean window for --features
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Write the full report as JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print lag/rolling features of the first series
    #[arg(long)]
    pub features: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Load the config file (or defaults) and apply flag overrides
    pub fn resolve_config(&self) -> Result<EvalConfig> {
        let mut config = match &self.config {
            Some(path) => EvalConfig::from_json_file(path)?,
            None => EvalConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(horizon) = self.horizon {
            config.horizon = horizon;
        }
        if let Some(window) = self.window {
            config.window = window;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"input": "from_config.csv", "horizon": 6}}"#).unwrap();

        let args = Args::parse_from([
            "forecast-eval",
            "--config",
            file.path().to_str().unwrap(),
            "--horizon",
            "10",
        ]);
        let config = args.resolve_config().unwrap();

        assert_eq!(config.input, Some(PathBuf::from("from_config.csv")));
        assert_eq!(config.horizon, 10);
    }

    #[test]
    fn test_defaults_without_config() {
        let args = Args::parse_from(["forecast-eval", "-i", "sales.csv", "--features"]);
        let config = args.resolve_config().unwrap();

        assert!(args.features);
        assert_eq!(config.input, Some(PathBuf::from("sales.csv")));
        assert_eq!(config.horizon, EvalConfig::default().horizon);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = Args::parse_from(["forecast-eval", "--window", "1"]);
        assert!(args.resolve_config().is_err());
    }
}
