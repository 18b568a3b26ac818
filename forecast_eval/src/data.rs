//! CSV ingestion of sales data into per-entity series

use crate::error::{ForecastError, Result};
use crate::series::{Observation, ObservationSeries};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const MISSING_MARKERS: [&str; 4] = ["na", "nan", "null", "none"];

/// Which CSV columns hold the entity key, the date and the value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    /// Columns joined with `-` to form the entity key, e.g. store and department
    pub key_columns: Vec<String>,
    pub date_column: String,
    pub value_column: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            key_columns: vec!["Store".to_string(), "Dept".to_string()],
            date_column: "Date".to_string(),
            value_column: "Weekly_Sales".to_string(),
        }
    }
}

/// Loads a flat sales file into one [`ObservationSeries`] per entity
#[derive(Debug, Clone, Default)]
pub struct SalesLoader {
    columns: ColumnConfig,
}

impl SalesLoader {
    pub fn new(columns: ColumnConfig) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &ColumnConfig {
        &self.columns
    }

    /// Load series from a CSV file
    pub fn load_csv<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ObservationSeries>> {
        let file = File::open(path)?;
        self.load_reader(file)
    }

    /// Load series from any CSV source with a header row
    ///
    /// Series come back ordered by entity key, each sorted by date.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Vec<ObservationSeries>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let key_indices = self
            .columns
            .key_columns
            .iter()
            .map(|name| column_index(&headers, name))
            .collect::<Result<Vec<_>>>()?;
        let date_index = column_index(&headers, &self.columns.date_column)?;
        let value_index = column_index(&headers, &self.columns.value_column)?;

        let mut grouped: BTreeMap<String, BTreeMap<NaiveDate, Option<f64>>> = BTreeMap::new();
        let mut rows = 0usize;

        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            // Header is line 1
            let line = i + 2;

            let key = if key_indices.is_empty() {
                "total".to_string()
            } else {
                key_indices
                    .iter()
                    .map(|&idx| field(&record, idx, line))
                    .collect::<Result<Vec<_>>>()?
                    .join("-")
            };
            let date = parse_date(field(&record, date_index, line)?).map_err(|e| at_line(line, e))?;
            let value =
                parse_value(field(&record, value_index, line)?).map_err(|e| at_line(line, e))?;

            let entity = grouped.entry(key.clone()).or_default();
            if entity.insert(date, value).is_some() {
                return Err(ForecastError::DataError(format!(
                    "line {}: duplicate date {} for entity '{}'",
                    line, date, key
                )));
            }
            rows += 1;
        }

        if grouped.is_empty() {
            return Err(ForecastError::EmptySeries(
                "input contains no data rows".to_string(),
            ));
        }

        let series = grouped
            .into_iter()
            .map(|(key, values)| {
                let observations = values
                    .into_iter()
                    .map(|(date, value)| Observation::new(date, value))
                    .collect();
                ObservationSeries::new(key, observations)
            })
            .collect::<Result<Vec<_>>>()?;

        info!(rows, entities = series.len(), "loaded sales data");
        Ok(series)
    }
}

/// Sum several series by date into one series named `key`
///
/// A date is missing in the total only when it is missing from every input
/// series that has it.
pub fn aggregate_by_date(key: &str, series: &[ObservationSeries]) -> Result<ObservationSeries> {
    let mut totals: BTreeMap<NaiveDate, Option<f64>> = BTreeMap::new();

    for observation in series.iter().flat_map(|s| s.observations()) {
        let slot = totals.entry(observation.timestamp).or_insert(None);
        if let Some(value) = observation.value {
            *slot = Some(slot.unwrap_or(0.0) + value);
        }
    }

    let observations = totals
        .into_iter()
        .map(|(date, value)| Observation::new(date, value))
        .collect();

    ObservationSeries::new(key, observations)
}

/// Parse a date in one of the accepted formats
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| ForecastError::DataError(format!("unrecognised date '{}'", raw)))
}

/// Parse a numeric cell; blanks and NA markers are missing values
pub fn parse_value(raw: &str) -> Result<Option<f64>> {
    if raw.is_empty() || MISSING_MARKERS.contains(&raw.to_ascii_lowercase().as_str()) {
        return Ok(None);
    }

    raw.parse::<f64>()
        .map(|v| Some(v).filter(|v| v.is_finite()))
        .map_err(|_| ForecastError::DataError(format!("invalid numeric value '{}'", raw)))
}

fn at_line(line: usize, error: ForecastError) -> ForecastError {
    match error {
        ForecastError::DataError(msg) => ForecastError::DataError(format!("line {}: {}", line, msg)),
        other => other,
    }
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ForecastError::DataError(format!("missing column '{}'", name)))
}

fn field<'r>(record: &'r csv::StringRecord, index: usize, line: usize) -> Result<&'r str> {
    record
        .get(index)
        .ok_or_else(|| ForecastError::DataError(format!("line {}: missing field {}", line, index + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2012, 2, 24).unwrap();
        assert_eq!(parse_date("2012-02-24").unwrap(), expected);
        assert_eq!(parse_date("24/02/2012").unwrap(), expected);
        assert_eq!(parse_date("02/24/2012").unwrap(), expected);
        assert_eq!(parse_date("2012-02-24 00:00:00").unwrap(), expected);
        assert!(parse_date("not-a-date").is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("24924.5").unwrap(), Some(24924.5));
        assert_eq!(parse_value("-12").unwrap(), Some(-12.0));
        assert_eq!(parse_value("").unwrap(), None);
        assert_eq!(parse_value("NA").unwrap(), None);
        assert_eq!(parse_value("NaN").unwrap(), None);
        assert!(parse_value("abc").is_err());
    }
}
