use chrono::{Duration, NaiveDate};
use forecast_eval::split::{train_validation_split, TimeSeriesSplitter, WalkForward};
use forecast_eval::{ForecastError, Observation, ObservationSeries};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn weekly_series(n: usize) -> ObservationSeries {
    let values: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
    ObservationSeries::from_values(
        "1-1",
        NaiveDate::from_ymd_opt(2010, 2, 5).unwrap(),
        Duration::weeks(1),
        &values,
    )
    .unwrap()
}

#[rstest]
#[case(10, 1)]
#[case(10, 3)]
#[case(10, 9)]
#[case(2, 1)]
#[case(143, 12)]
fn test_split_lengths_and_reconstruction(#[case] n: usize, #[case] horizon: usize) {
    let series = weekly_series(n);
    let split = TimeSeriesSplitter::new(horizon).split(&series).unwrap();

    assert_eq!(split.train.len(), n - horizon);
    assert_eq!(split.validation.len(), horizon);

    let rebuilt: Vec<Observation> = split
        .train
        .observations()
        .iter()
        .chain(split.validation.observations())
        .copied()
        .collect();
    assert_eq!(rebuilt, series.observations().to_vec());
}

#[rstest]
#[case(0)]
#[case(10)]
#[case(11)]
fn test_invalid_horizon(#[case] horizon: usize) {
    let series = weekly_series(10);
    let err = TimeSeriesSplitter::new(horizon).split(&series).unwrap_err();

    match err {
        ForecastError::InvalidHorizon { horizon: h, len } => {
            assert_eq!(h, horizon);
            assert_eq!(len, 10);
        }
        other => panic!("Expected InvalidHorizon, got {:?}", other),
    }
}

#[test]
fn test_split_is_deterministic() {
    let series = weekly_series(20);
    let first = train_validation_split(&series, 5).unwrap();
    let second = train_validation_split(&series, 5).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.cutoff(), series.observations()[15].timestamp);
}

#[test]
fn test_split_keeps_missing_values_in_place() {
    let start = NaiveDate::from_ymd_opt(2012, 1, 6).unwrap();
    let observations = vec![
        Observation::observed(start, 1.0),
        Observation::missing(start + Duration::weeks(1)),
        Observation::observed(start + Duration::weeks(2), 3.0),
        Observation::missing(start + Duration::weeks(3)),
    ];
    let series = ObservationSeries::new("2-7", observations).unwrap();

    let split = TimeSeriesSplitter::new(2).split(&series).unwrap();
    assert_eq!(split.train.values(), vec![Some(1.0), None]);
    assert_eq!(split.validation.values(), vec![Some(3.0), None]);
}

#[test]
fn test_walk_forward_folds() {
    let series = weekly_series(12);
    let walk = WalkForward::new(2, 6, 2).unwrap();
    let folds = walk.folds(&series).unwrap();

    // Visible lengths 8, 10, 12
    assert_eq!(folds.len(), 3);
    for (i, fold) in folds.iter().enumerate() {
        assert_eq!(fold.train.len(), 6 + 2 * i);
        assert_eq!(fold.validation.len(), 2);
        assert_eq!(
            fold.validation.first_timestamp(),
            series.observations()[6 + 2 * i].timestamp
        );
    }
    assert_eq!(
        folds[2].validation.observed_values(),
        vec![110.0, 111.0]
    );
}

#[test]
fn test_walk_forward_series_too_short() {
    let series = weekly_series(5);
    let walk = WalkForward::new(2, 4, 1).unwrap();

    assert!(matches!(
        walk.folds(&series),
        Err(ForecastError::InvalidHorizon { .. })
    ));
}
