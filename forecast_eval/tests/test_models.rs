use assert_approx_eq::assert_approx_eq;
use chrono::{Duration, NaiveDate};
use forecast_eval::models::{
    DynForecaster, ExponentialSmoothing, MovingAverage, Naive, SeasonalNaive,
};
use forecast_eval::{ForecastError, ForecastModel, ForecastResult, Observation, ObservationSeries, TrainedForecastModel};

fn create_test_series() -> ObservationSeries {
    ObservationSeries::from_values(
        "1-1",
        NaiveDate::from_ymd_opt(2023, 1, 6).unwrap(),
        Duration::weeks(1),
        &[100.0, 102.0, 104.0, 103.0, 105.0, 110.0],
    )
    .unwrap()
}

#[test]
fn test_naive() {
    let trained = Naive::new().train(&create_test_series()).unwrap();
    let forecast = trained.forecast(3).unwrap();

    assert_eq!(forecast.horizon(), 3);
    assert_eq!(forecast.values(), &[110.0, 110.0, 110.0]);
    assert_eq!(trained.name(), "Naive");
}

#[test]
fn test_seasonal_naive_repeats_last_season() {
    let model = SeasonalNaive::new(3).unwrap();
    let forecast = model.train(&create_test_series()).unwrap().forecast(5).unwrap();

    assert_eq!(forecast.values(), &[103.0, 105.0, 110.0, 103.0, 105.0]);
}

#[test]
fn test_seasonal_naive_needs_full_season() {
    let model = SeasonalNaive::new(52).unwrap();
    let err = model.train(&create_test_series()).unwrap_err();
    assert!(matches!(err, ForecastError::ModelError(_)));
}

#[test]
fn test_moving_average() {
    let model = MovingAverage::new(3).unwrap();
    let forecast = model.train(&create_test_series()).unwrap().forecast(2).unwrap();

    for value in forecast.values() {
        assert_approx_eq!(*value, (103.0 + 105.0 + 110.0) / 3.0);
    }
}

#[test]
fn test_moving_average_insufficient_data() {
    let model = MovingAverage::new(10).unwrap();
    assert!(matches!(
        model.train(&create_test_series()),
        Err(ForecastError::MathError(_))
    ));
}

#[test]
fn test_exponential_smoothing() {
    let series = ObservationSeries::from_values(
        "k",
        NaiveDate::from_ymd_opt(2023, 1, 6).unwrap(),
        Duration::weeks(1),
        &[10.0, 20.0, 30.0],
    )
    .unwrap();
    let model = ExponentialSmoothing::new(0.5).unwrap();
    let forecast = model.train(&series).unwrap().forecast(1).unwrap();

    // 10 -> 15 -> 22.5
    assert_approx_eq!(forecast.values()[0], 22.5);
}

#[test]
fn test_models_skip_missing_training_values() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 6).unwrap();
    let series = ObservationSeries::new(
        "k",
        vec![
            Observation::observed(start, 50.0),
            Observation::observed(start + Duration::weeks(1), 70.0),
            Observation::missing(start + Duration::weeks(2)),
        ],
    )
    .unwrap();

    let forecast = Naive::new().train(&series).unwrap().forecast(1).unwrap();
    assert_eq!(forecast.values(), &[70.0]);

    let all_missing = ObservationSeries::new("k", vec![Observation::missing(start)]).unwrap();
    assert!(matches!(
        Naive::new().train(&all_missing),
        Err(ForecastError::EmptySeries(_))
    ));
}

#[test]
fn test_zero_horizon_rejected() {
    let trained = Naive::new().train(&create_test_series()).unwrap();
    assert!(trained.forecast(0).is_err());
}

#[test]
fn test_dyn_forecaster() {
    let models: Vec<Box<dyn DynForecaster>> = vec![
        Box::new(Naive::new()),
        Box::new(MovingAverage::new(2).unwrap()),
    ];

    let labels: Vec<&str> = models.iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["Naive", "Moving Average (window=2)"]);

    let forecast: ForecastResult = models[1].fit_forecast(&create_test_series(), 2).unwrap();
    assert_approx_eq!(forecast.values()[0], 107.5);
}

#[test]
fn test_model_parameter_validation() {
    assert!(ExponentialSmoothing::new(1.5).is_err());
    assert!(ExponentialSmoothing::new(0.0).is_err());
    assert!(ExponentialSmoothing::new(f64::NAN).is_err());
    assert!(MovingAverage::new(0).is_err());
    assert!(SeasonalNaive::new(0).is_err());
}
