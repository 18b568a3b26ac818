use forecast_eval::ForecastError;
use series_math::MathError;
use std::io;

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    assert!(matches!(ForecastError::from(io_error), ForecastError::IoError(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(
        ForecastError::from(json_error),
        ForecastError::JsonError(_)
    ));

    let math_error = MathError::InsufficientData("need 4 values".to_string());
    assert!(matches!(
        ForecastError::from(math_error),
        ForecastError::MathError(_)
    ));
}

#[test]
fn test_error_display() {
    let error = ForecastError::InvalidHorizon { horizon: 12, len: 10 };
    let message = error.to_string();
    assert!(message.contains("12"));
    assert!(message.contains("10 observations"));

    let error = ForecastError::Alignment {
        actual: 3,
        predicted: 2,
    };
    assert_eq!(
        error.to_string(),
        "Alignment error: 3 actual values vs 2 predicted values"
    );

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let message = ForecastError::from(io_error).to_string();
    assert!(message.contains("IO error"));
    assert!(message.contains("permission denied"));
}
