//! Scoring a forecasting model against a held-out test set.

use crate::core::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::evaluation::metrics::{self, AccuracyMetrics};
use crate::models::Forecaster;
use chrono::{DateTime, Utc};

/// Evaluate a fitted model on a test set.
///
/// Asks the model for predictions at exactly the test set's timestamps
/// and scores them with MAE, RMSE and MAPE. The evaluator performs no
/// alignment of its own: the model must answer for the requested time
/// points in order, and a forecast of the wrong length or with
/// reordered timestamps is an error.
///
/// # Errors
/// - `EmptyData` if the test set is empty
/// - `DimensionMismatch` if the forecast length differs from the test
///   set length
/// - `TimestampError` if the forecast timestamps differ from the
///   requested ones
/// - `UndefinedMetric` if any true value is zero (MAPE denominator)
pub fn evaluate(model: &dyn Forecaster, test_set: &TimeSeries) -> Result<AccuracyMetrics> {
    let forecast = predict_aligned(model, test_set)?;
    metrics::accuracy(test_set.values(), &forecast)
}

/// Forecast-vs-actual bundle for a test set, ready for a presentation
/// layer to render.
#[derive(Debug, Clone)]
pub struct ForecastComparison {
    /// Test set timestamps.
    pub timestamps: Vec<DateTime<Utc>>,
    /// True observed values.
    pub actual: Vec<f64>,
    /// Model predictions, aligned with `actual`.
    pub predicted: Vec<f64>,
    /// Mean absolute error of the pair.
    pub mae: f64,
}

/// Build a [`ForecastComparison`] for a model on a test set.
///
/// Unlike [`evaluate`] this never fails on zero true values, since it
/// only carries MAE; the alignment and emptiness checks are the same.
pub fn compare(model: &dyn Forecaster, test_set: &TimeSeries) -> Result<ForecastComparison> {
    let predicted = predict_aligned(model, test_set)?;
    let mae = metrics::mae(test_set.values(), &predicted);

    Ok(ForecastComparison {
        timestamps: test_set.timestamps().to_vec(),
        actual: test_set.values().to_vec(),
        predicted,
        mae,
    })
}

/// Request predictions for the test set's timestamps and validate
/// alignment, returning the predicted values.
fn predict_aligned(model: &dyn Forecaster, test_set: &TimeSeries) -> Result<Vec<f64>> {
    if test_set.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    let forecast = model.predict(test_set.timestamps())?;

    if forecast.len() != test_set.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: test_set.len(),
            got: forecast.len(),
        });
    }
    if forecast.timestamps() != test_set.timestamps() {
        return Err(ForecastError::TimestampError(
            "forecast timestamps do not match the requested time points".to_string(),
        ));
    }

    Ok(forecast.values().to_vec())
}
