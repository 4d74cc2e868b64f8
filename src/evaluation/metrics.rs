//! Accuracy metrics for forecast evaluation.

use crate::error::{ForecastError, Result};

/// Accuracy metrics for a forecast scored against ground truth.
///
/// All fields are non-negative; `mape` is expressed as a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error, in percent
    pub mape: f64,
}

/// Calculate accuracy metrics between actual and predicted values.
///
/// # Errors
/// - `EmptyData` if either slice is empty
/// - `DimensionMismatch` if the slices differ in length
/// - `UndefinedMetric` if any actual value is exactly zero, since MAPE
///   divides by the actual value. Callers that want MAPE despite zero
///   observations must filter them out beforehand.
pub fn accuracy(actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }

    if let Some(i) = actual.iter().position(|&a| a == 0.0) {
        return Err(ForecastError::UndefinedMetric(format!(
            "actual value at index {i} is zero, MAPE denominator undefined"
        )));
    }

    let n = actual.len() as f64;

    let mae: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / n;

    let mse: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / n;

    let mape: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| ((a - p) / a).abs())
        .sum::<f64>()
        * 100.0
        / n;

    Ok(AccuracyMetrics {
        mae,
        rmse: mse.sqrt(),
        mape,
    })
}

/// Calculate MAE between two slices.
///
/// Returns NaN on empty or mismatched input.
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Calculate MSE between two slices.
///
/// Returns NaN on empty or mismatched input.
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64
}

/// Calculate RMSE between two slices.
///
/// Returns NaN on empty or mismatched input.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    mse(actual, predicted).sqrt()
}

/// Calculate MAPE (in percent) between two slices.
///
/// Returns NaN on empty or mismatched input. Zero actual values are not
/// guarded here: they propagate as infinite or NaN terms. Use
/// [`accuracy`] for the checked variant.
pub fn mape(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| ((a - p) / a).abs())
        .sum::<f64>()
        * 100.0
        / actual.len() as f64
}
