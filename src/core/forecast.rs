//! Forecast result structure for holding predictions.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Utc};

/// Point predictions aligned 1:1 with the time points they were
/// requested for.
///
/// A forecast carries its own timestamps so the evaluator can verify
/// that a model answered for exactly the requested time points, in
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl Forecast {
    /// Create a forecast from aligned timestamps and predicted values.
    pub fn new(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }
        Ok(Self { timestamps, values })
    }

    /// Create an empty forecast.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the number of predicted points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the time points the predictions belong to.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Get predicted values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
