//! TimeSeries data structure for representing temporal observations.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// A univariate time series: strictly increasing timestamps paired with
/// one observed value each.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
    label: Option<String>,
    frequency: Option<Duration>,
}

impl TimeSeries {
    /// Create a new time series.
    ///
    /// Timestamps must be strictly increasing and match the number of
    /// values.
    pub fn new(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }

        for i in 1..timestamps.len() {
            if timestamps[i] <= timestamps[i - 1] {
                return Err(ForecastError::TimestampError(
                    "timestamps must be strictly increasing".to_string(),
                ));
            }
        }

        Ok(Self {
            timestamps,
            values,
            label: None,
            frequency: None,
        })
    }

    /// Attach a label describing the observed quantity (e.g. "DAYTON_MW").
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Get timestamps.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Get observed values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the observation at an index.
    pub fn get(&self, index: usize) -> Option<(DateTime<Utc>, f64)> {
        self.timestamps
            .get(index)
            .map(|&t| (t, self.values[index]))
    }

    /// Get the series label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the observation frequency, if known.
    pub fn frequency(&self) -> Option<Duration> {
        self.frequency
    }

    /// Set the observation frequency.
    pub fn set_frequency(&mut self, freq: Duration) {
        self.frequency = Some(freq);
    }

    /// Check if the series contains NaN or infinite values.
    pub fn has_missing_values(&self) -> bool {
        self.values.iter().any(|v| v.is_nan() || v.is_infinite())
    }

    /// Extract a half-open slice `[start, end)` of the series.
    pub fn slice(&self, start: usize, end: usize) -> Result<TimeSeries> {
        if start > end {
            return Err(ForecastError::InvalidParameter(
                "start must be <= end".to_string(),
            ));
        }
        if end > self.len() {
            return Err(ForecastError::IndexOutOfBounds {
                index: end,
                size: self.len(),
            });
        }

        Ok(TimeSeries {
            timestamps: self.timestamps[start..end].to_vec(),
            values: self.values[start..end].to_vec(),
            label: self.label.clone(),
            frequency: self.frequency,
        })
    }

    /// Split into a training and test set at an observation index.
    ///
    /// The first `index` observations become the training set; the rest
    /// become the test set.
    pub fn split_at(&self, index: usize) -> Result<(TimeSeries, TimeSeries)> {
        if index > self.len() {
            return Err(ForecastError::IndexOutOfBounds {
                index,
                size: self.len(),
            });
        }
        Ok((self.slice(0, index)?, self.slice(index, self.len())?))
    }

    /// Split into a training and test set by training fraction.
    ///
    /// `fraction` must lie in the open interval (0, 1). The split index
    /// is `floor(len * fraction)`.
    pub fn split_fraction(&self, fraction: f64) -> Result<(TimeSeries, TimeSeries)> {
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "split fraction must be in (0, 1), got {fraction}"
            )));
        }
        let index = (self.len() as f64 * fraction).floor() as usize;
        self.split_at(index)
    }

    /// Split at a timestamp: observations strictly before `at` form the
    /// training set, observations at or after `at` form the test set.
    pub fn split_at_timestamp(&self, at: DateTime<Utc>) -> Result<(TimeSeries, TimeSeries)> {
        let index = self.timestamps.partition_point(|&t| t < at);
        self.split_at(index)
    }

    /// Infer frequency from timestamp spacing.
    ///
    /// Returns the modal spacing if its share of all spacings is at least
    /// `tolerance`.
    pub fn infer_frequency(&self, tolerance: f64) -> Result<Duration> {
        if self.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: self.len(),
            });
        }

        let mut counts: HashMap<i64, usize> = HashMap::new();
        for w in self.timestamps.windows(2) {
            *counts.entry((w[1] - w[0]).num_seconds()).or_insert(0) += 1;
        }

        let (modal_diff, modal_count) = counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(&diff, &count)| (diff, count))
            .ok_or_else(|| ForecastError::FrequencyInference("empty spacing data".to_string()))?;

        let total: usize = counts.values().sum();
        if (modal_count as f64 / total as f64) < tolerance {
            return Err(ForecastError::FrequencyInference(
                "no unique modal spacing found".to_string(),
            ));
        }

        Ok(Duration::seconds(modal_diff))
    }
}
