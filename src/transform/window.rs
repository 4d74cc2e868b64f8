//! Rolling window functions and moving-average overlays.

use crate::core::TimeSeries;
use crate::error::{ForecastError, Result};
use chrono::{DateTime, Utc};

/// Compute rolling mean (moving average).
///
/// Positions without a full window are NaN when `center` is false
/// (trailing window); centered windows shrink at the edges.
pub fn rolling_mean(series: &[f64], window: usize, center: bool) -> Vec<f64> {
    rolling_apply(series, window, center, |s| {
        s.iter().sum::<f64>() / s.len() as f64
    })
}

/// Generic rolling window application.
fn rolling_apply<F>(series: &[f64], window: usize, center: bool, f: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    if series.is_empty() || window == 0 {
        return vec![f64::NAN; series.len()];
    }

    let n = series.len();
    let mut result = vec![f64::NAN; n];

    for i in 0..n {
        let (start, end) = if center {
            let half = window / 2;
            let start = i.saturating_sub(half);
            let end = (i + window - half).min(n);
            (start, end)
        } else {
            if i + 1 < window {
                continue;
            }
            (i + 1 - window, i + 1)
        };

        if end > start {
            result[i] = f(&series[start..end]);
        }
    }

    result
}

/// A series paired with its trailing moving average, for rendering an
/// actual-vs-smoothed chart.
///
/// `smoothed` is NaN for the first `window - 1` positions.
#[derive(Debug, Clone)]
pub struct MovingAverageOverlay {
    /// Window size the average was computed with.
    pub window: usize,
    /// Observation timestamps.
    pub timestamps: Vec<DateTime<Utc>>,
    /// Actual observed values.
    pub actual: Vec<f64>,
    /// Trailing moving average, aligned with `actual`.
    pub smoothed: Vec<f64>,
}

impl MovingAverageOverlay {
    /// Slice the overlay to its last `n` observations, the tail a chart
    /// typically shows.
    pub fn tail(&self, n: usize) -> MovingAverageOverlay {
        let start = self.actual.len().saturating_sub(n);
        MovingAverageOverlay {
            window: self.window,
            timestamps: self.timestamps[start..].to_vec(),
            actual: self.actual[start..].to_vec(),
            smoothed: self.smoothed[start..].to_vec(),
        }
    }
}

/// Compute a trailing moving average over a time series.
///
/// # Errors
/// - `InvalidParameter` for a zero window
/// - `InsufficientData` when the series is shorter than the window
pub fn moving_average(series: &TimeSeries, window: usize) -> Result<MovingAverageOverlay> {
    if window == 0 {
        return Err(ForecastError::InvalidParameter(
            "window must be positive".to_string(),
        ));
    }
    if series.len() < window {
        return Err(ForecastError::InsufficientData {
            needed: window,
            got: series.len(),
        });
    }

    Ok(MovingAverageOverlay {
        window,
        timestamps: series.timestamps().to_vec(),
        actual: series.values().to_vec(),
        smoothed: rolling_mean(series.values(), window, false),
    })
}
