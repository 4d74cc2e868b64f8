//! Descriptive statistics and per-weekday distribution summaries.

use crate::core::TimeSeries;
use crate::error::{ForecastError, Result};
use chrono::{Datelike, Weekday};

/// Calculate the mean of a slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calculate the sample variance (n-1 denominator).
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

/// Calculate the sample standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Calculate the `p`-quantile (0 <= p <= 1) with linear interpolation
/// between order statistics.
///
/// Returns NaN for an empty slice or `p` outside [0, 1].
pub fn quantile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Five-number summary of a distribution: the numbers a boxplot is
/// drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Compute the summary of a value slice.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        Ok(Self {
            min: quantile(values, 0.0),
            q1: quantile(values, 0.25),
            median: quantile(values, 0.5),
            q3: quantile(values, 0.75),
            max: quantile(values, 1.0),
        })
    }
}

/// Distribution summary of the observations falling on one weekday.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekdaySummary {
    pub weekday: Weekday,
    pub count: usize,
    pub summary: FiveNumberSummary,
}

/// Summarize a series per day of week, Monday through Sunday.
///
/// Weekdays with no observations are omitted. This is the data a grid
/// of per-day consumption boxplots is built from.
pub fn weekday_summaries(series: &TimeSeries) -> Result<Vec<WeekdaySummary>> {
    if series.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    const WEEK: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    let mut buckets: [Vec<f64>; 7] = Default::default();
    for (t, v) in series.timestamps().iter().zip(series.values()) {
        buckets[t.weekday().num_days_from_monday() as usize].push(*v);
    }

    let mut summaries = Vec::new();
    for (weekday, bucket) in WEEK.iter().zip(&buckets) {
        if bucket.is_empty() {
            continue;
        }
        summaries.push(WeekdaySummary {
            weekday: *weekday,
            count: bucket.len(),
            summary: FiveNumberSummary::from_values(bucket)?,
        });
    }

    Ok(summaries)
}
