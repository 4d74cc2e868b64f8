//! Baseline forecasting models.
//!
//! These are the simplest models satisfying the `Forecaster` contract:
//! - `HistoricMean`: predicts the mean of all training observations
//! - `Drift`: extrapolates the first-to-last training slope over time
//!
//! They serve as sanity baselines when scoring a real forecasting engine
//! and as lightweight collaborators in tests.

use crate::core::{Forecast, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use chrono::{DateTime, Utc};

/// Predicts the mean of all historical observations for any time point.
#[derive(Debug, Clone, Default)]
pub struct HistoricMean {
    mean: Option<f64>,
    fitted: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
}

impl HistoricMean {
    /// Create a new HistoricMean forecaster.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Forecaster for HistoricMean {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        let values = series.values();
        if values.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        let mean = values.iter().sum::<f64>() / values.len() as f64;
        self.mean = Some(mean);
        self.fitted = Some(vec![mean; values.len()]);
        self.residuals = Some(values.iter().map(|v| v - mean).collect());
        Ok(())
    }

    fn predict(&self, time_points: &[DateTime<Utc>]) -> Result<Forecast> {
        let mean = self.mean.ok_or(ForecastError::FitRequired)?;
        Forecast::new(time_points.to_vec(), vec![mean; time_points.len()])
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "HistoricMean"
    }
}

/// Extrapolates the line through the first and last training
/// observations.
///
/// The slope is expressed per second of timestamp difference, so
/// predictions genuinely depend on the requested time points rather
/// than on a step count.
#[derive(Debug, Clone, Default)]
pub struct Drift {
    anchor: Option<(DateTime<Utc>, f64)>,
    slope_per_second: Option<f64>,
    fitted: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
}

impl Drift {
    /// Create a new Drift forecaster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the fitted slope per second, if fitted.
    pub fn slope_per_second(&self) -> Option<f64> {
        self.slope_per_second
    }
}

impl Forecaster for Drift {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        if series.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: series.len(),
            });
        }

        let timestamps = series.timestamps();
        let values = series.values();
        let n = series.len();

        let span = (timestamps[n - 1] - timestamps[0]).num_seconds() as f64;
        let slope = (values[n - 1] - values[0]) / span;

        let fitted: Vec<f64> = timestamps
            .iter()
            .map(|&t| values[0] + slope * (t - timestamps[0]).num_seconds() as f64)
            .collect();
        let residuals: Vec<f64> = values.iter().zip(&fitted).map(|(v, f)| v - f).collect();

        self.anchor = Some((timestamps[n - 1], values[n - 1]));
        self.slope_per_second = Some(slope);
        self.fitted = Some(fitted);
        self.residuals = Some(residuals);
        Ok(())
    }

    fn predict(&self, time_points: &[DateTime<Utc>]) -> Result<Forecast> {
        let (anchor_t, anchor_v) = self.anchor.ok_or(ForecastError::FitRequired)?;
        let slope = self.slope_per_second.ok_or(ForecastError::FitRequired)?;

        let values: Vec<f64> = time_points
            .iter()
            .map(|&t| anchor_v + slope * (t - anchor_t).num_seconds() as f64)
            .collect();
        Forecast::new(time_points.to_vec(), values)
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "Drift"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Duration, TimeZone};

    fn make_timestamps(n: usize) -> Vec<DateTime<Utc>> {
        (0..n)
            .map(|i| {
                Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap() + Duration::hours(i as i64)
            })
            .collect()
    }

    #[test]
    fn historic_mean_predicts_training_mean() {
        let ts = TimeSeries::new(make_timestamps(5), vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        let mut model = HistoricMean::new();
        model.fit(&ts).unwrap();

        let future = make_timestamps(8)[5..].to_vec();
        let forecast = model.predict(&future).unwrap();

        for &pred in forecast.values() {
            assert_relative_eq!(pred, 3.0, epsilon = 1e-10);
        }
        assert_eq!(forecast.timestamps(), future.as_slice());
    }

    #[test]
    fn historic_mean_rejects_empty_series() {
        let ts = TimeSeries::new(vec![], vec![]).unwrap();
        let mut model = HistoricMean::new();
        assert!(matches!(model.fit(&ts), Err(ForecastError::EmptyData)));
    }

    #[test]
    fn unfitted_models_require_fit() {
        let future = make_timestamps(3);
        assert!(matches!(
            HistoricMean::new().predict(&future),
            Err(ForecastError::FitRequired)
        ));
        assert!(matches!(
            Drift::new().predict(&future),
            Err(ForecastError::FitRequired)
        ));
    }

    #[test]
    fn drift_extrapolates_linear_trend_exactly() {
        // values = 10 + 2 * hour, so drift recovers the line exactly
        let timestamps = make_timestamps(10);
        let values: Vec<f64> = (0..10).map(|i| 10.0 + 2.0 * i as f64).collect();
        let ts = TimeSeries::new(timestamps.clone(), values).unwrap();

        let mut model = Drift::new();
        model.fit(&ts).unwrap();

        let future: Vec<_> = (10..13)
            .map(|i| timestamps[0] + Duration::hours(i))
            .collect();
        let forecast = model.predict(&future).unwrap();

        assert_relative_eq!(forecast.values()[0], 30.0, epsilon = 1e-8);
        assert_relative_eq!(forecast.values()[1], 32.0, epsilon = 1e-8);
        assert_relative_eq!(forecast.values()[2], 34.0, epsilon = 1e-8);

        // Residuals of an exactly linear series are zero
        for &r in model.residuals().unwrap() {
            assert_relative_eq!(r, 0.0, epsilon = 1e-8);
        }
    }

    #[test]
    fn drift_requires_two_observations() {
        let ts = TimeSeries::new(make_timestamps(1), vec![1.0]).unwrap();
        let mut model = Drift::new();
        assert!(matches!(
            model.fit(&ts),
            Err(ForecastError::InsufficientData { needed: 2, got: 1 })
        ));
    }

    #[test]
    fn drift_predictions_depend_on_requested_spacing() {
        let timestamps = make_timestamps(5);
        let values: Vec<f64> = (0..5).map(|i| i as f64).collect(); // slope 1 per hour
        let ts = TimeSeries::new(timestamps.clone(), values).unwrap();

        let mut model = Drift::new();
        model.fit(&ts).unwrap();

        // A point two hours past the end vs. one hour past the end
        let one = vec![timestamps[4] + Duration::hours(1)];
        let two = vec![timestamps[4] + Duration::hours(2)];
        let f1 = model.predict(&one).unwrap();
        let f2 = model.predict(&two).unwrap();

        assert_relative_eq!(f2.values()[0] - f1.values()[0], 1.0, epsilon = 1e-8);
    }
}
