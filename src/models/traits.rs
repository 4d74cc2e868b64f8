//! Forecaster trait defining the common interface for all models.

use crate::core::{Forecast, TimeSeries};
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Common interface for forecasting models.
///
/// A model maps a set of future time points to predicted values. The
/// evaluator only relies on `predict`; how the model was trained (or
/// whether it was trained at all) is opaque to it.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Fit the model to the time series data.
    fn fit(&mut self, series: &TimeSeries) -> Result<()>;

    /// Generate predictions for the given time points.
    ///
    /// The returned forecast must contain one prediction per requested
    /// time point, in the same order.
    fn predict(&self, time_points: &[DateTime<Utc>]) -> Result<Forecast>;

    /// Get the fitted values (in-sample predictions).
    fn fitted_values(&self) -> Option<&[f64]>;

    /// Get the residuals (actual - fitted).
    fn residuals(&self) -> Option<&[f64]>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool {
        self.fitted_values().is_some()
    }
}

/// Type alias for boxed forecaster trait objects.
pub type BoxedForecaster = Box<dyn Forecaster>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::baseline::{Drift, HistoricMean};
    use chrono::{Duration, TimeZone};

    fn make_test_series(n: usize) -> TimeSeries {
        let base = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
        let timestamps: Vec<_> = (0..n).map(|i| base + Duration::days(i as i64)).collect();
        let values: Vec<f64> = (1..=n).map(|i| i as f64).collect();
        TimeSeries::new(timestamps, values).unwrap()
    }

    #[test]
    fn boxed_forecaster_fit_predict() {
        let mut model: BoxedForecaster = Box::new(HistoricMean::new());
        assert_eq!(model.name(), "HistoricMean");
        assert!(!model.is_fitted());

        let ts = make_test_series(20);
        model.fit(&ts).unwrap();
        assert!(model.is_fitted());

        let future: Vec<_> = (20..25)
            .map(|i| ts.timestamps()[0] + Duration::days(i))
            .collect();
        let forecast = model.predict(&future).unwrap();
        assert_eq!(forecast.len(), 5);
        assert_eq!(forecast.timestamps(), future.as_slice());
    }

    #[test]
    fn forecaster_trait_exposes_fit_diagnostics() {
        let mut model = Drift::new();
        let ts = make_test_series(20);

        assert!(model.fitted_values().is_none());
        assert!(model.residuals().is_none());

        model.fit(&ts).unwrap();
        assert_eq!(model.fitted_values().unwrap().len(), 20);
        assert_eq!(model.residuals().unwrap().len(), 20);
    }
}
