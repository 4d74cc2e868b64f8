//! # energycast
//!
//! Evaluation toolkit for time series energy-consumption forecasts.
//!
//! Provides the error metrics used to score a forecasting model on a
//! held-out test set (MAE, RMSE, MAPE), along with the data structures
//! and helpers that surround that workflow: train/test splitting,
//! moving-average smoothing, forecast-vs-actual comparison bundles, and
//! per-weekday distribution summaries.
//!
//! Chart rendering is deliberately out of scope: every helper returns
//! plain numeric series for a presentation layer to consume.

pub mod core;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod transform;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{Forecast, TimeSeries};
    pub use crate::error::{ForecastError, Result};
    pub use crate::evaluation::{accuracy, compare, evaluate, AccuracyMetrics};
    pub use crate::models::Forecaster;
}
