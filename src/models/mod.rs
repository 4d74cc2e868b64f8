//! Forecasting model interface and baseline implementations.

pub mod baseline;
pub mod traits;

pub use baseline::{Drift, HistoricMean};
pub use traits::{BoxedForecaster, Forecaster};
