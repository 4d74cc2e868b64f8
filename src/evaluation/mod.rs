//! Forecast evaluation: error metrics and model scoring.

pub mod evaluator;
pub mod metrics;

pub use evaluator::{compare, evaluate, ForecastComparison};
pub use metrics::{accuracy, AccuracyMetrics};
