//! Core data structures: time series and forecasts.

pub mod forecast;
pub mod time_series;

pub use forecast::Forecast;
pub use time_series::TimeSeries;
