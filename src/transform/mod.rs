//! Series transformations: rolling windows and smoothing overlays.

pub mod window;

pub use window::{moving_average, rolling_mean, MovingAverageOverlay};
