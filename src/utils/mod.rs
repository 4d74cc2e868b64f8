//! Statistical utility functions.

pub mod stats;

pub use stats::{
    mean, quantile, std_dev, variance, weekday_summaries, FiveNumberSummary, WeekdaySummary,
};
