//! Seasonality estimation.
//!
//! Provides a naive additive monthly profile used to adjust trend forecasts.

mod monthly;

pub use monthly::{SeasonalityProfile, MONTHS_PER_YEAR};
