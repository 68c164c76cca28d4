//! Forecasting models.

mod linear_trend;
mod traits;

pub use linear_trend::{forecast, LinearTrend, MIN_OBSERVATIONS, SEASONAL_MIN_OBSERVATIONS};
pub use traits::{BoxedForecaster, Forecaster};
