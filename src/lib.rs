//! # zambia-forecast
//!
//! Trend forecasting for the Zambia data hub.
//!
//! The core is a linear trend extrapolation over monthly observations,
//! adjusted by a naive additive monthly seasonality profile once at least a
//! year of history is available. Around it sit an HTTP service exposing the
//! forecast as JSON and an optional enrichment layer that asks a
//! chat-completions provider to comment on the result.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod insights;
pub mod models;
pub mod seasonality;
pub mod service;
pub mod utils;

pub use config::Config;
pub use error::{ForecastError, InsightError, Result};
pub use models::forecast;

pub mod prelude {
    pub use crate::core::{Forecast, ForecastPoint, TimeSeries, TimeSeriesPoint};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{forecast, Forecaster, LinearTrend};
    pub use crate::seasonality::SeasonalityProfile;
}
