//! Request-level forecasting services.

mod forecast_service;

pub use forecast_service::{ForecastOutcome, ForecastService, DEFAULT_METRIC_NAME};
