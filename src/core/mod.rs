//! Core data structures for time series forecasting.

mod forecast;
mod time_series;

pub use forecast::{Forecast, ForecastPoint};
pub use time_series::{format_date, parse_date, TimeSeries, TimeSeriesPoint};
