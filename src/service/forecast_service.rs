//! Request-level forecasting shared by the plain and enriched endpoints.

use crate::core::{parse_date, Forecast, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::models::{BoxedForecaster, MIN_OBSERVATIONS};
use tracing::info;

/// Name used in messages when a request carries no metric name.
pub const DEFAULT_METRIC_NAME: &str = "unnamed metric";

/// Validated inputs and the resulting forecast for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutcome {
    pub metric_name: String,
    pub periods: usize,
    pub history: TimeSeries,
    pub forecast: Forecast,
}

/// Turns raw request data into forecasts using a configured estimator.
#[derive(Debug, Clone)]
pub struct ForecastService {
    default_periods: usize,
    max_periods: usize,
}

impl ForecastService {
    pub fn new(default_periods: usize, max_periods: usize) -> Self {
        Self {
            default_periods,
            max_periods,
        }
    }

    /// Parse `(date, value)` pairs into a validated series.
    pub fn build_series(&self, data: &[(&str, f64)]) -> Result<TimeSeries> {
        let mut dates = Vec::with_capacity(data.len());
        let mut values = Vec::with_capacity(data.len());
        for &(date, value) in data {
            dates.push(parse_date(date)?);
            values.push(value);
        }
        TimeSeries::new(dates, values)
    }

    /// Resolve the requested horizon against the configured default and limit.
    pub fn resolve_periods(&self, requested: Option<usize>) -> Result<usize> {
        let periods = requested.unwrap_or(self.default_periods);
        if periods > self.max_periods {
            return Err(ForecastError::InvalidParameter(format!(
                "periodsToForecast must not exceed {}, got {}",
                self.max_periods, periods
            )));
        }
        Ok(periods)
    }

    /// Validate the request and run `model` over it.
    ///
    /// A history shorter than [`MIN_OBSERVATIONS`] is rejected before dates
    /// or the horizon are looked at.
    pub fn run(
        &self,
        data: &[(&str, f64)],
        periods: Option<usize>,
        metric_name: Option<&str>,
        mut model: BoxedForecaster,
    ) -> Result<ForecastOutcome> {
        if data.len() < MIN_OBSERVATIONS {
            return Err(ForecastError::InsufficientData {
                needed: MIN_OBSERVATIONS,
                got: data.len(),
            });
        }

        let metric_name = metric_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_METRIC_NAME)
            .to_string();
        let periods = self.resolve_periods(periods)?;

        info!(
            metric = %metric_name,
            model = model.name(),
            periods,
            points = data.len(),
            "Forecasting {} for {} periods ahead",
            metric_name,
            periods
        );

        let history = self.build_series(data)?.with_label(metric_name.clone());
        model.fit(&history)?;
        let forecast = model.predict(periods)?;

        info!(points = forecast.horizon(), "Generated forecast points");

        Ok(ForecastOutcome {
            metric_name,
            periods,
            history,
            forecast,
        })
    }
}

impl Default for ForecastService {
    fn default() -> Self {
        Self::new(6, 120)
    }
}
