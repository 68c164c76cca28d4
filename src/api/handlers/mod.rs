mod forecast;
mod health;

pub use forecast::{ai_enhanced_forecast, time_series_forecast};
pub use health::health_check;

use crate::config::Config;
use crate::error::InsightError;
use crate::insights::InsightChain;
use crate::service::ForecastService;

/// State shared by all handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub service: ForecastService,
    pub insights: InsightChain,
}

impl AppState {
    pub fn new(service: ForecastService, insights: InsightChain) -> Self {
        Self { service, insights }
    }

    /// Wire the service and insight providers from configuration.
    pub fn from_config(config: &Config) -> Result<Self, InsightError> {
        Ok(Self::new(
            ForecastService::new(config.default_periods, config.max_periods),
            InsightChain::from_config(&config.insights)?,
        ))
    }
}
