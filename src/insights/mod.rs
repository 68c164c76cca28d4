//! Natural-language commentary on forecasts.
//!
//! An [`InsightProvider`] turns a metric's history and forecast into a short
//! piece of text. [`ChatCompletionsProvider`] talks to OpenAI-compatible
//! chat endpoints; [`InsightChain`] tries several providers in order and
//! degrades to a fixed message when none of them answers.

mod chain;
mod chat;
mod prompt;

pub use chain::{InsightChain, INSIGHTS_NOT_CONFIGURED, INSIGHTS_UNAVAILABLE};
pub use chat::{ChatCompletionsProvider, EMPTY_COMPLETION};
pub use prompt::{build_prompt, SYSTEM_PROMPT};

use crate::core::{ForecastPoint, TimeSeriesPoint};
use crate::error::InsightError;
use async_trait::async_trait;

/// Everything a provider needs to describe one forecast.
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    pub metric_name: &'a str,
    pub history: &'a [TimeSeriesPoint],
    pub forecast: &'a [ForecastPoint],
}

/// A remote or local source of forecast commentary.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Short provider identifier used in logs.
    fn name(&self) -> &str;

    /// Produce commentary for the given forecast.
    async fn describe(&self, context: &InsightContext<'_>) -> Result<String, InsightError>;
}
