//! Ordered fallback across insight providers.

use super::{ChatCompletionsProvider, InsightContext, InsightProvider};
use crate::config::InsightsConfig;
use crate::error::InsightError;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Returned when no provider has credentials.
pub const INSIGHTS_NOT_CONFIGURED: &str = "AI insights unavailable - API key not configured";

/// Returned when every configured provider failed.
pub const INSIGHTS_UNAVAILABLE: &str = "AI insights currently unavailable";

/// Tries providers in order and returns the first successful answer.
///
/// Never fails: provider errors are logged and the chain falls back to
/// [`INSIGHTS_UNAVAILABLE`] or [`INSIGHTS_NOT_CONFIGURED`].
#[derive(Clone, Default)]
pub struct InsightChain {
    providers: Vec<Arc<dyn InsightProvider>>,
}

impl InsightChain {
    pub fn new(providers: Vec<Arc<dyn InsightProvider>>) -> Self {
        Self { providers }
    }

    /// Build chat-completions providers for every configured entry.
    pub fn from_config(config: &InsightsConfig) -> Result<Self, InsightError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|source| InsightError::Http {
                provider: "client".to_string(),
                source,
            })?;

        let providers = config
            .providers
            .iter()
            .map(|p| {
                Arc::new(ChatCompletionsProvider::new(client.clone(), p.clone(), config))
                    as Arc<dyn InsightProvider>
            })
            .collect();

        Ok(Self::new(providers))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Commentary from the first provider that answers.
    pub async fn describe(&self, context: &InsightContext<'_>) -> String {
        let mut any_attempted = false;

        for provider in &self.providers {
            match provider.describe(context).await {
                Ok(text) => {
                    info!(provider = provider.name(), "Forecast commentary received");
                    return text;
                }
                Err(InsightError::NotConfigured { provider: name }) => {
                    debug!(provider = %name, "Skipping insight provider without API key");
                }
                Err(err) => {
                    any_attempted = true;
                    warn!(provider = provider.name(), error = %err, "Insight provider failed");
                }
            }
        }

        if any_attempted {
            INSIGHTS_UNAVAILABLE.to_string()
        } else {
            INSIGHTS_NOT_CONFIGURED.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Behaviour {
        Answer(&'static str),
        Fail,
        Unconfigured,
    }

    struct StubProvider {
        name: &'static str,
        behaviour: Behaviour,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(name: &'static str, behaviour: Behaviour) -> Arc<Self> {
            Arc::new(Self {
                name,
                behaviour,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl InsightProvider for StubProvider {
        fn name(&self) -> &str {
            self.name
        }

        async fn describe(&self, _context: &InsightContext<'_>) -> Result<String, InsightError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behaviour {
                Behaviour::Answer(text) => Ok(text.to_string()),
                Behaviour::Fail => Err(InsightError::Status {
                    provider: self.name.to_string(),
                    status: 500,
                }),
                Behaviour::Unconfigured => Err(InsightError::NotConfigured {
                    provider: self.name.to_string(),
                }),
            }
        }
    }

    fn chain_of(providers: &[&Arc<StubProvider>]) -> InsightChain {
        InsightChain::new(
            providers
                .iter()
                .map(|p| Arc::clone(*p) as Arc<dyn InsightProvider>)
                .collect(),
        )
    }

    fn context() -> InsightContext<'static> {
        InsightContext {
            metric_name: "gdp",
            history: &[],
            forecast: &[],
        }
    }

    #[tokio::test]
    async fn first_successful_provider_wins() {
        let first = StubProvider::new("grok", Behaviour::Answer("growth is steady"));
        let second = StubProvider::new("deepseek", Behaviour::Answer("unused"));
        let chain = chain_of(&[&first, &second]);

        assert_eq!(chain.describe(&context()).await, "growth is steady");
        assert_eq!(first.calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failure_falls_through_to_next_provider() {
        let first = StubProvider::new("grok", Behaviour::Fail);
        let second = StubProvider::new("deepseek", Behaviour::Answer("fallback answer"));
        let chain = chain_of(&[&first, &second]);

        assert_eq!(chain.describe(&context()).await, "fallback answer");
        assert_eq!(second.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn all_failures_yield_unavailable() {
        let grok = StubProvider::new("grok", Behaviour::Fail);
        let deepseek = StubProvider::new("deepseek", Behaviour::Unconfigured);
        let chain = chain_of(&[&grok, &deepseek]);
        assert_eq!(chain.describe(&context()).await, INSIGHTS_UNAVAILABLE);
    }

    #[tokio::test]
    async fn no_credentials_yield_not_configured() {
        let deepseek = StubProvider::new("deepseek", Behaviour::Unconfigured);
        let chain = chain_of(&[&deepseek]);
        assert_eq!(chain.describe(&context()).await, INSIGHTS_NOT_CONFIGURED);

        let empty = InsightChain::default();
        assert!(empty.is_empty());
        assert_eq!(empty.describe(&context()).await, INSIGHTS_NOT_CONFIGURED);
    }

    #[tokio::test]
    async fn from_config_without_keys_makes_no_requests() {
        let config = InsightsConfig {
            providers: vec![ProviderConfig::deepseek(None), ProviderConfig::grok(None)],
            ..InsightsConfig::default()
        };
        let chain = InsightChain::from_config(&config).unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.describe(&context()).await, INSIGHTS_NOT_CONFIGURED);
    }
}
