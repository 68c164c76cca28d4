//! Service configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for one chat-completions insight provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub name: String,
    pub endpoint: String,
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl ProviderConfig {
    /// DeepSeek chat endpoint.
    pub fn deepseek(api_key: Option<String>) -> Self {
        Self {
            name: "deepseek".to_string(),
            endpoint: "https://api.deepseek.com/v1/chat/completions".to_string(),
            model: "deepseek-chat".to_string(),
            api_key,
        }
    }

    /// xAI Grok chat endpoint.
    pub fn grok(api_key: Option<String>) -> Self {
        Self {
            name: "grok".to_string(),
            endpoint: "https://api.x.ai/v1/chat/completions".to_string(),
            model: "grok-beta".to_string(),
            api_key,
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str, api_key: Option<String>) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "deepseek" => Some(Self::deepseek(api_key)),
            "grok" | "xai" => Some(Self::grok(api_key)),
            _ => None,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// Settings for the insight enrichment layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsConfig {
    /// Providers in the order they are tried.
    pub providers: Vec<ProviderConfig>,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Number of trailing historical points included in the prompt.
    pub history_window: usize,
}

impl InsightsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            providers: vec![ProviderConfig::deepseek(None)],
            timeout_secs: 30,
            temperature: 0.4,
            max_tokens: 200,
            history_window: 6,
        }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    /// Horizon used when a request omits `periodsToForecast`.
    pub default_periods: usize,
    /// Largest horizon a request may ask for.
    pub max_periods: usize,
    pub insights: InsightsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            default_periods: 6,
            max_periods: 120,
            insights: InsightsConfig::default(),
        }
    }
}

impl Config {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset or unparseable variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let order = lookup("INSIGHT_PROVIDERS").unwrap_or_else(|| "deepseek".to_string());
        let providers = order
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .filter_map(|name| {
                let key = match name.trim().to_ascii_lowercase().as_str() {
                    "deepseek" => lookup("DEEPSEEK_API_KEY"),
                    "grok" | "xai" => lookup("XAI_API_KEY"),
                    _ => None,
                };
                ProviderConfig::preset(name, key)
            })
            .collect();

        Self {
            listen_addr: lookup("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            default_periods: parse_var(&lookup, "DEFAULT_FORECAST_PERIODS")
                .unwrap_or(defaults.default_periods),
            max_periods: parse_var(&lookup, "MAX_FORECAST_PERIODS")
                .unwrap_or(defaults.max_periods),
            insights: InsightsConfig {
                providers,
                timeout_secs: parse_var(&lookup, "INSIGHT_TIMEOUT_SECS")
                    .unwrap_or(defaults.insights.timeout_secs),
                ..defaults.insights
            },
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.default_periods, 6);
        assert_eq!(config.max_periods, 120);
        assert_eq!(config.insights.providers.len(), 1);
        assert_eq!(config.insights.providers[0].name, "deepseek");
        assert!(!config.insights.providers[0].has_api_key());
        assert_eq!(config.insights.max_tokens, 200);
    }

    #[test]
    fn test_empty_environment_matches_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("LISTEN_ADDR", "127.0.0.1:9000"),
            ("DEFAULT_FORECAST_PERIODS", "12"),
            ("MAX_FORECAST_PERIODS", "not-a-number"),
            ("INSIGHT_PROVIDERS", "grok, deepseek, unknown"),
            ("XAI_API_KEY", "xai-key"),
            ("INSIGHT_TIMEOUT_SECS", "5"),
        ]));

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.default_periods, 12);
        assert_eq!(config.max_periods, 120);
        assert_eq!(config.insights.timeout(), Duration::from_secs(5));

        let names: Vec<_> = config.insights.providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["grok", "deepseek"]);
        assert_eq!(config.insights.providers[0].api_key.as_deref(), Some("xai-key"));
        assert!(!config.insights.providers[1].has_api_key());
    }

    #[test]
    fn test_api_keys_are_not_serialized() {
        let config = Config::from_lookup(lookup_from(&[("DEEPSEEK_API_KEY", "secret")]));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
