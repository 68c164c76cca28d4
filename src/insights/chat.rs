//! OpenAI-compatible chat-completions client.

use super::{build_prompt, InsightContext, InsightProvider, SYSTEM_PROMPT};
use crate::config::{InsightsConfig, ProviderConfig};
use crate::error::InsightError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Returned when the provider answers without any message content.
pub const EMPTY_COMPLETION: &str = "AI analysis unavailable";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Insight provider backed by a chat-completions endpoint.
pub struct ChatCompletionsProvider {
    client: Client,
    provider: ProviderConfig,
    temperature: f32,
    max_tokens: u32,
    history_window: usize,
}

impl ChatCompletionsProvider {
    /// Create a provider sharing an existing HTTP client.
    pub fn new(client: Client, provider: ProviderConfig, settings: &InsightsConfig) -> Self {
        Self {
            client,
            provider,
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            history_window: settings.history_window,
        }
    }

    fn http_error(&self, source: reqwest::Error) -> InsightError {
        InsightError::Http {
            provider: self.provider.name.clone(),
            source,
        }
    }
}

#[async_trait]
impl InsightProvider for ChatCompletionsProvider {
    fn name(&self) -> &str {
        &self.provider.name
    }

    async fn describe(&self, context: &InsightContext<'_>) -> Result<String, InsightError> {
        let api_key = match self.provider.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(InsightError::NotConfigured {
                    provider: self.provider.name.clone(),
                })
            }
        };

        let prompt = build_prompt(context, self.history_window);
        let body = ChatRequest {
            model: &self.provider.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(
            provider = %self.provider.name,
            model = %self.provider.model,
            "Requesting forecast commentary"
        );

        let response = self
            .client
            .post(&self.provider.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.http_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::Status {
                provider: self.provider.name.clone(),
                status: status.as_u16(),
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| self.http_error(e))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|text| !text.trim().is_empty());

        Ok(content.unwrap_or_else(|| EMPTY_COMPLETION.to_string()))
    }
}
