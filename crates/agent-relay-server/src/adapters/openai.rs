//! OpenAI Chat Completions Provider
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use agent_relay::{ChatMessage, CompletionError, CompletionProvider, CompletionResponse, RelayError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI provider configuration.
pub struct OpenAiConfig {
    pub base_url: Option<String>,
    pub api_key: String,
    /// Total time allowed for one completion call
    pub timeout: Duration,
}

/// HTTP implementation of CompletionProvider
#[derive(Clone)]
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Result<Self, RelayError> {
        if config.timeout.is_zero() {
            return Err(RelayError::Configuration(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30).min(config.timeout))
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelayError::Configuration(format!("failed to build HTTP client: {e}")))?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn map_transport_error(&self, err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout(self.timeout)
        } else {
            CompletionError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<CompletionResponse, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest { model, messages };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: provider_error_message(&body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        serde_json::from_str(&body).map_err(|e| CompletionError::malformed(e.to_string()))
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

/// Pull `error.message` out of an OpenAI-style error body, falling back to the raw body.
fn provider_error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed.to_string()
    }
}
