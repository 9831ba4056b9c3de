//! Agent Relay API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;

/// API Client for the relay server
pub struct RelayClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Response Types
// ============================================

/// `prompt` holds the generated text
#[derive(Debug, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub provider: String,
    pub model: String,
    pub version: String,
}

impl RelayClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(|k| k.to_string()),
        }
    }

    /// URL for a prompt, encoded as a single path segment
    pub fn prompt_url(&self, prompt: &str) -> String {
        format!("{}/prompt/{}", self.base_url, urlencoding::encode(prompt))
    }

    /// Server health
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to relay server")?;

        if !resp.status().is_success() {
            bail!("Health check failed ({})", resp.status());
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Send a prompt and return the generated text
    pub async fn ask(&self, prompt: &str) -> Result<String> {
        if prompt.is_empty() {
            bail!("Prompt must not be empty");
        }

        let mut request = self.client.get(self.prompt_url(prompt));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let resp = request
            .send()
            .await
            .context("Failed to connect to relay server")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);
            bail!("API error ({}): {}", status, detail);
        }

        let prompt_resp: PromptResponse = resp.json().await.context("Failed to parse response")?;

        Ok(prompt_resp.prompt)
    }
}
