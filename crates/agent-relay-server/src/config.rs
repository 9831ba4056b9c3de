use std::sync::Arc;

use clap::{Parser, ValueEnum};

use agent_relay::DEFAULT_MODEL;

use crate::adapters::openai::DEFAULT_BASE_URL;

/// Agent Relay - forwards a prompt to an LLM completion provider.
///
/// The provider credential is read from OPENAI_API_KEY only.
#[derive(Parser, Debug)]
#[command(name = "agent-relay-server", version, about)]
pub struct ServerConfig {
    /// Listen address (e.g. ":8003" or "127.0.0.1:8003")
    #[arg(long, default_value = "127.0.0.1:8003", env = "ADDR")]
    pub addr: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Model identifier passed to the provider
    #[arg(long, default_value = DEFAULT_MODEL, env = "RELAY_MODEL")]
    pub model: String,

    /// OpenAI-compatible API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "OPENAI_BASE_URL")]
    pub base_url: String,

    /// Outbound request timeout in seconds
    #[arg(
        long,
        default_value_t = 60,
        env = "REQUEST_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout_secs: u64,

    /// Bearer key required by /prompt (unset disables the check)
    #[arg(long, env = "RELAY_API_KEY", hide_env_values = true)]
    pub relay_api_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl ServerConfig {
    /// The inbound bearer key, with an empty value treated as unset
    pub fn relay_api_key(&self) -> Option<Arc<str>> {
        self.relay_api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .map(Arc::from)
    }
}

/// Convert ":8003" to "0.0.0.0:8003".
pub fn normalize_addr(addr: &str) -> String {
    if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    }
}
