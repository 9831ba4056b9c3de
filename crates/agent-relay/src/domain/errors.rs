//! Domain Errors
//!
//! Error types for relay construction and completion calls.

use std::time::Duration;

use thiserror::Error;

/// Failure reported at the completion provider boundary
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The request never produced a response (DNS, connect, TLS, reset...)
    #[error("request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The provider answered, but not with a usable completion
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Any other failure reported by a provider implementation
    #[error("{0}")]
    Provider(String),
}

impl CompletionError {
    pub fn malformed<T: AsRef<str>>(reason: T) -> Self {
        Self::MalformedResponse(reason.as_ref().to_string())
    }
}

/// Relay errors
#[derive(Debug, Error)]
pub enum RelayError {
    /// Missing or invalid startup configuration; the relay must not serve
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Error calling completion API: {0}")]
    Upstream(#[from] CompletionError),
}

impl RelayError {
    pub fn missing_env<T: AsRef<str>>(name: T) -> Self {
        Self::Configuration(format!("{} environment variable not set.", name.as_ref()))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}
