//! Relay Configuration
//!
//! The credential guard and the immutable configuration owned by the relay.

use std::fmt;

use super::errors::RelayError;

/// Environment variable holding the provider credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Read a required, non-empty value from the process environment.
///
/// Absent, empty, or non-unicode values are all reported as missing. No other
/// validation is performed on the value.
pub fn require_env(name: &str) -> Result<String, RelayError> {
    require_value(name, std::env::var(name).ok())
}

fn require_value(name: &str, value: Option<String>) -> Result<String, RelayError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RelayError::missing_env(name)),
    }
}

/// Relay configuration: which model to ask and the credential to ask with.
///
/// Only constructible with a non-empty API key.
#[derive(Clone)]
pub struct RelayConfig {
    model: String,
    api_key: String,
}

impl RelayConfig {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Result<Self, RelayError> {
        let model = model.into();
        let api_key = api_key.into();

        if model.trim().is_empty() {
            return Err(RelayError::Configuration(
                "model identifier must not be empty".to_string(),
            ));
        }
        if api_key.is_empty() {
            return Err(RelayError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }

        Ok(Self { model, api_key })
    }

    /// Build the configuration with the credential taken from `OPENAI_API_KEY`
    pub fn from_env(model: impl Into<String>) -> Result<Self, RelayError> {
        Self::from_lookup(model, |name| std::env::var(name).ok())
    }

    /// Same as [`RelayConfig::from_env`], reading variables through `lookup`
    pub fn from_lookup(
        model: impl Into<String>,
        lookup: impl FnOnce(&str) -> Option<String>,
    ) -> Result<Self, RelayError> {
        let api_key = require_value(API_KEY_ENV, lookup(API_KEY_ENV))?;
        Self::new(model, api_key)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_value_present() {
        let value = require_value("OPENAI_API_KEY", Some("sk-test".to_string())).unwrap();
        assert_eq!(value, "sk-test");
    }

    #[test]
    fn test_require_value_absent() {
        let err = require_value("OPENAI_API_KEY", None).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_require_value_empty_counts_as_missing() {
        let err = require_value("OPENAI_API_KEY", Some(String::new())).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_require_env_unset_variable() {
        let err = require_env("AGENT_RELAY_TEST_DEFINITELY_UNSET").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_config_from_lookup_reads_api_key_var() {
        let config = RelayConfig::from_lookup(DEFAULT_MODEL, |name| {
            assert_eq!(name, "OPENAI_API_KEY");
            Some("sk-live".to_string())
        })
        .unwrap();
        assert_eq!(config.model(), "gpt-3.5-turbo");
        assert_eq!(config.api_key(), "sk-live");
    }

    #[test]
    fn test_config_from_lookup_missing_key_fails() {
        let err = RelayConfig::from_lookup(DEFAULT_MODEL, |_| None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: OPENAI_API_KEY environment variable not set."
        );
    }

    #[test]
    fn test_config_rejects_empty_key() {
        let err = RelayConfig::new(DEFAULT_MODEL, "").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_config_rejects_blank_model() {
        let err = RelayConfig::new("  ", "sk-test").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = RelayConfig::new("gpt-4o-mini", "sk-secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("gpt-4o-mini"));
        assert!(!debug.contains("sk-secret"));
    }
}
