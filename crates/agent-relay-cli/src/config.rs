//! Configuration management for the relay CLI
//!
//! Stores the server URL and API key in ~/.config/agent-relay/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "agent-relay";
const CONFIG_FILE: &str = "config.toml";

/// Overrides the stored base URL
pub const ENDPOINT_ENV: &str = "RELAY_ENDPOINT";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8003".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set API key
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// Set the server base URL
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim_end_matches('/').to_string();
    }

    /// Base URL to use, honoring the RELAY_ENDPOINT override
    pub fn endpoint(&self) -> String {
        Self::resolve_endpoint(&self.base_url, std::env::var(ENDPOINT_ENV).ok())
    }

    fn resolve_endpoint(stored: &str, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| stored.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_base_url_uses_default() {
        let config = Config::parse("api_key = \"secret\"\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:8003");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_set_base_url_trims_slash() {
        let mut config = Config::default();
        config.set_base_url("http://relay.internal:8003/");
        assert_eq!(config.base_url, "http://relay.internal:8003");
    }

    #[test]
    fn test_env_override_wins_unless_blank() {
        assert_eq!(
            Config::resolve_endpoint("http://a", Some("http://b".to_string())),
            "http://b"
        );
        assert_eq!(
            Config::resolve_endpoint("http://a", Some(" ".to_string())),
            "http://a"
        );
        assert_eq!(Config::resolve_endpoint("http://a", None), "http://a");
    }
}
