use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod adapters;
mod auth;
mod config;
mod error;
mod models;
mod routes;

use adapters::{OpenAiConfig, OpenAiProvider};
use agent_relay::{CompletionRelay, RelayConfig, RelayError};
use config::{normalize_addr, LogFormat, ServerConfig};

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<CompletionRelay>,
    /// Bearer key required on protected routes; `None` disables the check
    pub api_key: Option<Arc<str>>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();

    init_tracing(config.log_format);

    tracing::info!("🛰️  Agent relay initializing...");

    // Refuse to start without the provider credential
    let state = match build_state(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "refusing to start");
            std::process::exit(1);
        }
    };

    if state.api_key.is_some() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No RELAY_API_KEY set - authentication disabled");
    }

    let router = routes::build_router(state);

    let addr = normalize_addr(&config.addr);
    let listener = TcpListener::bind(&addr).await.unwrap_or_else(|e| {
        tracing::error!(addr = addr, error = %e, "failed to bind");
        std::process::exit(1);
    });

    tracing::info!(addr = addr, "📚 Swagger UI: /swagger-ui");
    tracing::info!(addr = addr, "✅ Agent relay ready");

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }

    tracing::info!("server stopped");
}

/// Guard, provider and relay, wired from the process environment
fn build_state(config: &ServerConfig) -> Result<AppState, RelayError> {
    build_state_with(config, |name| std::env::var(name).ok())
}

fn build_state_with(
    config: &ServerConfig,
    lookup: impl FnOnce(&str) -> Option<String>,
) -> Result<AppState, RelayError> {
    let relay_config = RelayConfig::from_lookup(&config.model, lookup)?;

    let provider = OpenAiProvider::new(OpenAiConfig {
        base_url: Some(config.base_url.clone()),
        api_key: relay_config.api_key().to_string(),
        timeout: Duration::from_secs(config.request_timeout_secs),
    })?;

    tracing::info!(
        base_url = provider.base_url(),
        model = relay_config.model(),
        timeout_secs = config.request_timeout_secs,
        "🤖 Completion provider ready"
    );

    Ok(AppState {
        relay: Arc::new(CompletionRelay::new(relay_config, Arc::new(provider))),
        api_key: config.relay_api_key(),
    })
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received SIGINT, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_config(args: &[&str]) -> ServerConfig {
        let mut argv = vec!["agent-relay-server", "--model", "gpt-4o-mini"];
        argv.extend_from_slice(args);
        ServerConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_build_state_without_credential_fails() {
        let config = server_config(&[]);
        let err = match build_state_with(&config, |_| None) {
            Err(e) => e,
            Ok(_) => panic!("state built without OPENAI_API_KEY"),
        };

        assert!(err.is_configuration());
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_build_state_with_empty_credential_fails() {
        let config = server_config(&[]);
        let result = build_state_with(&config, |_| Some(String::new()));
        assert!(matches!(result, Err(RelayError::Configuration(_))));
    }

    #[test]
    fn test_build_state_wires_relay() {
        let config = server_config(&["--relay-api-key", "secret"]);
        let state = match build_state_with(&config, |_| Some("sk-test".to_string())) {
            Ok(s) => s,
            Err(e) => panic!("unexpected error: {e}"),
        };

        assert_eq!(state.relay.model(), "gpt-4o-mini");
        assert_eq!(state.relay.provider_name(), "openai");
        assert_eq!(state.api_key.as_deref(), Some("secret"));
    }
}
