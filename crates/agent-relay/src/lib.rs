//! Agent Relay Domain Library
//!
//! Core types and interfaces for relaying a single text prompt to an LLM
//! completion provider.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): configuration and error types
//!   - `config`: credential guard and relay configuration
//!   - `errors`: relay and provider-boundary error kinds
//!
//! - **Ports** (`ports/`): abstract interfaces (traits)
//!   - `services/`: the completion provider interface and its wire types
//!
//! - **Application** (`application/`): the stateless completion relay
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use agent_relay::{CompletionRelay, RelayConfig, DEFAULT_MODEL};
//!
//! let config = RelayConfig::from_env(DEFAULT_MODEL)?;
//! let relay = CompletionRelay::new(config, Arc::new(my_provider));
//! let text = relay.get_response("hello").await?;
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::CompletionRelay;
pub use domain::{
    require_env, CompletionError, RelayConfig, RelayError, API_KEY_ENV, DEFAULT_MODEL,
};
pub use ports::{
    ChatMessage, Choice, ChoiceMessage, CompletionProvider, CompletionResponse, MessageRole,
    TokenUsage,
};
