//! Domain Layer
//!
//! Configuration and error types without infrastructure dependencies.

pub mod config;
pub mod errors;

// Re-exports for convenience
pub use config::*;
pub use errors::*;
