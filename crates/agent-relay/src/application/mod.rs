//! Application Layer
//!
//! Use cases built on top of the ports.

mod completion_relay;

pub use completion_relay::CompletionRelay;
