//! API Data Models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Successful prompt response.
///
/// `prompt` carries the generated text, not the input; existing clients read
/// this field name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromptResponse {
    pub prompt: String,
}

/// Error body returned for every failure
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
    pub provider: String,
    pub model: String,
    pub version: String,
}
