//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthCheck, PromptResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::prompt::get_prompt, super::health::health_check),
    components(schemas(PromptResponse, ErrorResponse, HealthCheck)),
    tags(
        (name = "Prompt", description = "Relay a prompt to the completion provider"),
        (name = "Health", description = "Service status")
    ),
    info(
        title = "Agent Relay API",
        description = "Minimal HTTP front-end for an LLM completion provider"
    )
)]
pub struct ApiDoc;
