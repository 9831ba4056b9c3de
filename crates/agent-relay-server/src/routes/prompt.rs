//! Prompt Routes - relay one prompt to the completion provider

use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::models::{ErrorResponse, PromptResponse};
use crate::AppState;

/// Get a completion for the prompt in the path
///
/// GET /prompt/{prompt}
#[utoipa::path(
    get,
    path = "/prompt/{prompt}",
    params(("prompt" = String, Path, description = "Prompt text, URL-encoded as one path segment")),
    responses(
        (status = 200, description = "Generated text (returned in the `prompt` field)", body = PromptResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 500, description = "Completion provider failed", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    prompt: Result<Path<String>, PathRejection>,
) -> Result<Json<PromptResponse>, ApiError> {
    let Path(prompt) = prompt?;

    tracing::info!(
        model = state.relay.model(),
        prompt_chars = prompt.chars().count(),
        "Received prompt"
    );

    let response = state.relay.get_response(&prompt).await?;

    Ok(Json(PromptResponse { prompt: response }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/prompt/:prompt", get(get_prompt))
}
