//! Simple API Key Authentication (Bearer Token)

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::AppState;

/// Authentication middleware
/// Validates Bearer token against the configured relay key
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // No key configured = auth disabled
    let Some(api_key) = state.api_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if token == api_key => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid API key attempted");
            Err(ApiError::unauthorized("invalid API key"))
        }
        None if auth_header.is_some() => {
            tracing::warn!("Invalid Authorization header format");
            Err(ApiError::unauthorized("invalid authorization header format"))
        }
        None => {
            tracing::warn!("Missing Authorization header");
            Err(ApiError::unauthorized("missing authorization"))
        }
    }
}
