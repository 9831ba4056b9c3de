//! Health Route

use axum::{extract::State, Json};

use crate::models::HealthCheck;
use crate::AppState;

/// Liveness check with the configured provider and model
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Server is running", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        provider: state.relay.provider_name().to_string(),
        model: state.relay.model().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
