//! Agent Relay API Routes
//!
//! - /prompt/:prompt - prompt relay (protected when RELAY_API_KEY is set)
//! - /health - liveness and provider info
//! - /swagger-ui, /api-docs/openapi.json - API documentation

pub mod health;
pub mod prompt;
pub mod swagger;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth;
use crate::AppState;

/// Build the router with public and protected route split.
pub fn build_router(state: AppState) -> Router {
    // Protected routes (require authentication when a key is configured)
    let protected_routes = Router::new()
        .merge(prompt::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth_middleware,
        ));

    let openapi = swagger::ApiDoc::openapi();

    // Any origin, method and header, with credentials: the request's own
    // origin/method/headers are echoed back since "*" cannot carry credentials.
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health::health_check))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}
