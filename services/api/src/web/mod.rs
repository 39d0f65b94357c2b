pub mod embed_gate;
pub mod rest;
pub mod state;

// Re-export the handlers and the gate for direct use alongside the router.
pub use embed_gate::require_embedding;
pub use rest::{generate_handler, index_handler};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Builds the application router. Every application route sits behind the
/// embedding gate; the blocked panel is the only thing a denied visitor ever
/// sees.
pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(index_handler))
        .route("/generate", post(generate_handler))
        .layer(axum_middleware::from_fn(require_embedding))
        .layer(cors)
        .with_state(state)
}
