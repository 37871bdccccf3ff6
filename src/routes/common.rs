use crate::handlers::system::{health, ready, version};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /health, /ready, /version and /info (alias of /version).
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/info", get(version))
        .with_state(state)
}
