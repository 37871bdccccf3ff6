//! Favorite routes. Every route requires a bearer token.

use crate::handlers::favorites::{add_favorite, list_favorites, remove_favorite};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn favorite_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/users/favorites", get(list_favorites))
        .route("/api/favorite/:kind/:id", post(add_favorite).delete(remove_favorite))
        .with_state(state)
}
