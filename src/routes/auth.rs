//! Auth routes. Signup is reachable as both /signup and /register.

use crate::handlers::auth::{login, logout, me, signup};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn auth_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/register", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me))
        .with_state(state)
}
