//! Route tables and the assembled application router.

mod auth;
mod catalog;
mod common;
mod favorites;

pub use auth::auth_routes;
pub use catalog::catalog_routes;
pub use common::common_routes;
pub use favorites::favorite_routes;

use crate::config::Settings;
use crate::openapi::openapi_routes;
use crate::state::AppState;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Every route plus tracing, CORS and the request body limit.
pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(auth_routes(state.clone()))
        .merge(catalog_routes(state.clone()))
        .merge(favorite_routes(state))
        .merge(openapi_routes())
        .layer(RequestBodyLimitLayer::new(settings.body_limit_bytes))
        .layer(cors_layer(&settings.frontend_url))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);
    if origin == "*" {
        return layer.allow_origin(Any);
    }
    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value).allow_credentials(true),
        Err(_) => {
            tracing::warn!(origin, "FRONTEND_URL is not a valid origin, allowing any");
            layer.allow_origin(Any)
        }
    }
}
