//! Public catalog routes.

use crate::handlers::catalog::{get_person, get_planet, get_vehicle, list_people, list_planets, list_vehicles};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/people", get(list_people))
        .route("/api/people/:id", get(get_person))
        .route("/api/planets", get(list_planets))
        .route("/api/planets/:id", get(get_planet))
        .route("/api/vehicles", get(list_vehicles))
        .route("/api/vehicles/:id", get(get_vehicle))
        .with_state(state)
}
