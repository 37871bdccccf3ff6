//! Public catalog reads.

use crate::error::{AppError, ErrorBody};
use crate::handlers::parse_id;
use crate::model::{CatalogRecord, Character, Planet, Vehicle};
use crate::response::ok;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

async fn list_kind<T: CatalogRecord>(state: &AppState) -> Result<impl IntoResponse, AppError> {
    let rows = CatalogService::list::<T>(&state.store).await?;
    Ok(ok(rows))
}

async fn get_kind<T: CatalogRecord>(state: &AppState, id_str: &str) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id_str)?;
    let row = CatalogService::get::<T>(&state.store, id).await?;
    Ok(ok(row))
}

#[utoipa::path(get, path = "/api/people", tag = "catalog", responses((status = 200, body = [Character])))]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    list_kind::<Character>(&state).await
}

#[utoipa::path(
    get,
    path = "/api/people/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Character id")),
    responses((status = 200, body = Character), (status = 404, body = ErrorBody))
)]
pub async fn get_person(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    get_kind::<Character>(&state, &id).await
}

#[utoipa::path(get, path = "/api/planets", tag = "catalog", responses((status = 200, body = [Planet])))]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    list_kind::<Planet>(&state).await
}

#[utoipa::path(
    get,
    path = "/api/planets/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Planet id")),
    responses((status = 200, body = Planet), (status = 404, body = ErrorBody))
)]
pub async fn get_planet(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    get_kind::<Planet>(&state, &id).await
}

#[utoipa::path(get, path = "/api/vehicles", tag = "catalog", responses((status = 200, body = [Vehicle])))]
pub async fn list_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    list_kind::<Vehicle>(&state).await
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses((status = 200, body = Vehicle), (status = 404, body = ErrorBody))
)]
pub async fn get_vehicle(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    get_kind::<Vehicle>(&state, &id).await
}
