//! Favorite handlers. All require a bearer token.

use crate::auth::Identity;
use crate::error::{AppError, ErrorBody};
use crate::handlers::parse_id;
use crate::model::{CatalogKind, Favorite};
use crate::response::{created, message, ok, MessageBody};
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

fn parse_kind(segment: &str) -> Result<CatalogKind, AppError> {
    CatalogKind::from_favorite_segment(segment)
        .ok_or_else(|| AppError::NotFound(format!("unknown favorite kind '{}'", segment)))
}

#[utoipa::path(
    get,
    path = "/api/users/favorites",
    tag = "favorites",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's favorites in insertion order", body = [Favorite]),
        (status = 401, body = ErrorBody)
    )
)]
pub async fn list_favorites(identity: Identity, State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::list(&state.store, &identity).await?;
    Ok(ok(favorites))
}

#[utoipa::path(
    post,
    path = "/api/favorite/{kind}/{id}",
    tag = "favorites",
    security(("bearer" = [])),
    params(
        ("kind" = String, Path, description = "people, planet or vehicle"),
        ("id" = i32, Path, description = "Catalog entity id")
    ),
    responses(
        (status = 201, description = "Favorite created", body = Favorite),
        (status = 400, description = "Already in favorites", body = ErrorBody),
        (status = 401, body = ErrorBody),
        (status = 404, description = "Entity does not exist", body = ErrorBody)
    )
)]
pub async fn add_favorite(
    identity: Identity,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&kind)?;
    let id = parse_id(&id)?;
    let favorite = FavoriteService::add(&state.store, &identity, kind, id).await?;
    Ok(created(favorite))
}

#[utoipa::path(
    delete,
    path = "/api/favorite/{kind}/{id}",
    tag = "favorites",
    security(("bearer" = [])),
    params(
        ("kind" = String, Path, description = "people, planet or vehicle"),
        ("id" = i32, Path, description = "Catalog entity id")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageBody),
        (status = 401, body = ErrorBody),
        (status = 404, description = "Not in favorites", body = ErrorBody)
    )
)]
pub async fn remove_favorite(
    identity: Identity,
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = parse_kind(&kind)?;
    let id = parse_id(&id)?;
    FavoriteService::remove(&state.store, &identity, kind, id).await?;
    Ok(message(format!("{} removed from favorites", kind.label())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_is_not_found() {
        assert_eq!(parse_kind("vehicle").unwrap(), CatalogKind::Vehicle);
        let err = parse_kind("starship").unwrap_err();
        assert_eq!(err.status_and_code().0, axum::http::StatusCode::NOT_FOUND);
    }
}
