//! OpenAPI document served at /api/openapi.json.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::auth::{AuthBody, UserBody};
use crate::handlers::system::{HealthBody, ReadyBody, VersionBody};
use crate::handlers::{auth, catalog, favorites, system};
use crate::model::{CatalogKind, Character, Favorite, Planet, User, Vehicle};
use crate::response::MessageBody;
use crate::service::Credentials;
use axum::{routing::get, Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(title = "holocron", description = "Star Wars catalog with per-user favorites"),
    paths(
        auth::signup,
        auth::login,
        auth::logout,
        auth::me,
        catalog::list_people,
        catalog::get_person,
        catalog::list_planets,
        catalog::get_planet,
        catalog::list_vehicles,
        catalog::get_vehicle,
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::remove_favorite,
        system::health,
        system::ready,
        system::version
    ),
    components(schemas(
        Credentials,
        AuthBody,
        UserBody,
        MessageBody,
        ErrorBody,
        ErrorDetail,
        User,
        Character,
        Planet,
        Vehicle,
        Favorite,
        CatalogKind,
        HealthBody,
        ReadyBody,
        VersionBody
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Signup, login and token lifecycle"),
        (name = "catalog", description = "Read-only characters, planets and vehicles"),
        (name = "favorites", description = "Per-user favorites"),
        (name = "system", description = "Liveness, readiness and version")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).bearer_format("JWT").build()),
            );
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router {
    Router::new().route("/api/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_api_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/signup",
            "/api/auth/login",
            "/api/auth/logout",
            "/api/auth/me",
            "/api/people",
            "/api/planets/{id}",
            "/api/users/favorites",
            "/api/favorite/{kind}/{id}",
            "/health",
            "/ready",
            "/version",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let schemes = doc.components.as_ref().map(|c| c.security_schemes.contains_key("bearer"));
        assert_eq!(schemes, Some(true));
    }
}
