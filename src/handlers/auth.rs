//! Signup, login, logout and current-user handlers.

use crate::auth::Identity;
use crate::error::{AppError, ErrorBody};
use crate::model::User;
use crate::response::{created, message, ok, MessageBody};
use crate::service::{AuthGrant, AuthService, Credentials};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

impl AuthBody {
    fn from_grant(grant: AuthGrant, message: Option<&str>) -> Self {
        AuthBody {
            message: message.map(String::from),
            access_token: grant.access_token,
            token_type: "Bearer".into(),
            expires_at: grant.expires_at,
            user: grant.user,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserBody {
    pub user: User,
}

/// POST /api/auth/signup (also /api/auth/register)
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = Credentials,
    responses(
        (status = 201, description = "Account created", body = AuthBody),
        (status = 400, description = "Missing email or password", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(creds) = payload?;
    let user = AuthService::register(&state.store, &creds).await?;
    let grant = AuthService::grant(&state.tokens, user)?;
    Ok(created(AuthBody::from_grant(grant, Some("User created successfully"))))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "Token issued", body = AuthBody),
        (status = 400, description = "Missing email or password", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 403, description = "Account is deactivated", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(creds) = payload?;
    let grant = AuthService::login(&state.store, &state.tokens, &creds).await?;
    Ok(ok(AuthBody::from_grant(grant, None)))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Token revoked", body = MessageBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    )
)]
pub async fn logout(identity: Identity, State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    AuthService::logout(&state.store, &identity).await?;
    Ok(message("Logged out"))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    )
)]
pub async fn me(identity: Identity) -> impl IntoResponse {
    ok(UserBody { user: identity.user })
}
