//! Typed errors and HTTP mapping.

use crate::model::CatalogKind;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("User already exists")]
    DuplicateEmail,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account is deactivated")]
    AccountDisabled,
    #[error("authentication required: {0}")]
    Unauthenticated(&'static str),
}

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("{} {} not found", .kind.label(), .id)]
    EntityNotFound { kind: CatalogKind, id: i32 },
    #[error("{} already in favorites", .0.label())]
    AlreadyFavorited(CatalogKind),
    #[error("{} not in favorites", .0.label())]
    NotFavorited(CatalogKind),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Favorite(#[from] FavoriteError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::Auth(e) => match e {
                AuthError::MissingField(_) => (StatusCode::BAD_REQUEST, "validation_error"),
                AuthError::DuplicateEmail => (StatusCode::CONFLICT, "conflict"),
                AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
                AuthError::AccountDisabled => (StatusCode::FORBIDDEN, "account_disabled"),
                AuthError::Unauthenticated(_) => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            },
            AppError::Favorite(e) => match e {
                FavoriteError::EntityNotFound { .. } | FavoriteError::NotFavorited(_) => {
                    (StatusCode::NOT_FOUND, "not_found")
                }
                FavoriteError::AlreadyFavorited(_) => (StatusCode::BAD_REQUEST, "already_favorited"),
            },
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    (StatusCode::NOT_FOUND, "not_found")
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
                }
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// True when the store rejected a write because of a unique constraint or index.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
            match &self {
                AppError::Auth(e) => e.to_string(),
                AppError::Favorite(e) => e.to_string(),
                _ => self.to_string(),
            }
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
