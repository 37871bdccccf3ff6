//! Signup, login, token resolution and logout.

use crate::auth::{hash_password, verify_password, Identity, TokenError, TokenSigner};
use crate::error::{is_unique_violation, AppError, AuthError};
use crate::model::{User, USER_COLUMNS};
use crate::service::{Credentials, RequestValidator, UserService};
use crate::store::Store;
use chrono::{DateTime, Utc};

/// A freshly issued bearer token for a user.
#[derive(Debug)]
pub struct AuthGrant {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

pub struct AuthService;

impl AuthService {
    /// Create an active account. Email uniqueness is enforced by the store.
    pub async fn register(store: &Store, creds: &Credentials) -> Result<User, AppError> {
        let (email, password) = RequestValidator::credentials(creds)?;
        let hash = run_blocking({
            let password = password.to_string();
            move || hash_password(&password)
        })
        .await??;

        let sql = format!(
            "INSERT INTO {} (email, password, is_active) VALUES ($1, $2, TRUE) RETURNING {}",
            store.table("users"),
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .bind(&hash)
            .fetch_one(store.pool())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Auth(AuthError::DuplicateEmail)
                } else {
                    AppError::Db(e)
                }
            })?;
        tracing::info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// Check credentials and issue a token. Disabled accounts are refused after the password check.
    pub async fn login(store: &Store, tokens: &TokenSigner, creds: &Credentials) -> Result<AuthGrant, AppError> {
        let (email, password) = RequestValidator::credentials(creds)?;
        let user = UserService::find_by_email(store, email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = run_blocking({
            let hash = user.password_hash.clone();
            let password = password.to_string();
            move || verify_password(&hash, &password)
        })
        .await?;
        if !matches {
            tracing::debug!(user_id = user.id, "password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }
        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }
        Self::grant(tokens, user)
    }

    pub fn grant(tokens: &TokenSigner, user: User) -> Result<AuthGrant, AppError> {
        let issued = tokens
            .issue(user.id)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(AuthGrant {
            access_token: issued.token,
            expires_at: issued.claims.expires_at(),
            user,
        })
    }

    /// Resolve a bearer token to the identity it was issued for.
    pub async fn authenticate(store: &Store, tokens: &TokenSigner, token: &str) -> Result<Identity, AppError> {
        let claims = tokens.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "bearer token rejected");
            match e {
                TokenError::Expired => AuthError::Unauthenticated("token expired"),
                _ => AuthError::Unauthenticated("invalid token"),
            }
        })?;

        let sql = format!(
            "SELECT {} FROM {} u WHERE u.id = $1 AND NOT EXISTS (SELECT 1 FROM {} r WHERE r.jti = $2)",
            USER_COLUMNS,
            store.table("users"),
            store.table("revoked_tokens")
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(claims.sub)
            .bind(claims.jti)
            .fetch_optional(store.pool())
            .await?
            .ok_or(AuthError::Unauthenticated("token revoked or account removed"))?;
        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }
        Ok(Identity {
            user,
            token_id: claims.jti,
            expires_at: claims.expires_at(),
        })
    }

    /// Revoke the identity's token until it would have expired anyway.
    pub async fn logout(store: &Store, identity: &Identity) -> Result<(), AppError> {
        let revoked = store.table("revoked_tokens");
        let mut tx = store.pool().begin().await?;
        sqlx::query(&format!("DELETE FROM {} WHERE expires_at < NOW()", revoked))
            .execute(&mut *tx)
            .await?;
        sqlx::query(&format!(
            "INSERT INTO {} (jti, user_id, expires_at) VALUES ($1, $2, $3) ON CONFLICT (jti) DO NOTHING",
            revoked
        ))
        .bind(identity.token_id)
        .bind(identity.user_id())
        .bind(identity.expires_at)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::info!(user_id = identity.user_id(), "token revoked");
        Ok(())
    }
}

/// Argon2 is CPU-bound; keep it off the async workers.
async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("blocking task failed: {}", e)))
}
