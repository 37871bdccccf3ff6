//! Account lookups and admin operations.

use crate::error::AppError;
use crate::model::{User, USER_COLUMNS};
use crate::store::Store;

pub struct UserService;

impl UserService {
    pub async fn find_by_id(store: &Store, id: i32) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", USER_COLUMNS, store.table("users"));
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, User>(&sql).bind(id).fetch_optional(store.pool()).await?)
    }

    pub async fn find_by_email(store: &Store, email: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE email = $1", USER_COLUMNS, store.table("users"));
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, User>(&sql).bind(email).fetch_optional(store.pool()).await?)
    }

    /// Activate or deactivate an account. Deactivated accounts cannot log in or use existing tokens.
    pub async fn set_active(store: &Store, id: i32, active: bool) -> Result<User, AppError> {
        let sql = format!(
            "UPDATE {} SET is_active = $2 WHERE id = $1 RETURNING {}",
            store.table("users"),
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(active)
            .fetch_optional(store.pool())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
    }

    /// Delete an account. Its favorites and revoked tokens go with it (ON DELETE CASCADE).
    pub async fn delete(store: &Store, id: i32) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING id", store.table("users"));
        let deleted: Option<(i32,)> = sqlx::query_as(&sql).bind(id).fetch_optional(store.pool()).await?;
        match deleted {
            Some(_) => {
                tracing::info!(user_id = id, "user deleted");
                Ok(())
            }
            None => Err(AppError::NotFound(format!("user {}", id))),
        }
    }
}
