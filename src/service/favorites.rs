//! Per-user favorites over the catalog.
//!
//! Duplicate prevention is the partial unique index on `(user_id, <kind>_id)`; the
//! insert either succeeds or fails with a unique violation, so concurrent adds of
//! the same pair leave exactly one row.

use crate::auth::Identity;
use crate::error::{is_unique_violation, AppError, FavoriteError};
use crate::model::{CatalogKind, Favorite, FavoriteRow};
use crate::store::Store;

pub struct FavoriteService;

impl FavoriteService {
    /// Favorite one catalog entity. Entity existence is checked before the duplicate state.
    pub async fn add(
        store: &Store,
        identity: &Identity,
        kind: CatalogKind,
        entity_id: i32,
    ) -> Result<Favorite, AppError> {
        let mut tx = store.pool().begin().await?;

        let exists: (bool,) = sqlx::query_as(&format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
            store.table(kind.table())
        ))
        .bind(entity_id)
        .fetch_one(&mut *tx)
        .await?;
        if !exists.0 {
            return Err(FavoriteError::EntityNotFound { kind, id: entity_id }.into());
        }

        let insert = format!(
            "INSERT INTO {} (user_id, {}) VALUES ($1, $2) RETURNING id",
            store.table("favorites"),
            kind.fk_column()
        );
        tracing::debug!(sql = %insert, user_id = identity.user_id(), entity_id, "query (tx)");
        let (favorite_id,): (i32,) = sqlx::query_as(&insert)
            .bind(identity.user_id())
            .bind(entity_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Favorite(FavoriteError::AlreadyFavorited(kind))
                } else {
                    AppError::Db(e)
                }
            })?;

        let sql = format!("{} WHERE f.id = $1", expanded_select(store));
        let row = sqlx::query_as::<_, FavoriteRow>(&sql)
            .bind(favorite_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(user_id = identity.user_id(), kind = ?kind, entity_id, "favorite added");
        Ok(row.into())
    }

    /// Remove the identity's favorite of one entity. Other rows are untouched.
    pub async fn remove(
        store: &Store,
        identity: &Identity,
        kind: CatalogKind,
        entity_id: i32,
    ) -> Result<(), AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE user_id = $1 AND {} = $2 RETURNING id",
            store.table("favorites"),
            kind.fk_column()
        );
        let deleted: Option<(i32,)> = sqlx::query_as(&sql)
            .bind(identity.user_id())
            .bind(entity_id)
            .fetch_optional(store.pool())
            .await?;
        match deleted {
            Some(_) => {
                tracing::info!(user_id = identity.user_id(), kind = ?kind, entity_id, "favorite removed");
                Ok(())
            }
            None => Err(FavoriteError::NotFavorited(kind).into()),
        }
    }

    /// The identity's favorites in insertion order, each expanded with its entity.
    pub async fn list(store: &Store, identity: &Identity) -> Result<Vec<Favorite>, AppError> {
        Self::list_for_user(store, identity.user_id()).await
    }

    pub async fn list_for_user(store: &Store, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let sql = format!("{} WHERE f.user_id = $1 ORDER BY f.id", expanded_select(store));
        tracing::debug!(sql = %sql, user_id, "query");
        let rows = sqlx::query_as::<_, FavoriteRow>(&sql)
            .bind(user_id)
            .fetch_all(store.pool())
            .await?;
        Ok(rows.into_iter().map(Favorite::from).collect())
    }
}

fn expanded_select(store: &Store) -> String {
    format!(
        "SELECT f.id, f.user_id, f.created_at, \
         p.id AS people_id, p.name AS people_name, p.gender AS people_gender, p.birth_year AS people_birth_year, \
         pl.id AS planet_id, pl.name AS planet_name, pl.climate AS planet_climate, pl.population AS planet_population, \
         v.id AS vehicle_id, v.name AS vehicle_name, v.model AS vehicle_model, v.manufacturer AS vehicle_manufacturer \
         FROM {} f \
         LEFT JOIN {} p ON p.id = f.people_id \
         LEFT JOIN {} pl ON pl.id = f.planet_id \
         LEFT JOIN {} v ON v.id = f.vehicle_id",
        store.table("favorites"),
        store.table(CatalogKind::People.table()),
        store.table(CatalogKind::Planet.table()),
        store.table(CatalogKind::Vehicle.table()),
    )
}
