//! Catalog reads for the API, plus create/delete for seed and admin tooling.

use crate::error::AppError;
use crate::model::{CatalogKind, CatalogRecord, Character, NewCharacter, NewPlanet, NewVehicle, Planet, Vehicle};
use crate::store::Store;

pub struct CatalogService;

impl CatalogService {
    /// All rows of one kind in insertion order.
    pub async fn list<T: CatalogRecord>(store: &Store) -> Result<Vec<T>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            T::COLUMNS,
            store.table(T::KIND.table())
        );
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, T>(&sql).fetch_all(store.pool()).await?)
    }

    pub async fn get<T: CatalogRecord>(store: &Store, id: i32) -> Result<T, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            T::COLUMNS,
            store.table(T::KIND.table())
        );
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(store.pool())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} {}", T::KIND.label(), id)))
    }

    /// Exact-name lookup; seed tooling uses it to skip rows that are already present.
    pub async fn find_by_name<T: CatalogRecord>(store: &Store, name: &str) -> Result<Option<T>, AppError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE name = $1 ORDER BY id LIMIT 1",
            T::COLUMNS,
            store.table(T::KIND.table())
        );
        Ok(sqlx::query_as::<_, T>(&sql).bind(name).fetch_optional(store.pool()).await?)
    }

    pub async fn insert_character(store: &Store, new: &NewCharacter) -> Result<Character, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, gender, birth_year) VALUES ($1, $2, $3) RETURNING {}",
            store.table(CatalogKind::People.table()),
            Character::COLUMNS
        );
        Ok(sqlx::query_as::<_, Character>(&sql)
            .bind(&new.name)
            .bind(&new.gender)
            .bind(&new.birth_year)
            .fetch_one(store.pool())
            .await?)
    }

    pub async fn insert_planet(store: &Store, new: &NewPlanet) -> Result<Planet, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, climate, population) VALUES ($1, $2, $3) RETURNING {}",
            store.table(CatalogKind::Planet.table()),
            Planet::COLUMNS
        );
        Ok(sqlx::query_as::<_, Planet>(&sql)
            .bind(&new.name)
            .bind(&new.climate)
            .bind(&new.population)
            .fetch_one(store.pool())
            .await?)
    }

    pub async fn insert_vehicle(store: &Store, new: &NewVehicle) -> Result<Vehicle, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, model, manufacturer) VALUES ($1, $2, $3) RETURNING {}",
            store.table(CatalogKind::Vehicle.table()),
            Vehicle::COLUMNS
        );
        Ok(sqlx::query_as::<_, Vehicle>(&sql)
            .bind(&new.name)
            .bind(&new.model)
            .bind(&new.manufacturer)
            .fetch_one(store.pool())
            .await?)
    }

    /// Remove a catalog row. Favorites pointing at it are removed by the store.
    pub async fn delete(store: &Store, kind: CatalogKind, id: i32) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1 RETURNING id", store.table(kind.table()));
        let deleted: Option<(i32,)> = sqlx::query_as(&sql).bind(id).fetch_optional(store.pool()).await?;
        deleted
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("{} {}", kind.label(), id)))
    }
}
