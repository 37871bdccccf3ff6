//! Idempotent DDL for the schema, tables, constraints and indexes.
//! Order follows foreign-key dependencies: users and catalog tables before favorites.

use crate::error::AppError;
use crate::store::{quote_ident, Store};

/// Create the schema and every table if they do not exist yet. Runs in one transaction.
pub async fn apply_migrations(store: &Store) -> Result<(), AppError> {
    let users = store.table("users");
    let people = store.table("people");
    let planets = store.table("planets");
    let vehicles = store.table("vehicles");
    let favorites = store.table("favorites");
    let revoked = store.table("revoked_tokens");

    let statements = [
        format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(store.schema())),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {users} (
                id SERIAL PRIMARY KEY,
                email VARCHAR(120) NOT NULL,
                password TEXT NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                CONSTRAINT users_email_key UNIQUE (email)
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {people} (
                id SERIAL PRIMARY KEY,
                name VARCHAR(120) NOT NULL,
                gender VARCHAR(20),
                birth_year VARCHAR(20)
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {planets} (
                id SERIAL PRIMARY KEY,
                name VARCHAR(120) NOT NULL,
                climate VARCHAR(120),
                population VARCHAR(120)
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {vehicles} (
                id SERIAL PRIMARY KEY,
                name VARCHAR(120) NOT NULL,
                model VARCHAR(120),
                manufacturer VARCHAR(120)
            )
            "#
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {favorites} (
                id SERIAL PRIMARY KEY,
                user_id INTEGER NOT NULL REFERENCES {users} (id) ON DELETE CASCADE,
                people_id INTEGER REFERENCES {people} (id) ON DELETE CASCADE,
                planet_id INTEGER REFERENCES {planets} (id) ON DELETE CASCADE,
                vehicle_id INTEGER REFERENCES {vehicles} (id) ON DELETE CASCADE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                CONSTRAINT favorites_single_target CHECK (num_nonnulls(people_id, planet_id, vehicle_id) = 1)
            )
            "#
        ),
        format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS favorites_user_people_key ON {favorites} (user_id, people_id) WHERE people_id IS NOT NULL"
        ),
        format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS favorites_user_planet_key ON {favorites} (user_id, planet_id) WHERE planet_id IS NOT NULL"
        ),
        format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS favorites_user_vehicle_key ON {favorites} (user_id, vehicle_id) WHERE vehicle_id IS NOT NULL"
        ),
        format!("CREATE INDEX IF NOT EXISTS favorites_user_id_idx ON {favorites} (user_id, id)"),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {revoked} (
                jti UUID PRIMARY KEY,
                user_id INTEGER NOT NULL REFERENCES {users} (id) ON DELETE CASCADE,
                expires_at TIMESTAMPTZ NOT NULL
            )
            "#
        ),
        format!("CREATE INDEX IF NOT EXISTS revoked_tokens_expires_at_idx ON {revoked} (expires_at)"),
    ];

    let mut tx = store.pool().begin().await?;
    for sql in &statements {
        tracing::debug!(sql = %sql.trim(), "migration");
        sqlx::query(sql).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(schema = %store.schema(), "migrations applied");
    Ok(())
}
