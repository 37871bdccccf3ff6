//! Connection pool, schema-qualified table names and database bootstrap.
//! Every table lives in the schema named by `HOLOCRON_SCHEMA` (default `holocron`).

use crate::config::Settings;
use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use std::sync::Arc;

/// Pool plus the schema all queries are qualified with. Cheap to clone.
#[derive(Clone, Debug)]
pub struct Store {
    pool: PgPool,
    schema: Arc<str>,
}

impl Store {
    pub fn new(pool: PgPool, schema: &str) -> Self {
        Store {
            pool,
            schema: Arc::from(schema),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Round-trip a trivial query; readiness uses it.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Schema-qualified, quoted table name (e.g. `"holocron"."favorites"`).
    pub fn table(&self, name: &str) -> String {
        format!("{}.{}", quote_ident(&self.schema), quote_ident(name))
    }
}

/// Create the database if needed, then open the pool.
pub async fn connect(settings: &Settings) -> Result<Store, AppError> {
    ensure_database_exists(&settings.database_url).await?;
    let pool = PgPoolOptions::new()
        .max_connections(settings.db_max_connections)
        .connect(&settings.database_url)
        .await?;
    tracing::info!(schema = %settings.schema, "database pool ready");
    Ok(Store::new(pool, &settings.schema))
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url.rfind('/').ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))? + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}

pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name_from_url() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@localhost:5432/holocron").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "holocron");
    }

    #[test]
    fn keeps_query_string_on_admin_url() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost/sw?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "sw");
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("users"), "\"users\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[tokio::test]
    async fn ping_fails_without_a_server() {
        let pool = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(300))
            .connect_lazy("postgres://holocron@127.0.0.1:1/holocron")
            .unwrap();
        let store = Store::new(pool, "holocron");
        assert!(matches!(store.ping().await, Err(AppError::Db(_))));
    }

    #[tokio::test]
    async fn tables_are_schema_qualified() {
        let pool = PgPoolOptions::new().connect_lazy("postgres://localhost/holocron").unwrap();
        let store = Store::new(pool, "star_wars");
        assert_eq!(store.table("favorites"), "\"star_wars\".\"favorites\"");
        assert_eq!(store.schema(), "star_wars");
    }
}
