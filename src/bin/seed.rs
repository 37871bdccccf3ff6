//! Seed tool: applies migrations and loads catalog rows (and demo accounts) from JSON.
//!
//! `SEED_FILE` points at a seed file; without it the bundled demo data is used.

use holocron::seed::{seed, SeedData, DEFAULT_SEED};
use holocron::{apply_migrations, connect, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("holocron=info")))
        .init();

    let settings = Settings::from_env()?;
    let raw = match std::env::var("SEED_FILE") {
        Ok(path) => {
            tracing::info!(%path, "reading seed file");
            tokio::fs::read_to_string(&path).await?
        }
        Err(_) => DEFAULT_SEED.to_string(),
    };
    let data = SeedData::from_json(&raw)?;

    let store = connect(&settings).await?;
    apply_migrations(&store).await?;
    let report = seed(&store, &data).await?;
    tracing::info!(
        people = report.people,
        planets = report.planets,
        vehicles = report.vehicles,
        users = report.users,
        "seed complete"
    );
    Ok(())
}
