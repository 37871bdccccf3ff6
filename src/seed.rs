//! Catalog seeding for the `holocron-seed` tool.
//!
//! Rows whose name already exists are skipped, and so are users whose email is
//! already registered, so running the seed twice is harmless.

use crate::error::{AppError, AuthError};
use crate::model::{Character, NewCharacter, NewPlanet, NewVehicle, Planet, Vehicle};
use crate::service::{AuthService, CatalogService, Credentials};
use crate::store::Store;
use serde::Deserialize;

/// Bundled demo data.
pub const DEFAULT_SEED: &str = include_str!("../seed/catalog.json");

#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub people: Vec<NewCharacter>,
    #[serde(default)]
    pub planets: Vec<NewPlanet>,
    #[serde(default)]
    pub vehicles: Vec<NewVehicle>,
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Deserialize)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
}

impl SeedData {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|e| AppError::BadRequest(format!("invalid seed file: {}", e)))
    }
}

/// Rows actually inserted by one run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub people: usize,
    pub planets: usize,
    pub vehicles: usize,
    pub users: usize,
}

pub async fn seed(store: &Store, data: &SeedData) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    for new in &data.people {
        if CatalogService::find_by_name::<Character>(store, &new.name).await?.is_none() {
            CatalogService::insert_character(store, new).await?;
            report.people += 1;
        }
    }
    for new in &data.planets {
        if CatalogService::find_by_name::<Planet>(store, &new.name).await?.is_none() {
            CatalogService::insert_planet(store, new).await?;
            report.planets += 1;
        }
    }
    for new in &data.vehicles {
        if CatalogService::find_by_name::<Vehicle>(store, &new.name).await?.is_none() {
            CatalogService::insert_vehicle(store, new).await?;
            report.vehicles += 1;
        }
    }
    for user in &data.users {
        match AuthService::register(store, &Credentials::new(&user.email, &user.password)).await {
            Ok(_) => report.users += 1,
            Err(AppError::Auth(AuthError::DuplicateEmail)) => {
                tracing::debug!(email = %user.email, "user already exists, skipping");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}
