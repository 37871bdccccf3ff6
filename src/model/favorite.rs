use crate::model::{CatalogKind, Character, Planet, Vehicle};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A user's bookmark of exactly one catalog entity, expanded with that entity.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub people: Option<Character>,
    pub planet: Option<Planet>,
    pub vehicle: Option<Vehicle>,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    /// Kind of the referenced entity, if it is still present.
    pub fn kind(&self) -> Option<CatalogKind> {
        if self.people.is_some() {
            Some(CatalogKind::People)
        } else if self.planet.is_some() {
            Some(CatalogKind::Planet)
        } else if self.vehicle.is_some() {
            Some(CatalogKind::Vehicle)
        } else {
            None
        }
    }
}

/// Favorite joined against all three catalog tables.
#[derive(Debug, FromRow)]
pub(crate) struct FavoriteRow {
    pub id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub people_id: Option<i32>,
    pub people_name: Option<String>,
    pub people_gender: Option<String>,
    pub people_birth_year: Option<String>,
    pub planet_id: Option<i32>,
    pub planet_name: Option<String>,
    pub planet_climate: Option<String>,
    pub planet_population: Option<String>,
    pub vehicle_id: Option<i32>,
    pub vehicle_name: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_manufacturer: Option<String>,
}

impl From<FavoriteRow> for Favorite {
    fn from(row: FavoriteRow) -> Self {
        let people = match (row.people_id, row.people_name) {
            (Some(id), Some(name)) => Some(Character {
                id,
                name,
                gender: row.people_gender,
                birth_year: row.people_birth_year,
            }),
            _ => None,
        };
        let planet = match (row.planet_id, row.planet_name) {
            (Some(id), Some(name)) => Some(Planet {
                id,
                name,
                climate: row.planet_climate,
                population: row.planet_population,
            }),
            _ => None,
        };
        let vehicle = match (row.vehicle_id, row.vehicle_name) {
            (Some(id), Some(name)) => Some(Vehicle {
                id,
                name,
                model: row.vehicle_model,
                manufacturer: row.vehicle_manufacturer,
            }),
            _ => None,
        };
        Favorite {
            id: row.id,
            user_id: row.user_id,
            people,
            planet,
            vehicle,
            created_at: row.created_at,
        }
    }
}
