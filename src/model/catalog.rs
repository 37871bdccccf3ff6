//! Catalog reference data: characters, planets, vehicles.

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use utoipa::ToSchema;

/// The three kinds of catalog entity a favorite can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    People,
    Planet,
    Vehicle,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [CatalogKind::People, CatalogKind::Planet, CatalogKind::Vehicle];

    /// Collection segment used by the catalog routes: `people`, `planets`, `vehicles`.
    pub fn from_collection(segment: &str) -> Option<Self> {
        match segment {
            "people" => Some(CatalogKind::People),
            "planets" => Some(CatalogKind::Planet),
            "vehicles" => Some(CatalogKind::Vehicle),
            _ => None,
        }
    }

    /// Segment used by the favorite routes: `people`, `planet`, `vehicle`.
    pub fn from_favorite_segment(segment: &str) -> Option<Self> {
        match segment {
            "people" => Some(CatalogKind::People),
            "planet" => Some(CatalogKind::Planet),
            "vehicle" => Some(CatalogKind::Vehicle),
            _ => None,
        }
    }

    pub fn collection(self) -> &'static str {
        match self {
            CatalogKind::People => "people",
            CatalogKind::Planet => "planets",
            CatalogKind::Vehicle => "vehicles",
        }
    }

    /// Table holding this kind's rows.
    pub fn table(self) -> &'static str {
        self.collection()
    }

    /// Column of `favorites` referencing this kind.
    pub fn fk_column(self) -> &'static str {
        match self {
            CatalogKind::People => "people_id",
            CatalogKind::Planet => "planet_id",
            CatalogKind::Vehicle => "vehicle_id",
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::People => "Character",
            CatalogKind::Planet => "Planet",
            CatalogKind::Vehicle => "Vehicle",
        }
    }
}

/// A catalog row type with a fixed table and column list.
pub trait CatalogRecord: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    const KIND: CatalogKind;
    /// Selected columns, in struct order.
    const COLUMNS: &'static str;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
}

impl CatalogRecord for Character {
    const KIND: CatalogKind = CatalogKind::People;
    const COLUMNS: &'static str = "id, name, gender, birth_year";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub population: Option<String>,
}

impl CatalogRecord for Planet {
    const KIND: CatalogKind = CatalogKind::Planet;
    const COLUMNS: &'static str = "id, name, climate, population";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
}

impl CatalogRecord for Vehicle {
    const KIND: CatalogKind = CatalogKind::Vehicle;
    const COLUMNS: &'static str = "id, name, model, manufacturer";
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub birth_year: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewPlanet {
    pub name: String,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewVehicle {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
}
