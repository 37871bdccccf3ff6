//! holocron: REST backend for a Star Wars catalog with per-user favorites.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use auth::{Identity, TokenSigner};
pub use config::Settings;
pub use error::{AppError, AuthError, ConfigError, FavoriteError};
pub use migration::apply_migrations;
pub use model::{CatalogKind, Character, Favorite, Planet, User, Vehicle};
pub use routes::app;
pub use service::{AuthService, CatalogService, Credentials, FavoriteService, UserService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, Store};
