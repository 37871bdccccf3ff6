//! Data-access services. Each call is one unit of work against the store.

mod auth;
mod catalog;
mod favorites;
mod users;
mod validation;

pub use auth::{AuthGrant, AuthService};
pub use catalog::CatalogService;
pub use favorites::FavoriteService;
pub use users::UserService;
pub use validation::{Credentials, RequestValidator};
