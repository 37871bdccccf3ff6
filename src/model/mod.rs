//! Row types for users, catalog entities and favorites.

mod catalog;
mod favorite;
mod user;

pub use catalog::*;
pub use favorite::Favorite;
pub(crate) use favorite::FavoriteRow;
pub use user::User;
pub(crate) use user::USER_COLUMNS;
