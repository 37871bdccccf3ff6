//! HTTP handlers for auth, catalog reads, favorites and service status.

pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod system;

use crate::error::AppError;

/// Ids are i32 keys. Text that is not an integer is a bad request; an integer
/// outside the key range cannot name any row, so it is not found.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    if let Ok(id) = id_str.parse::<i32>() {
        return Ok(id);
    }
    let digits = id_str.strip_prefix('-').unwrap_or(id_str);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(format!("no record with id {}", id_str)));
    }
    Err(AppError::BadRequest(format!("invalid id '{}'", id_str)))
}
