use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Account row. The password hash is loaded for verification but never serialized.
#[derive(Clone, Debug, Serialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

pub(crate) const USER_COLUMNS: &str = "id, email, password, is_active, created_at";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_user_omits_password() {
        let user = User {
            id: 1,
            email: "luke@jedi.com".into(),
            password_hash: "$argon2id$v=19$...".into(),
            is_active: true,
            created_at: Utc::now(),
        };
        let v = serde_json::to_value(&user).unwrap();
        assert_eq!(v["email"], "luke@jedi.com");
        assert!(v.get("password").is_none());
        assert!(v.get("password_hash").is_none());
    }
}
