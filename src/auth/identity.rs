use crate::model::User;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The authenticated caller of a request, resolved from its bearer token.
#[derive(Clone, Debug)]
pub struct Identity {
    pub user: User,
    /// Id of the presented token; logout revokes it.
    pub token_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl Identity {
    pub fn user_id(&self) -> i32 {
        self.user.id
    }
}
