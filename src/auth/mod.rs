//! Credential primitives: password hashing, bearer tokens and the resolved caller identity.

mod identity;
pub mod password;
pub mod token;

pub use identity::Identity;
pub use password::{hash_password, verify_password};
pub use token::{Claims, IssuedToken, TokenError, TokenSigner, MAX_TOKEN_TTL_SECS};
