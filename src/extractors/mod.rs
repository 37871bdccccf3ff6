//! Request extractors.

pub mod identity;

pub use identity::bearer_token;
