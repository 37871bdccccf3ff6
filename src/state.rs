//! Shared application state for all routes.

use crate::auth::TokenSigner;
use crate::config::Settings;
use crate::store::Store;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Store,
    pub tokens: TokenSigner,
}

impl AppState {
    pub fn new(store: Store, settings: &Settings) -> Self {
        AppState {
            store,
            tokens: TokenSigner::new(&settings.jwt_secret, settings.token_ttl_secs),
        }
    }
}
