//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use crate::storage::JsonStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// Where the ledger document is loaded from and saved to.
    pub store: JsonStore,
}

impl AppState {
    /// Create a new [AppState] that keeps the ledger in `store`.
    ///
    /// The cookie key is derived from `cookie_secret`. Without a secret a
    /// random key is generated, so status messages that are pending when the
    /// server restarts are dropped.
    pub fn new(store: JsonStore, cookie_secret: Option<&str>) -> Self {
        let cookie_key = match cookie_secret {
            Some(secret) => create_cookie_key(secret),
            None => Key::generate(),
        };

        Self { cookie_key, store }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}
