//! `localStorage`-backed token store.
//!
//! Persists the bearer token under `session::TOKEN_KEY` so a session survives
//! page reloads. Requires a browser environment; elsewhere the store is
//! permanently empty and writes are dropped.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use session::SessionStore;
#[cfg(feature = "hydrate")]
use session::TOKEN_KEY;

/// Browser-local persistent token storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            // Stored verbatim; only a missing key means "no session".
            storage.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; session will not survive reload");
                return;
            };
            if storage.set_item(TOKEN_KEY, token).is_err() {
                leptos::logging::warn!("failed to persist session token");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
