//! Browser `localStorage` adapter.
//!
//! All `web_sys` access is gated behind the `hydrate` feature since it
//! requires a browser environment; on the server every operation degrades
//! to a no-op and SSR renders with no persisted state. Write failures
//! (storage unavailable, quota exceeded) are logged and the in-memory
//! value stays authoritative for the rest of the session.

use super::KeyValueStorage;

/// [`KeyValueStorage`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            match local_storage() {
                Some(storage) => {
                    if storage.set_item(key, value).is_err() {
                        leptos::logging::warn!("storage write for {key} failed; value kept in memory only");
                    }
                }
                None => leptos::logging::warn!("localStorage unavailable; {key} not persisted"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
