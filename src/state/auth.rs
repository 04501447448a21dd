#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::storage::{AUTH_KEY, KeyValueStorage};

/// Whether the external login flow has completed for this browser.
///
/// The login flow persists the string `"true"` under [`AUTH_KEY`];
/// anything else (or no entry) reads as not authenticated. Only the
/// login-gated guard revision consumes this flag — it is read-only here.
pub fn is_authenticated(storage: &impl KeyValueStorage) -> bool {
    storage.get(AUTH_KEY).as_deref() == Some("true")
}
