//! Durable string-keyed storage behind the session state.
//!
//! DESIGN
//! ======
//! Persistence sits behind a small synchronous trait so the browser
//! adapter and the in-memory double are interchangeable: components and
//! stores are written against [`KeyValueStorage`] and never touch
//! `web_sys` directly.

pub mod browser;
pub mod memory;

pub use browser::BrowserStorage;
pub use memory::MemoryStorage;

/// Storage key for the selected family role.
pub const ROLE_KEY: &str = "family_role";

/// Storage key for the login flag written by the external login flow.
pub const AUTH_KEY: &str = "isAuthenticated";

/// Synchronous string-keyed persistence.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove the entry under `key`, if present.
    fn remove(&self, key: &str);
}
