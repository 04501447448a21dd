#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use crate::storage::{BrowserStorage, KeyValueStorage, ROLE_KEY};

/// The role store as wired in the live app.
pub type SessionRoleStore = RoleStore<BrowserStorage>;

/// A user-selected family-member category ("parent", "child", ...).
///
/// The set of roles is defined by the role-selection UI, not enumerated
/// here; any non-empty string is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Role(String);

impl Role {
    /// Wrap a role identifier. Returns `None` for the empty string.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() { None } else { Some(Self(value)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Session-lifetime role state kept synchronized with durable storage.
///
/// The storage adapter is injected so tests run against
/// [`crate::storage::MemoryStorage`]; the app constructs one store over
/// [`BrowserStorage`] at startup and provides it via context.
#[derive(Clone, Debug)]
pub struct RoleStore<S> {
    current: Option<Role>,
    storage: S,
}

impl<S: KeyValueStorage> RoleStore<S> {
    /// Build the store, loading any previously persisted role.
    pub fn new(storage: S) -> Self {
        let current = storage.get(ROLE_KEY).and_then(Role::new);
        Self { current, storage }
    }

    /// The currently selected role, if any. Does not touch storage.
    pub fn current_role(&self) -> Option<&Role> {
        self.current.as_ref()
    }

    /// Select a role and persist it.
    pub fn set_role(&mut self, role: Role) {
        self.storage.set(ROLE_KEY, role.as_str());
        self.current = Some(role);
    }

    /// Drop the selected role and remove the persisted entry.
    pub fn clear_role(&mut self) {
        self.current = None;
        self.storage.remove(ROLE_KEY);
    }
}
