use super::*;
use crate::storage::MemoryStorage;

fn parent() -> Role {
    Role::new("parent").expect("non-empty role")
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_rejects_empty_string() {
    assert!(Role::new("").is_none());
}

#[test]
fn role_accepts_any_non_empty_string() {
    let role = Role::new("grandparent").expect("non-empty role");
    assert_eq!(role.as_str(), "grandparent");
}

// =============================================================
// RoleStore
// =============================================================

#[test]
fn fresh_store_has_no_role() {
    let store = RoleStore::new(MemoryStorage::new());
    assert!(store.current_role().is_none());
}

#[test]
fn set_role_is_visible_and_persisted() {
    let storage = MemoryStorage::new();
    let mut store = RoleStore::new(storage.clone());

    store.set_role(parent());
    assert_eq!(store.current_role().map(Role::as_str), Some("parent"));
    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("parent"));
}

#[test]
fn reload_reconstructs_last_set_role() {
    let storage = MemoryStorage::new();
    let mut store = RoleStore::new(storage.clone());
    store.set_role(Role::new("child").expect("non-empty role"));

    // A fresh store over the same storage is a simulated page reload.
    let reloaded = RoleStore::new(storage);
    assert_eq!(reloaded.current_role().map(Role::as_str), Some("child"));
}

#[test]
fn set_role_twice_keeps_last_value() {
    let storage = MemoryStorage::new();
    let mut store = RoleStore::new(storage.clone());

    store.set_role(parent());
    store.set_role(parent());
    assert_eq!(store.current_role().map(Role::as_str), Some("parent"));

    store.set_role(Role::new("child").expect("non-empty role"));
    assert_eq!(store.current_role().map(Role::as_str), Some("child"));
    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("child"));
}

#[test]
fn clear_role_removes_memory_and_persisted_entry() {
    let storage = MemoryStorage::new();
    let mut store = RoleStore::new(storage.clone());
    store.set_role(parent());

    store.clear_role();
    assert!(store.current_role().is_none());
    assert!(storage.get(ROLE_KEY).is_none());

    // Cleared state survives a reload too.
    assert!(RoleStore::new(storage).current_role().is_none());
}

#[test]
fn clear_role_is_idempotent() {
    let mut store = RoleStore::new(MemoryStorage::new());
    store.clear_role();
    store.clear_role();
    assert!(store.current_role().is_none());
}

#[test]
fn persisted_empty_string_reads_as_no_role() {
    let storage = MemoryStorage::new();
    storage.set(ROLE_KEY, "");
    assert!(RoleStore::new(storage).current_role().is_none());
}
