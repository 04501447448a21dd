use super::*;
use crate::storage::MemoryStorage;

#[test]
fn missing_flag_reads_as_not_authenticated() {
    let storage = MemoryStorage::new();
    assert!(!is_authenticated(&storage));
}

#[test]
fn exact_true_string_reads_as_authenticated() {
    let storage = MemoryStorage::new();
    storage.set(AUTH_KEY, "true");
    assert!(is_authenticated(&storage));
}

#[test]
fn other_values_read_as_not_authenticated() {
    let storage = MemoryStorage::new();
    for value in ["false", "TRUE", "1", ""] {
        storage.set(AUTH_KEY, value);
        assert!(!is_authenticated(&storage), "value {value:?} must not authenticate");
    }
}
