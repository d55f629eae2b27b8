//! The canonical item mapping
//!
//! A `BTreeMap` keyed by item key, so `list_all` and `keys` traverse in
//! deterministic key order across otherwise identical catalogs.

use std::collections::BTreeMap;

use crate::item::{Item, ItemKey};

use super::errors::{StoreError, StoreResult};

/// In-memory record store mapping unique keys to items.
#[derive(Debug, Default)]
pub struct RecordStore {
    items: BTreeMap<ItemKey, Item>,
}

impl RecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Inserts an item, making it the canonical value for its key.
    ///
    /// Fails with `StoreError::DuplicateKey` if the key is already present;
    /// the store is left unchanged in that case.
    pub fn insert(&mut self, item: Item) -> StoreResult<()> {
        if self.items.contains_key(&item.key) {
            return Err(StoreError::DuplicateKey(item.key.clone()));
        }

        self.items.insert(item.key.clone(), item);
        Ok(())
    }

    /// Looks up an item by key. Pure, never fails.
    pub fn get(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    /// Removes and returns the item for a key.
    ///
    /// Idempotent: removing an absent key returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<Item> {
        self.items.remove(key)
    }

    /// Returns all current items in key order.
    pub fn list_all(&self) -> Vec<&Item> {
        self.items.values().collect()
    }

    /// Returns all current keys in ascending order.
    pub fn keys(&self) -> Vec<ItemKey> {
        self.items.keys().cloned().collect()
    }

    /// Returns true if the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Number of items currently stored
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: &str) -> Item {
        Item::new(key, "Widget", "Hardware", 9.99, "Supplier X")
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = RecordStore::new();
        store.insert(item("P001")).unwrap();

        let found = store.get("P001").unwrap();
        assert_eq!(found.key(), "P001");
        assert!(store.contains_key("P001"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut store = RecordStore::new();
        store.insert(item("P001")).unwrap();

        let result = store.insert(item("P001"));
        assert_eq!(result, Err(StoreError::DuplicateKey("P001".into())));

        // Store unchanged
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = RecordStore::new();
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn test_remove_returns_item() {
        let mut store = RecordStore::new();
        store.insert(item("P001")).unwrap();

        let removed = store.remove("P001").unwrap();
        assert_eq!(removed.key(), "P001");
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_is_idempotent() {
        let mut store = RecordStore::new();
        assert!(store.remove("absent").is_none());
        assert!(store.remove("absent").is_none());
    }

    #[test]
    fn test_list_all_key_order() {
        let mut store = RecordStore::new();
        store.insert(item("P003")).unwrap();
        store.insert(item("P001")).unwrap();
        store.insert(item("P002")).unwrap();

        let keys: Vec<&str> = store.list_all().iter().map(|i| i.key()).collect();
        assert_eq!(keys, vec!["P001", "P002", "P003"]);

        assert_eq!(store.keys(), vec!["P001", "P002", "P003"]);
    }
}
