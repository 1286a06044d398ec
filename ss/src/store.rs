//! Generic keyed value store

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;
use uuid::Uuid;

/// In-memory map from string id to value.
///
/// Writes to an existing key are last-write-wins with no merge policy.
/// Each session is driven by a single user's serialized requests, so no
/// finer-grained coordination is needed.
#[derive(Debug)]
pub struct KvStore<T> {
    entries: RwLock<HashMap<String, T>>,
}

impl<T> Default for KvStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KvStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a value under a fresh id and return the id
    pub fn insert(&self, value: T) -> String {
        let id = Uuid::now_v7().to_string();
        debug!(%id, "insert: storing new entry");
        self.write().insert(id.clone(), value);
        id
    }

    /// Store a value under the given id, replacing any previous value
    pub fn put(&self, id: impl Into<String>, value: T) {
        let id = id.into();
        debug!(%id, "put: storing entry");
        self.write().insert(id, value);
    }

    /// Fetch a copy of the value stored under `id`
    pub fn get(&self, id: &str) -> Option<T>
    where
        T: Clone,
    {
        self.read().get(id).cloned()
    }

    /// Remove and return the value stored under `id`
    pub fn remove(&self, id: &str) -> Option<T> {
        debug!(%id, "remove: dropping entry");
        self.write().remove(id)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All stored ids, in no particular order
    pub fn ids(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    // Poison is recovered rather than propagated: the map stays usable
    // after a writer panic.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, T>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, T>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let store: KvStore<String> = KvStore::new();
        let id = store.insert("hello".to_string());

        assert_eq!(store.get(&id), Some("hello".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store: KvStore<String> = KvStore::new();
        assert_eq!(store.get("no-such-id"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_put_is_last_write_wins() {
        let store: KvStore<u32> = KvStore::new();
        store.put("slot", 1);
        store.put("slot", 2);

        assert_eq!(store.get("slot"), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let store: KvStore<String> = KvStore::new();
        let id = store.insert("gone soon".to_string());

        assert_eq!(store.remove(&id), Some("gone soon".to_string()));
        assert_eq!(store.get(&id), None);
    }

    #[test]
    fn test_insert_ids_are_unique() {
        let store: KvStore<u32> = KvStore::new();
        let a = store.insert(1);
        let b = store.insert(2);

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);

        let mut ids = store.ids();
        ids.sort();
        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_concurrent_access() {
        use std::sync::Arc;

        let store: Arc<KvStore<u32>> = Arc::new(KvStore::new());
        let mut handles = Vec::new();

        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store.put(format!("key-{i}"), i);
            }));
        }

        for handle in handles {
            handle.join().expect("writer thread panicked");
        }

        assert_eq!(store.len(), 8);
    }
}
