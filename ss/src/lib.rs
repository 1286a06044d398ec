//! SessionStore - in-memory keyed storage for chat sessions
//!
//! Holds conversation and itinerary state for the lifetime of the process.
//! Nothing is persisted: the reference deployment keeps session state in
//! memory only, and every store is a plain key-to-value map.
//!
//! # Example
//!
//! ```
//! use sessionstore::KvStore;
//!
//! let store: KvStore<Vec<String>> = KvStore::new();
//! let id = store.insert(vec!["hello".to_string()]);
//! assert_eq!(store.get(&id).unwrap().len(), 1);
//! ```

mod store;

pub use store::KvStore;
