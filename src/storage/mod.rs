//! Weight Tracker Storage
//!
//! This module persists the entry list:
//!
//! - **types**: `Entry` and the date-sorted `EntryList`
//! - **kv**: key-value backends (`FileStore`, `MemoryStore`)
//! - **entries**: `EntryStore`, JSON load/save under a fixed key
//! - **error**: Error types
//!
//! # Layout
//!
//! ```text
//! EntryList → serde_json → KeyValueStore["weightData"] → <data_dir>/weightData.json
//! ```
//!
//! # Example
//!
//! ```rust
//! use weight_tracker::storage::{EntryList, EntryStore, MemoryStore};
//!
//! let store = EntryStore::new(MemoryStore::new());
//! assert!(store.load().unwrap().is_none());
//!
//! store.save(&EntryList::new()).unwrap();
//! assert_eq!(store.load().unwrap(), Some(EntryList::new()));
//! ```

pub mod entries;
pub mod error;
pub mod kv;
pub mod types;

// Re-export commonly used types
pub use entries::{EntryStore, DEFAULT_STORAGE_KEY};
pub use error::{StorageError, StorageResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use types::{Entry, EntryList, ISO_DATE_FORMAT};
