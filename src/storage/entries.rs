//! Entry persistence
//!
//! Bridges the entry list to a `KeyValueStore`: the whole list is stored as a
//! JSON array under a single key and rewritten on every save.

use crate::storage::error::StorageResult;
use crate::storage::kv::KeyValueStore;
use crate::storage::types::{Entry, EntryList};

/// Key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "weightData";

/// Loads and saves the entry list under a fixed key
pub struct EntryStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the persisted list
    ///
    /// Returns `None` when nothing has been stored yet. Malformed JSON is an
    /// error; entries are returned in stored order.
    pub fn load(&self) -> StorageResult<Option<EntryList>> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            return Ok(None);
        };

        let entries: Vec<Entry> = serde_json::from_str(&raw)?;
        tracing::debug!(key = %self.key, count = entries.len(), "Loaded entries");
        Ok(Some(EntryList::from_persisted(entries)))
    }

    /// Overwrite the persisted list
    pub fn save(&self, entries: &EntryList) -> StorageResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.backend.set_item(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = entries.len(), "Saved entries");
        Ok(())
    }
}
