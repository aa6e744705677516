//! Storage error types
//!
//! Defines all errors that can occur while reading or writing persisted entries.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the storage layer
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted value could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage key is not usable as a file name
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Data directory could not be prepared
    #[error("Data directory {path:?} unavailable: {error}")]
    DataDir { path: PathBuf, error: String },

    /// Lock acquisition failed
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
