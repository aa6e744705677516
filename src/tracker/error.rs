//! Tracker error types

use crate::storage::StorageError;
use thiserror::Error;

/// Draft rejected by add-entry
///
/// The display text is what the status line shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both weight and date.")]
    MissingFields,

    #[error("Please enter a valid weight.")]
    InvalidWeight,

    #[error("Please enter a valid date.")]
    InvalidDate,
}

/// Errors that abort a tracker operation
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Persisted entries could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
