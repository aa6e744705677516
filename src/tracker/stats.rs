//! Summary statistics
//!
//! Derived from the entry list on demand and never persisted.

use crate::storage::Entry;
use serde::Serialize;

/// Start, current and net change of a date-sorted entry list
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Stats {
    /// Weight of the chronologically first entry
    pub start: f64,
    /// Weight of the chronologically last entry
    pub current: f64,
    /// `current - start`, rounded to one decimal place
    pub change: f64,
}

impl Stats {
    /// Compute statistics, or `None` for an empty list
    pub fn from_entries(entries: &[Entry]) -> Option<Self> {
        let first = entries.first()?;
        let last = entries.last()?;

        Some(Self {
            start: first.weight,
            current: last.weight,
            change: round_one_decimal(last.weight - first.weight),
        })
    }

    /// True when weight went down since the first entry
    pub fn is_loss(&self) -> bool {
        self.change < 0.0
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
