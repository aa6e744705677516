//! Core data types for weight tracking
//!
//! - `Entry`: a single weight measurement on a calendar date
//! - `EntryList`: the date-sorted sequence of entries that gets persisted

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for persisted entries and draft input
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single weight measurement
///
/// Serialized as `{"id": 1704067200000, "weight": 80.0, "date": "2024-01-01"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    /// Creation time in Unix milliseconds, used as a stable key
    pub id: i64,
    /// Measured weight
    pub weight: f64,
    /// Day of the measurement
    pub date: NaiveDate,
}

impl Entry {
    pub fn new(id: i64, weight: f64, date: NaiveDate) -> Self {
        Self { id, weight, date }
    }

    /// Date in `YYYY-MM-DD` form
    pub fn iso_date(&self) -> String {
        self.date.format(ISO_DATE_FORMAT).to_string()
    }
}

/// Entries ordered ascending by date
///
/// Every mutation re-sorts the list. The sort is stable, so entries sharing
/// a date keep their insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct EntryList {
    entries: Vec<Entry>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install entries as loaded, without re-ordering
    pub fn from_persisted(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Append an entry and restore date order
    pub fn insert(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.entries.sort_by_key(|e| e.date);
    }

    /// Next identifier for an entry created at `now_ms`
    ///
    /// Never returns a value at or below an existing id.
    pub fn next_id(&self, now_ms: i64) -> i64 {
        match self.entries.iter().map(|e| e.id).max() {
            Some(max) if max >= now_ms => max + 1,
            _ => now_ms,
        }
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&Entry> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn is_sorted(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].date <= w[1].date)
    }

    pub fn into_vec(self) -> Vec<Entry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
