//! Tracker state
//!
//! Owns the entry list, the form draft and the status line, and keeps the
//! persisted copy in step with the list.

use crate::storage::{Entry, EntryList, EntryStore, KeyValueStore};
use crate::tracker::chart::{self, ChartPoint, DEFAULT_DATE_FORMAT};
use crate::tracker::draft::Draft;
use crate::tracker::error::{TrackerResult, ValidationError};
use crate::tracker::stats::Stats;
use crate::tracker::status::{StatusLine, DEFAULT_CLEAR_AFTER};
use crate::tracker::view::TrackerView;
use chrono::Utc;
use std::time::Duration;
use tokio::sync::watch;

/// Status shown after a successful add
pub const ENTRY_ADDED: &str = "Entry added!";

/// Tunables for a tracker
#[derive(Debug, Clone)]
pub struct TrackerOptions {
    /// How long "Entry added!" stays visible
    pub status_clear_after: Duration,
    /// chrono format for chart labels
    pub date_format: String,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            status_clear_after: DEFAULT_CLEAR_AFTER,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Result of an add-entry attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Entry),
    Rejected(ValidationError),
}

/// A weight log bound to a store
pub struct Tracker<S> {
    store: EntryStore<S>,
    entries: EntryList,
    draft: Draft,
    status: StatusLine,
    date_format: String,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load persisted entries and start with today's date in the draft
    pub fn open(store: EntryStore<S>, options: TrackerOptions) -> TrackerResult<Self> {
        let entries = store.load()?.unwrap_or_default();
        tracing::info!(key = %store.key(), count = entries.len(), "Tracker opened");

        Ok(Self {
            store,
            entries,
            draft: Draft::today(),
            status: StatusLine::new(options.status_clear_after),
            date_format: options.date_format,
        })
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.draft.weight = weight.into();
    }

    /// Current status message, empty when none
    pub fn status(&self) -> String {
        self.status.message()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<String> {
        self.status.subscribe()
    }

    /// Add the drafted measurement
    ///
    /// A rejected draft only updates the status line. An accepted one is
    /// inserted in date order and persisted; the weight field is cleared and
    /// the date field kept. Storage failures propagate after the entry is in
    /// memory.
    pub fn add_entry(&mut self) -> TrackerResult<AddOutcome> {
        let (weight, date) = match self.draft.validate() {
            Ok(parsed) => parsed,
            Err(reason) => {
                tracing::debug!(?reason, draft = ?self.draft, "Entry rejected");
                self.status.set(reason.to_string());
                return Ok(AddOutcome::Rejected(reason));
            }
        };

        let id = self.entries.next_id(Utc::now().timestamp_millis());
        let entry = Entry::new(id, weight, date);
        self.entries.insert(entry.clone());
        self.store.save(&self.entries)?;

        tracing::info!(id, weight, date = %entry.iso_date(), "Entry added");

        self.draft.weight.clear();
        self.status.flash(ENTRY_ADDED);

        Ok(AddOutcome::Added(entry))
    }

    pub fn stats(&self) -> Option<Stats> {
        Stats::from_entries(self.entries.as_slice())
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        chart::project(self.entries.as_slice(), &self.date_format)
    }

    /// Snapshot of everything the panel shows
    pub fn view(&self) -> TrackerView {
        TrackerView {
            status: self.status(),
            stats: self.stats(),
            chart: self.chart_points(),
        }
    }
}

impl<S> std::fmt::Debug for Tracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("entries", &self.entries)
            .field("draft", &self.draft)
            .field("status", &self.status)
            .finish()
    }
}
