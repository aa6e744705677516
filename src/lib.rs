//! # Weight Tracker
//!
//! Log body-weight measurements by date, keep them in a local key-value
//! store, and follow the trend with summary statistics and a line chart.
//!
//! ## Modules
//!
//! - [`storage`]: entry types and key-value persistence
//! - [`tracker`]: add-entry, status line, statistics and chart projection
//! - [`export`]: CSV / JSON export
//! - [`shell`]: interactive session
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use weight_tracker::storage::{EntryStore, MemoryStore};
//! use weight_tracker::tracker::{AddOutcome, Tracker, TrackerOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = EntryStore::new(MemoryStore::new());
//!     let mut tracker = Tracker::open(store, TrackerOptions::default())?;
//!
//!     tracker.set_date("2024-01-01");
//!     tracker.set_weight("80");
//!     assert!(matches!(tracker.add_entry()?, AddOutcome::Added(_)));
//!
//!     tracker.set_date("2024-01-08");
//!     tracker.set_weight("78.5");
//!     tracker.add_entry()?;
//!
//!     let stats = tracker.stats().unwrap();
//!     assert_eq!(stats.change, -1.5);
//!     assert_eq!(tracker.status(), "Entry added!");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod export;
pub mod shell;
pub mod storage;
pub mod tracker;

// Re-export top-level types for convenience
pub use storage::{
    Entry, EntryList, EntryStore, FileStore, KeyValueStore, MemoryStore, StorageError,
    StorageResult,
};

pub use tracker::{
    AddOutcome, ChartPoint, ChartRenderer, Panel, Stats, StatusLine, TextChart, Tracker,
    TrackerError, TrackerOptions, TrackerView, ValidationError,
};

pub use export::{export_entries, ExportFormat};

pub use config::{
    Config, ConfigError, ConfigLoad, DisplayConfig, LoggingConfig, StatusConfig,
    StorageConfig,
};
