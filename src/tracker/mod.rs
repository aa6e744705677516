//! Weight Tracker core
//!
//! - **state**: `Tracker`, the entry list plus form draft and add-entry
//! - **draft**: form fields and their validation
//! - **status**: the self-clearing status message
//! - **stats**: start / current / change
//! - **chart**: chart points and the text renderer
//! - **view**: derived snapshot and its text panel
//!
//! # Flow
//!
//! ```text
//! open: store → EntryList, draft.date = today
//! add:  draft → validate → insert + sort → save → status "Entry added!" (clears after 3s)
//! view: EntryList → Stats + ChartPoints
//! ```

pub mod chart;
pub mod draft;
pub mod error;
pub mod state;
pub mod stats;
pub mod status;
pub mod view;

pub use chart::{ChartPoint, ChartRenderer, TextChart, DEFAULT_DATE_FORMAT};
pub use draft::Draft;
pub use error::{TrackerError, TrackerResult, ValidationError};
pub use state::{AddOutcome, Tracker, TrackerOptions, ENTRY_ADDED};
pub use stats::Stats;
pub use status::{StatusLine, DEFAULT_CLEAR_AFTER};
pub use view::{Panel, TrackerView};
