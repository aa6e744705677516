//! End-to-end: entries added through a tracker survive a restart.

use std::time::Duration;
use tempfile::tempdir;
use weight_tracker::storage::{EntryStore, FileStore, KeyValueStore};
use weight_tracker::tracker::{AddOutcome, Panel, TextChart, Tracker, TrackerOptions};
use weight_tracker::{export_entries, Config, ExportFormat, StorageError, TrackerError};

fn open(dir: &std::path::Path) -> Tracker<FileStore> {
    let store = EntryStore::new(FileStore::open(dir).unwrap());
    Tracker::open(store, TrackerOptions::default()).unwrap()
}

#[tokio::test]
async fn test_entries_survive_reopen() {
    let dir = tempdir().unwrap();

    {
        let mut tracker = open(dir.path());
        for (date, weight) in [("2024-01-08", "78.5"), ("2024-01-01", "80")] {
            tracker.set_date(date);
            tracker.set_weight(weight);
            assert!(matches!(tracker.add_entry().unwrap(), AddOutcome::Added(_)));
        }
    }

    let tracker = open(dir.path());
    let dates: Vec<String> = tracker.entries().iter().map(|e| e.iso_date()).collect();
    assert_eq!(dates, vec!["2024-01-01", "2024-01-08"]);

    let stats = tracker.stats().unwrap();
    assert_eq!((stats.start, stats.current, stats.change), (80.0, 78.5, -1.5));

    let raw = std::fs::read_to_string(dir.path().join("weightData.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["date"], "2024-01-01");
    assert_eq!(json[0]["weight"], 80.0);
    assert!(json[0]["id"].is_i64());
}

#[tokio::test]
async fn test_corrupt_file_fails_open() {
    let dir = tempdir().unwrap();
    FileStore::open(dir.path())
        .unwrap()
        .set_item("weightData", "[{\"id\": 1,")
        .unwrap();

    let store = EntryStore::new(FileStore::open(dir.path()).unwrap());
    let result = Tracker::open(store, TrackerOptions::default());
    assert!(matches!(
        result,
        Err(TrackerError::Storage(StorageError::Serialization(_)))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_configured_clear_delay() {
    let dir = tempdir().unwrap();
    let config = Config::parse("[status]\nclear_after_ms = 500\n").unwrap();
    let store = EntryStore::new(FileStore::open(dir.path()).unwrap());
    let mut tracker = Tracker::open(store, config.tracker_options()).unwrap();

    tracker.set_weight("72.4");
    tracker.add_entry().unwrap();
    assert_eq!(tracker.status(), "Entry added!");

    tokio::time::sleep(Duration::from_millis(501)).await;
    tokio::task::yield_now().await;
    assert_eq!(tracker.status(), "");
}

#[tokio::test]
async fn test_panel_and_export_follow_entries() {
    let dir = tempdir().unwrap();
    let mut tracker = open(dir.path());

    let chart = TextChart::default();
    let empty = Panel::new(&chart, "kg").render(&tracker.view());
    assert!(!empty.contains("Weight Chart"));

    tracker.set_date("2024-02-01");
    tracker.set_weight("70.2");
    tracker.add_entry().unwrap();

    let filled = Panel::new(&chart, "kg").render(&tracker.view());
    assert!(filled.contains("Weight Chart"));
    assert!(filled.contains("2/1/2024"));

    let csv = export_entries(tracker.entries(), ExportFormat::Csv).unwrap();
    assert!(csv.ends_with("2024-02-01,70.2\n"));
}
