//! Entry export
//!
//! Writes the entry list as CSV, a JSON array, or newline-delimited JSON.

use crate::storage::{EntryList, StorageError, StorageResult};
use serde::Serialize;
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Ndjson,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Ndjson => "ndjson",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "ndjson" | "jsonl" => Ok(ExportFormat::Ndjson),
            other => Err(format!("Unknown export format: {}. Use: csv, json, ndjson", other)),
        }
    }
}

#[derive(Serialize)]
struct Row {
    id: i64,
    date: String,
    weight: f64,
}

/// Render entries in date order
pub fn export_entries(entries: &EntryList, format: ExportFormat) -> StorageResult<String> {
    let rows = entries.iter().map(|e| Row {
        id: e.id,
        date: e.iso_date(),
        weight: e.weight,
    });

    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            if entries.is_empty() {
                writer
                    .write_record(["id", "date", "weight"])
                    .map_err(|e| StorageError::Serialization(e.to_string()))?;
            }
            for row in rows {
                writer
                    .serialize(row)
                    .map_err(|e| StorageError::Serialization(e.to_string()))?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| StorageError::Serialization(e.to_string()))?;
            String::from_utf8(bytes).map_err(|e| StorageError::Serialization(e.to_string()))
        }
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&rows.collect::<Vec<_>>())?),
        ExportFormat::Ndjson => {
            let mut out = String::new();
            for row in rows {
                out.push_str(&serde_json::to_string(&row)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}
