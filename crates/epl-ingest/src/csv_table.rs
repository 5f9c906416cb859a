//! Raw season CSV reading.
//!
//! The file handle is held only for the duration of one read; both readers
//! return owned data so callers never keep a file open across files.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// One raw season table: normalized header plus trimmed string cells.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Header and data-row count only; what the validation pass needs.
#[derive(Debug, Clone)]
pub struct CsvPreview {
    pub headers: Vec<String>,
    pub data_rows: usize,
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

fn reader_for(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Reads a full season table, padding short rows to header width and
/// skipping rows that are entirely empty (a trailing-line quirk of the
/// upstream source).
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = reader_for(path)?;
    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if headers.is_empty() {
            headers = record.iter().map(normalize_header).collect();
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        rows.push(row);
    }
    debug!(path = %path.display(), columns = headers.len(), rows = rows.len(), "read season table");
    Ok(CsvTable { headers, rows })
}

/// Reads only the header and counts data rows, without materializing cells.
pub fn read_csv_preview(path: &Path) -> Result<CsvPreview> {
    let mut reader = reader_for(path)?;
    let mut headers: Vec<String> = Vec::new();
    let mut data_rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if headers.is_empty() {
            headers = record.iter().map(normalize_header).collect();
        } else {
            data_rows += 1;
        }
    }
    Ok(CsvPreview { headers, data_rows })
}
