//! Projection of raw season tables onto the canonical record shape.

use std::fmt;

use epl_ingest::csv_table::CsvTable;
use epl_model::error::{ModelError, Result};
use epl_model::schema::{self, CANONICAL_COLUMNS, SEASON_COLUMN};
use epl_model::season::SeasonLabel;

/// How the normalizer establishes that a file is usable.
///
/// The validation stage and the normalizer share one required-column
/// predicate ([`schema::missing_required`]); this mode decides whether the
/// normalizer applies it itself or trusts that the caller already filtered
/// failed files using a persisted validation report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaCheckMode {
    /// Re-derive the required-column check from the schema registry.
    #[default]
    Recheck,
    /// Trust a prior validation pass; skip the upfront check.
    TrustReport,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    pub schema_check: SchemaCheckMode,
}

/// Non-fatal notice raised while normalizing one file. Returned on a side
/// channel instead of being printed, so callers decide what to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An optional diagnostic column was absent from the source and every
    /// row was filled with the missing marker.
    FilledMissingColumn { column: &'static str },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilledMissingColumn { column } => {
                write!(f, "optional column {column} absent; filled with missing marker")
            }
        }
    }
}

/// A table projected onto [`CANONICAL_COLUMNS`].
///
/// `None` cells mark values intentionally absent in the source, as opposed
/// to present-but-zero; they serialize to the empty marker only at write
/// time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFrame {
    pub rows: Vec<Vec<Option<String>>>,
}

impl NormalizedFrame {
    pub fn columns() -> &'static [&'static str] {
        &CANONICAL_COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Normalizes one season table: enforces required columns (per
/// `options.schema_check`), fills absent optional columns with the missing
/// marker, injects the season label, and projects onto the canonical column
/// order. Extra source columns are dropped.
///
/// # Errors
///
/// `SchemaError` in [`SchemaCheckMode::Recheck`] when any required core
/// column is absent. The caller skips the file and records the reason; the
/// batch continues.
pub fn normalize_table(
    table: &CsvTable,
    season: &SeasonLabel,
    file_name: &str,
    options: &NormalizeOptions,
) -> Result<(NormalizedFrame, Vec<Notice>)> {
    if options.schema_check == SchemaCheckMode::Recheck {
        let missing = schema::missing_required(&table.headers);
        if !missing.is_empty() {
            return Err(ModelError::SchemaError {
                file: file_name.to_string(),
                missing: missing.iter().map(|c| (*c).to_string()).collect(),
            });
        }
    }

    let notices: Vec<Notice> = schema::missing_optional(&table.headers)
        .into_iter()
        .map(|column| Notice::FilledMissingColumn { column })
        .collect();

    // Source column index per canonical column; None both for the injected
    // season column and for absent optional columns.
    let source_index: Vec<Option<usize>> = CANONICAL_COLUMNS
        .iter()
        .map(|column| table.headers.iter().position(|h| h == column))
        .collect();

    let mut rows = Vec::with_capacity(table.rows.len());
    for source_row in &table.rows {
        let mut row = Vec::with_capacity(CANONICAL_COLUMNS.len());
        for (column, index) in CANONICAL_COLUMNS.iter().zip(&source_index) {
            if *column == SEASON_COLUMN {
                row.push(Some(season.as_str().to_string()));
                continue;
            }
            let value = index
                .and_then(|i| source_row.get(i))
                .filter(|value| !value.is_empty())
                .cloned();
            row.push(value);
        }
        rows.push(row);
    }

    Ok((NormalizedFrame { rows }, notices))
}
