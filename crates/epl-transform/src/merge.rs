//! Concatenation and persistence of normalized frames.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use epl_model::error::ModelError;

use crate::normalize::NormalizedFrame;

/// Serialized form of an intentionally absent value.
pub const MISSING_MARKER: &str = "";

/// Concatenates per-file frames preserving both file order and intra-file
/// row order. Rows carry no per-source identifier; position in the merged
/// frame is the only index.
///
/// # Errors
///
/// `EmptyDataset` when zero files survived normalization.
pub fn merge_frames(frames: Vec<NormalizedFrame>) -> std::result::Result<NormalizedFrame, ModelError> {
    if frames.is_empty() {
        return Err(ModelError::EmptyDataset);
    }
    let mut rows = Vec::with_capacity(frames.iter().map(NormalizedFrame::len).sum());
    for frame in frames {
        rows.extend(frame.rows);
    }
    Ok(NormalizedFrame { rows })
}

/// Writes the merged dataset once, as a full overwrite of any prior output.
/// Header equals the canonical column order; `None` cells become the
/// missing marker.
pub fn write_dataset(frame: &NormalizedFrame, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create dataset file: {}", path.display()))?;
    writer
        .write_record(NormalizedFrame::columns())
        .context("write dataset header")?;
    for row in &frame.rows {
        writer
            .write_record(row.iter().map(|cell| cell.as_deref().unwrap_or(MISSING_MARKER)))
            .context("write dataset row")?;
    }
    writer.flush().context("flush dataset file")?;
    info!(path = %path.display(), rows = frame.len(), "wrote canonical dataset");
    Ok(())
}
