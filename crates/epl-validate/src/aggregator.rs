//! Run-level accumulation of validation findings.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info, warn};

use epl_ingest::csv_table::read_csv_preview;
use epl_ingest::discovery::{file_name_of, list_season_files};
use epl_model::issue::{Issue, IssueSeverity, IssueType, RunMetadata, ValidationReport};
use epl_model::season::SeasonLabel;

use crate::validator::{FileIdentity, check_season_file, has_error};

/// Timestamp format recorded in run metadata.
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Mutable accumulator for one validation run.
///
/// Constructed fresh per run with zeroed counters and an empty issue list;
/// issues are append-only and kept in file-processing order. Serialized
/// exactly once, at run end, via [`ValidationRun::finish`].
#[derive(Debug)]
pub struct ValidationRun {
    metadata: RunMetadata,
    issues: Vec<Issue>,
}

impl ValidationRun {
    pub fn new(run_timestamp: impl Into<String>) -> Self {
        Self {
            metadata: RunMetadata::new(run_timestamp),
            issues: Vec::new(),
        }
    }

    /// Accumulator stamped with the current local time.
    pub fn started_now() -> Self {
        Self::new(Local::now().format(RUN_TIMESTAMP_FORMAT).to_string())
    }

    /// Records one file's findings and updates the pass/fail counters.
    ///
    /// A file fails iff it produced at least one ERROR-severity issue;
    /// warnings and infos still count the file as passed.
    pub fn record_file(&mut self, issues: Vec<Issue>) {
        self.metadata.total_files_checked += 1;
        if has_error(&issues) {
            self.metadata.files_failed += 1;
        } else {
            self.metadata.files_passed += 1;
        }
        self.issues.extend(issues);
    }

    /// Run-level gate: any ERROR-severity issue so far.
    pub fn error_exists(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == IssueSeverity::Error)
    }

    pub fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    pub fn finish(self) -> ValidationReport {
        ValidationReport {
            run_metadata: self.metadata,
            issues: self.issues,
        }
    }
}

/// Validates every season file in `dir`, in discovery order, and returns
/// the full report.
pub fn validate_directory(dir: &Path) -> Result<ValidationReport> {
    let mut run = ValidationRun::started_now();
    validate_directory_with(dir, &mut run)?;
    Ok(run.finish())
}

/// Validates every season file in `dir` into an existing accumulator.
///
/// A file whose name yields no season label is recorded as a failed file
/// with a single ERROR issue; it never aborts the run. Each file is read
/// to completion before the next begins.
pub fn validate_directory_with(dir: &Path, run: &mut ValidationRun) -> Result<()> {
    let files = list_season_files(dir)?;
    for path in &files {
        let file_name = file_name_of(path);
        let identity = match SeasonLabel::from_file_name(&file_name) {
            Ok(season) => FileIdentity::new(&file_name, &season),
            Err(error) => {
                warn!(file = %file_name, %error, "cannot derive season label");
                let identity = FileIdentity::unlabeled(&file_name);
                run.record_file(vec![Issue::new(
                    IssueSeverity::Error,
                    &identity.season,
                    &identity.file_name,
                    IssueType::MalformedFilename,
                    None,
                    error.to_string(),
                )]);
                continue;
            }
        };
        let preview = read_csv_preview(path)
            .with_context(|| format!("read season file {}", path.display()))?;
        let issues = check_season_file(&identity, &preview.headers, preview.data_rows);
        debug!(
            file = %file_name,
            season = %identity.season,
            rows = preview.data_rows,
            issues = issues.len(),
            "validated season file"
        );
        run.record_file(issues);
    }
    info!(
        files = run.metadata().total_files_checked,
        failed = run.metadata().files_failed,
        "validation complete"
    );
    Ok(())
}

/// Persists the report as pretty-printed JSON. This is the durable artifact
/// consumed by the summary reporter.
pub fn write_report(report: &ValidationReport, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("serialize validation report")?;
    std::fs::write(path, json)
        .with_context(|| format!("write validation report: {}", path.display()))?;
    Ok(())
}
