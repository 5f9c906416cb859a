//! Orchestration of the validate, build, and summary stages.
//!
//! Each stage processes the batch single-threaded, one file to completion
//! before the next; per-file failures become report entries or skip
//! records, and only a whole-batch condition aborts a run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use epl_ingest::csv_table::read_csv_table;
use epl_ingest::discovery::{file_name_of, list_season_files};
use epl_model::{ModelError, SeasonLabel, ValidationReport};
use epl_report::{
    IssueTypeBreakdown, SeverityBreakdown, load_report, render_markdown,
};
use epl_transform::{
    NormalizeOptions, Notice, SchemaCheckMode, merge_frames, normalize_table, write_dataset,
};
use epl_validate::{validate_directory, write_report};

/// Result of one validation stage run.
#[derive(Debug)]
pub struct ValidateOutcome {
    pub report: ValidationReport,
    pub report_path: PathBuf,
    /// True when any ERROR-severity issue exists; advisory for downstream
    /// tooling, surfaced as a non-zero exit code.
    pub gate_tripped: bool,
}

/// Validates every season file in `data_dir` and persists the report.
pub fn run_validate(data_dir: &Path, report_path: &Path) -> Result<ValidateOutcome> {
    let span = info_span!("validate", data_dir = %data_dir.display());
    let _guard = span.enter();
    let report = validate_directory(data_dir)?;
    write_report(&report, report_path)?;
    let gate_tripped = report.error_exists();
    info!(
        report = %report_path.display(),
        gate_tripped,
        "validation report written"
    );
    Ok(ValidateOutcome {
        report,
        report_path: report_path.to_path_buf(),
        gate_tripped,
    })
}

/// One file excluded from the merged dataset, with its reason.
#[derive(Debug)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// Result of one build stage run.
#[derive(Debug)]
pub struct BuildOutcome {
    pub output_path: PathBuf,
    pub files_used: usize,
    pub rows_written: usize,
    pub skipped: Vec<SkippedFile>,
    /// Non-fatal normalization notices, tagged with the file they came from.
    pub notices: Vec<(String, Notice)>,
}

/// How the build stage decides that a file is usable.
#[derive(Debug, Clone, Default)]
pub enum BuildGate {
    /// Re-derive the required-column check per file.
    #[default]
    Recheck,
    /// Trust a persisted validation report: exclude the files it marked
    /// failed and disable the normalizer's own schema check.
    TrustReport(PathBuf),
}

/// Normalizes and merges every usable season file into the canonical
/// dataset, written once as a full overwrite.
///
/// # Errors
///
/// Fails with `EmptyDataset` when no file survives normalization; no
/// output artifact is written in that case.
pub fn run_build(data_dir: &Path, output_path: &Path, gate: &BuildGate) -> Result<BuildOutcome> {
    let span = info_span!("build", data_dir = %data_dir.display());
    let _guard = span.enter();

    let (options, excluded) = match gate {
        BuildGate::Recheck => (NormalizeOptions::default(), Vec::new()),
        BuildGate::TrustReport(report_path) => {
            let report = load_report(report_path)?;
            let excluded: Vec<String> = report
                .failed_files()
                .iter()
                .map(|file| (*file).to_string())
                .collect();
            let options = NormalizeOptions {
                schema_check: SchemaCheckMode::TrustReport,
            };
            (options, excluded)
        }
    };

    let mut frames = Vec::new();
    let mut skipped = Vec::new();
    let mut notices = Vec::new();
    for path in list_season_files(data_dir)? {
        let file_name = file_name_of(&path);
        if excluded.contains(&file_name) {
            skipped.push(SkippedFile {
                file: file_name,
                reason: "failed validation per trusted report".to_string(),
            });
            continue;
        }
        let season = match SeasonLabel::from_file_name(&file_name) {
            Ok(season) => season,
            Err(error) => {
                warn!(file = %file_name, %error, "skipping season file");
                skipped.push(SkippedFile {
                    file: file_name,
                    reason: error.to_string(),
                });
                continue;
            }
        };
        let table = read_csv_table(&path)
            .with_context(|| format!("read season file {}", path.display()))?;
        match normalize_table(&table, &season, &file_name, &options) {
            Ok((frame, file_notices)) => {
                notices.extend(
                    file_notices
                        .into_iter()
                        .map(|notice| (file_name.clone(), notice)),
                );
                frames.push(frame);
            }
            Err(error @ ModelError::SchemaError { .. }) => {
                warn!(file = %file_name, %error, "skipping season file");
                skipped.push(SkippedFile {
                    file: file_name,
                    reason: error.to_string(),
                });
            }
            Err(error) => return Err(error.into()),
        }
    }

    let files_used = frames.len();
    let merged = merge_frames(frames)?;
    write_dataset(&merged, output_path)?;
    info!(
        rows = merged.len(),
        files = files_used,
        skipped = skipped.len(),
        "build complete"
    );
    Ok(BuildOutcome {
        output_path: output_path.to_path_buf(),
        files_used,
        rows_written: merged.len(),
        skipped,
        notices,
    })
}

/// Result of one summary stage run.
#[derive(Debug)]
pub struct SummaryOutcome {
    pub report: ValidationReport,
    pub severity: SeverityBreakdown,
    pub types: IssueTypeBreakdown,
    pub markdown: String,
}

/// Computes breakdowns over a persisted report and renders the Markdown
/// audit summary, optionally writing it to `output_path`.
pub fn run_summary(report_path: &Path, output_path: Option<&Path>) -> Result<SummaryOutcome> {
    let report = load_report(report_path)?;
    let severity = SeverityBreakdown::from_report(&report);
    let types = IssueTypeBreakdown::from_report(&report);
    let markdown = render_markdown(&report);
    if let Some(path) = output_path {
        std::fs::write(path, &markdown)
            .with_context(|| format!("write validation summary: {}", path.display()))?;
        info!(summary = %path.display(), "validation summary written");
    }
    Ok(SummaryOutcome {
        report,
        severity,
        types,
        markdown,
    })
}
