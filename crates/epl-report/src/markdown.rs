//! Markdown rendering of the audit summary. Pure formatting over the
//! aggregates computed in [`crate::summary`].

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use epl_model::issue::ValidationReport;

use crate::summary::{IssueTypeBreakdown, IssueTypeCount, SeverityBreakdown, issue_type_label};

/// Renders the audit summary for one validation run.
pub fn render_markdown(report: &ValidationReport) -> String {
    let severity = SeverityBreakdown::from_report(report);
    let types = IssueTypeBreakdown::from_report(report);
    let metadata = &report.run_metadata;

    let mut out = String::new();
    out.push_str("# EPL Raw Data Validation Summary\n\n");

    out.push_str("## Run Info\n\n");
    let _ = writeln!(out, "- Run timestamp: {}", metadata.run_timestamp);
    let _ = writeln!(out, "- Files checked: {}", metadata.total_files_checked);
    let _ = writeln!(out, "- Files passed: {}", metadata.files_passed);
    let _ = writeln!(out, "- Files failed: {}", metadata.files_failed);
    out.push('\n');

    out.push_str("## Validation Result\n\n");
    if report.error_exists() {
        out.push_str("**Validation FAILED**\nBuild step blocked due to ERROR-level issues.\n\n");
    } else {
        out.push_str("**Validation PASSED**.\nProceed to build processed dataset.\n\n");
    }

    out.push_str("## Issue Breakdown\n\n");
    let _ = writeln!(out, "- ERROR: {}", severity.errors);
    let _ = writeln!(out, "- WARNING: {}", severity.warnings);
    let _ = writeln!(out, "- INFO: {}", severity.infos);
    out.push('\n');

    out.push_str("## Top Failure Reasons\n\n");
    render_group(
        &mut out,
        "### Blocking Failure Reasons (ERROR)",
        &types.blocking,
    );
    render_group(
        &mut out,
        "### Non-Blocking Issues (WARNING | INFO)",
        &types.non_blocking,
    );

    out
}

fn render_group(out: &mut String, heading: &str, buckets: &[IssueTypeCount]) {
    out.push_str(heading);
    out.push_str("\n\n");
    if buckets.is_empty() {
        out.push_str("_No issues found._\n\n");
        return;
    }
    for bucket in buckets {
        let _ = writeln!(out, "- {}: {}", issue_type_label(bucket.issue_type), bucket.count);
    }
    out.push('\n');
}

/// Writes the rendered summary, replacing any previous one.
pub fn write_summary(report: &ValidationReport, path: &Path) -> Result<()> {
    std::fs::write(path, render_markdown(report))
        .with_context(|| format!("write validation summary: {}", path.display()))?;
    Ok(())
}
