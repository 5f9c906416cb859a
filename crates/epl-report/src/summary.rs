//! Aggregates computed from a persisted validation report.
//!
//! This module reads the serialized report only; it never touches live
//! aggregator state, so it can audit a run after the fact.

use std::path::Path;

use anyhow::{Context, Result};

use epl_model::issue::{IssueSeverity, IssueType, ValidationReport};

/// Loads a previously persisted validation report.
pub fn load_report(path: &Path) -> Result<ValidationReport> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read validation report: {}", path.display()))?;
    serde_json::from_str(&json).context("parse validation report")
}

/// Issue counts per severity, zero-filled for absent severities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityBreakdown {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl SeverityBreakdown {
    pub fn from_report(report: &ValidationReport) -> Self {
        let mut breakdown = Self::default();
        for issue in &report.issues {
            match issue.severity {
                IssueSeverity::Error => breakdown.errors += 1,
                IssueSeverity::Warning => breakdown.warnings += 1,
                IssueSeverity::Info => breakdown.infos += 1,
            }
        }
        breakdown
    }

    pub fn total(self) -> usize {
        self.errors + self.warnings + self.infos
    }
}

/// One (issue type, severity) bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueTypeCount {
    pub issue_type: IssueType,
    pub severity: IssueSeverity,
    pub count: usize,
}

/// Issue counts by (type, severity), split into the blocking (ERROR) group
/// and the non-blocking (WARNING | INFO) group. Buckets keep the order of
/// first appearance in the report, so the breakdown is deterministic for a
/// given report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueTypeBreakdown {
    pub blocking: Vec<IssueTypeCount>,
    pub non_blocking: Vec<IssueTypeCount>,
}

impl IssueTypeBreakdown {
    pub fn from_report(report: &ValidationReport) -> Self {
        let mut buckets: Vec<IssueTypeCount> = Vec::new();
        for issue in &report.issues {
            match buckets
                .iter_mut()
                .find(|b| b.issue_type == issue.issue_type && b.severity == issue.severity)
            {
                Some(bucket) => bucket.count += 1,
                None => buckets.push(IssueTypeCount {
                    issue_type: issue.issue_type,
                    severity: issue.severity,
                    count: 1,
                }),
            }
        }
        let mut breakdown = Self::default();
        for bucket in buckets {
            if bucket.severity == IssueSeverity::Error {
                breakdown.blocking.push(bucket);
            } else {
                breakdown.non_blocking.push(bucket);
            }
        }
        breakdown
    }
}

/// Humanized issue-type label for prose output
/// (`missing_required_column` -> `Missing Required Column`).
pub fn issue_type_label(issue_type: IssueType) -> String {
    issue_type
        .as_str()
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use epl_model::issue::{Issue, RunMetadata};

    use super::*;

    fn report_with(issues: Vec<Issue>) -> ValidationReport {
        ValidationReport {
            run_metadata: RunMetadata::new("2026-08-23 12:00:00"),
            issues,
        }
    }

    fn issue(severity: IssueSeverity, issue_type: IssueType) -> Issue {
        Issue::new(severity, "2014_15", "season_1415.csv", issue_type, None, "")
    }

    #[test]
    fn severity_breakdown_zero_fills_absent_severities() {
        let report = report_with(vec![issue(
            IssueSeverity::Warning,
            IssueType::MissingOptionalDiagnosticColumn,
        )]);
        let breakdown = SeverityBreakdown::from_report(&report);
        assert_eq!(breakdown.errors, 0);
        assert_eq!(breakdown.warnings, 1);
        assert_eq!(breakdown.infos, 0);
        assert_eq!(breakdown.total(), 1);
    }

    #[test]
    fn type_breakdown_splits_blocking_from_non_blocking() {
        let report = report_with(vec![
            issue(IssueSeverity::Error, IssueType::MissingRequiredColumn),
            issue(
                IssueSeverity::Warning,
                IssueType::MissingOptionalDiagnosticColumn,
            ),
            issue(IssueSeverity::Error, IssueType::MissingRequiredColumn),
            issue(IssueSeverity::Info, IssueType::RowCountIssue),
        ]);
        let breakdown = IssueTypeBreakdown::from_report(&report);
        assert_eq!(breakdown.blocking.len(), 1);
        assert_eq!(breakdown.blocking[0].issue_type, IssueType::MissingRequiredColumn);
        assert_eq!(breakdown.blocking[0].count, 2);
        assert_eq!(breakdown.non_blocking.len(), 2);
        assert_eq!(
            breakdown.non_blocking[0].issue_type,
            IssueType::MissingOptionalDiagnosticColumn
        );
        assert_eq!(breakdown.non_blocking[1].issue_type, IssueType::RowCountIssue);
    }

    #[test]
    fn empty_report_yields_empty_breakdowns() {
        let report = report_with(Vec::new());
        assert_eq!(SeverityBreakdown::from_report(&report).total(), 0);
        let breakdown = IssueTypeBreakdown::from_report(&report);
        assert!(breakdown.blocking.is_empty());
        assert!(breakdown.non_blocking.is_empty());
    }

    #[test]
    fn labels_are_humanized() {
        assert_eq!(
            issue_type_label(IssueType::MissingRequiredColumn),
            "Missing Required Column"
        );
        assert_eq!(issue_type_label(IssueType::RowCountIssue), "Row Count Issue");
    }
}
