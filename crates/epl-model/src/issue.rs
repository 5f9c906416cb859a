//! Validation findings and the persisted report contract.
//!
//! The serialized shape of [`ValidationReport`] is the sole interface
//! between the validation run and the summary reporter. Treat field names
//! and enum spellings as stable.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

impl IssueSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    MissingRequiredColumn,
    MissingOptionalDiagnosticColumn,
    RowCountIssue,
    MalformedFilename,
}

impl IssueType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingRequiredColumn => "missing_required_column",
            Self::MissingOptionalDiagnosticColumn => "missing_optional_diagnostic_column",
            Self::RowCountIssue => "row_count_issue",
            Self::MalformedFilename => "malformed_filename",
        }
    }
}

/// One validation finding. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub severity: IssueSeverity,
    /// Derived season label, or `"unknown"` when no label could be derived.
    pub season: String,
    pub file: String,
    pub issue_type: IssueType,
    /// Column the finding refers to; absent for row-count and filename issues.
    pub column: Option<String>,
    pub expected: bool,
    pub actual: bool,
    pub message: String,
}

impl Issue {
    pub fn new(
        severity: IssueSeverity,
        season: &str,
        file: &str,
        issue_type: IssueType,
        column: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            season: season.to_string(),
            file: file.to_string(),
            issue_type,
            column: column.map(str::to_string),
            expected: true,
            actual: false,
            message: message.into(),
        }
    }
}

/// Counters for a single validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub run_timestamp: String,
    pub total_files_checked: u32,
    pub files_passed: u32,
    pub files_failed: u32,
}

impl RunMetadata {
    pub fn new(run_timestamp: impl Into<String>) -> Self {
        Self {
            run_timestamp: run_timestamp.into(),
            total_files_checked: 0,
            files_passed: 0,
            files_failed: 0,
        }
    }
}

/// Run metadata plus the ordered issue list for one validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub run_metadata: RunMetadata,
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// Run-level gate: true when any ERROR-severity issue exists.
    pub fn error_exists(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == IssueSeverity::Error)
    }

    pub fn count_by_severity(&self, severity: IssueSeverity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }

    /// File names with at least one ERROR-severity issue, in first-seen order.
    pub fn failed_files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = Vec::new();
        for issue in &self.issues {
            if issue.severity == IssueSeverity::Error && !files.contains(&issue.file.as_str()) {
                files.push(&issue.file);
            }
        }
        files
    }
}
