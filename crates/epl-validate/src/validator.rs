//! Per-file schema and cardinality checks.

use epl_model::issue::{Issue, IssueSeverity, IssueType};
use epl_model::schema::{self, ROW_COUNT_RANGE};
use epl_model::season::SeasonLabel;

/// Identity of one season file under validation.
#[derive(Debug, Clone)]
pub struct FileIdentity {
    pub file_name: String,
    pub season: String,
}

impl FileIdentity {
    pub fn new(file_name: impl Into<String>, season: &SeasonLabel) -> Self {
        Self {
            file_name: file_name.into(),
            season: season.as_str().to_string(),
        }
    }

    /// Identity for a file whose name yields no season label.
    pub fn unlabeled(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            season: "unknown".to_string(),
        }
    }
}

/// Evaluates every rule against one file's header and data-row count.
///
/// Rules are independent and never short-circuit; all applicable issues are
/// collected in one pass, ordered: required columns, optional columns, row
/// count.
pub fn check_season_file(identity: &FileIdentity, header: &[String], data_rows: usize) -> Vec<Issue> {
    let mut issues = Vec::new();

    for column in schema::missing_required(header) {
        issues.push(Issue::new(
            IssueSeverity::Error,
            &identity.season,
            &identity.file_name,
            IssueType::MissingRequiredColumn,
            Some(column),
            "Required column is missing",
        ));
    }

    for column in schema::missing_optional(header) {
        issues.push(Issue::new(
            IssueSeverity::Warning,
            &identity.season,
            &identity.file_name,
            IssueType::MissingOptionalDiagnosticColumn,
            Some(column),
            "Optional column for post-match diagnosis is missing",
        ));
    }

    if !ROW_COUNT_RANGE.contains(&data_rows) {
        issues.push(Issue::new(
            IssueSeverity::Info,
            &identity.season,
            &identity.file_name,
            IssueType::RowCountIssue,
            None,
            format!(
                "Row count outside expected range ({}-{} matches); observed: {}",
                ROW_COUNT_RANGE.start(),
                ROW_COUNT_RANGE.end(),
                data_rows
            ),
        ));
    }

    issues
}

/// True when at least one ERROR-severity issue is present.
pub fn has_error(issues: &[Issue]) -> bool {
    issues
        .iter()
        .any(|issue| issue.severity == IssueSeverity::Error)
}
