//! Validator and aggregator behavior over synthetic season files.

use epl_model::SeasonLabel;
use epl_model::issue::{IssueSeverity, IssueType};
use epl_model::schema::{OPTIONAL_DIAGNOSTIC_COLUMNS, REQUIRED_CORE_COLUMNS};
use epl_validate::{
    FileIdentity, ValidationRun, check_season_file, validate_directory, write_report,
};
use tempfile::TempDir;

fn identity() -> FileIdentity {
    let season = SeasonLabel::from_file_name("season_1415.csv").unwrap();
    FileIdentity::new("season_1415.csv", &season)
}

fn full_header() -> Vec<String> {
    REQUIRED_CORE_COLUMNS
        .iter()
        .chain(OPTIONAL_DIAGNOSTIC_COLUMNS.iter())
        .map(|c| (*c).to_string())
        .collect()
}

fn header_without(excluded: &[&str]) -> Vec<String> {
    full_header()
        .into_iter()
        .filter(|c| !excluded.contains(&c.as_str()))
        .collect()
}

#[test]
fn complete_header_in_envelope_yields_no_issues() {
    let issues = check_season_file(&identity(), &full_header(), 380);
    assert!(issues.is_empty());
}

#[test]
fn missing_required_column_is_a_blocking_error() {
    let issues = check_season_file(&identity(), &header_without(&["AvgH"]), 390);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, IssueSeverity::Error);
    assert_eq!(issues[0].issue_type, IssueType::MissingRequiredColumn);
    assert_eq!(issues[0].column.as_deref(), Some("AvgH"));
    assert_eq!(issues[0].season, "2014_15");
}

#[test]
fn one_error_per_missing_required_column_no_duplicates() {
    for missing in [
        vec!["Date"],
        vec!["AvgH", "AvgD"],
        vec!["Date", "FTHG", "FTR"],
    ] {
        let issues = check_season_file(&identity(), &header_without(&missing), 380);
        assert_eq!(issues.len(), missing.len());
        let columns: Vec<&str> = issues
            .iter()
            .map(|i| i.column.as_deref().unwrap())
            .collect();
        for column in &missing {
            assert_eq!(columns.iter().filter(|c| *c == column).count(), 1);
        }
        assert!(
            issues
                .iter()
                .all(|i| i.issue_type == IssueType::MissingRequiredColumn)
        );
    }
}

#[test]
fn missing_optional_columns_warn_only() {
    let issues = check_season_file(&identity(), &header_without(&["HC", "AC"]), 400);
    assert_eq!(issues.len(), 2);
    for issue in &issues {
        assert_eq!(issue.severity, IssueSeverity::Warning);
        assert_eq!(issue.issue_type, IssueType::MissingOptionalDiagnosticColumn);
    }
    assert_eq!(issues[0].column.as_deref(), Some("HC"));
    assert_eq!(issues[1].column.as_deref(), Some("AC"));
}

#[test]
fn row_count_boundaries_are_inclusive() {
    for rows in [380, 400, 420] {
        assert!(check_season_file(&identity(), &full_header(), rows).is_empty());
    }
    for rows in [0, 379, 421] {
        let issues = check_season_file(&identity(), &full_header(), rows);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, IssueSeverity::Info);
        assert_eq!(issues[0].issue_type, IssueType::RowCountIssue);
        assert!(issues[0].column.is_none());
        assert!(issues[0].message.contains(&format!("observed: {rows}")));
    }
}

#[test]
fn rules_do_not_short_circuit() {
    let issues = check_season_file(&identity(), &header_without(&["AvgH", "HC"]), 100);
    let kinds: Vec<IssueType> = issues.iter().map(|i| i.issue_type).collect();
    assert_eq!(
        kinds,
        vec![
            IssueType::MissingRequiredColumn,
            IssueType::MissingOptionalDiagnosticColumn,
            IssueType::RowCountIssue,
        ]
    );
}

#[test]
fn warnings_still_count_the_file_as_passed() {
    let mut run = ValidationRun::new("2026-08-23 12:00:00");
    run.record_file(check_season_file(
        &identity(),
        &header_without(&["HC", "AC"]),
        400,
    ));
    let report = run.finish();
    assert_eq!(report.run_metadata.total_files_checked, 1);
    assert_eq!(report.run_metadata.files_passed, 1);
    assert_eq!(report.run_metadata.files_failed, 0);
    assert!(!report.error_exists());
}

#[test]
fn errors_fail_the_file_and_trip_the_gate() {
    let mut run = ValidationRun::new("2026-08-23 12:00:00");
    run.record_file(check_season_file(&identity(), &full_header(), 380));
    run.record_file(check_season_file(
        &identity(),
        &header_without(&["FTR"]),
        380,
    ));
    assert!(run.error_exists());
    let report = run.finish();
    assert_eq!(report.run_metadata.total_files_checked, 2);
    assert_eq!(report.run_metadata.files_passed, 1);
    assert_eq!(report.run_metadata.files_failed, 1);
}

fn write_season(dir: &TempDir, name: &str, header: &[String], rows: usize) {
    let mut content = header.join(",");
    content.push('\n');
    for _ in 0..rows {
        let row: Vec<&str> = header.iter().map(|_| "x").collect();
        content.push_str(&row.join(","));
        content.push('\n');
    }
    std::fs::write(dir.path().join(name), content).unwrap();
}

#[test]
fn directory_run_orders_issues_by_file_then_rule() {
    let dir = TempDir::new().unwrap();
    write_season(&dir, "season_1415.csv", &header_without(&["AvgH"]), 380);
    write_season(&dir, "season_1516.csv", &header_without(&["HC"]), 380);

    let report = validate_directory(dir.path()).unwrap();
    assert_eq!(report.run_metadata.total_files_checked, 2);
    assert_eq!(report.run_metadata.files_failed, 1);
    assert_eq!(report.issues.len(), 2);
    // Discovery order is file-name order; issues follow it.
    assert_eq!(report.issues[0].file, "season_1415.csv");
    assert_eq!(report.issues[0].issue_type, IssueType::MissingRequiredColumn);
    assert_eq!(report.issues[1].file, "season_1516.csv");
    assert_eq!(
        report.issues[1].issue_type,
        IssueType::MissingOptionalDiagnosticColumn
    );
}

#[test]
fn unlabelable_file_is_recorded_not_fatal() {
    let dir = TempDir::new().unwrap();
    write_season(&dir, "season_mystery.csv", &full_header(), 380);
    write_season(&dir, "season_1415.csv", &full_header(), 380);

    let report = validate_directory(dir.path()).unwrap();
    assert_eq!(report.run_metadata.total_files_checked, 2);
    assert_eq!(report.run_metadata.files_passed, 1);
    assert_eq!(report.run_metadata.files_failed, 1);
    let issue = &report.issues[0];
    assert_eq!(issue.file, "season_mystery.csv");
    assert_eq!(issue.issue_type, IssueType::MalformedFilename);
    assert_eq!(issue.season, "unknown");
}

#[test]
fn persisted_report_matches_the_contract() {
    let dir = TempDir::new().unwrap();
    write_season(&dir, "season_1415.csv", &header_without(&["AvgH"]), 100);

    let report = validate_directory(dir.path()).unwrap();
    let report_path = dir.path().join("validation_report.json");
    write_report(&report, &report_path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    let metadata = &json["run_metadata"];
    assert!(metadata["run_timestamp"].is_string());
    assert_eq!(metadata["total_files_checked"], 1);
    assert_eq!(metadata["files_passed"], 0);
    assert_eq!(metadata["files_failed"], 1);
    let issues = json["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["severity"], "ERROR");
    assert_eq!(issues[0]["issue_type"], "missing_required_column");
    assert_eq!(issues[0]["column"], "AvgH");
    assert_eq!(issues[0]["expected"], true);
    assert_eq!(issues[0]["actual"], false);
    assert_eq!(issues[1]["severity"], "INFO");
    assert_eq!(issues[1]["issue_type"], "row_count_issue");
}
