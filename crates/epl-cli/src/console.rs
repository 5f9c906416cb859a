//! Console rendering of stage outcomes.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use epl_cli::pipeline::{BuildOutcome, SummaryOutcome, ValidateOutcome};
use epl_model::issue::{Issue, IssueSeverity};
use epl_report::issue_type_label;

pub fn print_validation(outcome: &ValidateOutcome) {
    let metadata = &outcome.report.run_metadata;
    println!("Run timestamp: {}", metadata.run_timestamp);
    println!("Report: {}", outcome.report_path.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Files checked"),
        header_cell("Passed"),
        header_cell("Failed"),
        header_cell("Errors"),
        header_cell("Warnings"),
        header_cell("Infos"),
    ]);
    apply_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(metadata.total_files_checked),
        Cell::new(metadata.files_passed),
        count_cell(metadata.files_failed as usize, Color::Red),
        count_cell(
            outcome.report.count_by_severity(IssueSeverity::Error),
            Color::Red,
        ),
        count_cell(
            outcome.report.count_by_severity(IssueSeverity::Warning),
            Color::Yellow,
        ),
        count_cell(
            outcome.report.count_by_severity(IssueSeverity::Info),
            Color::Blue,
        ),
    ]);
    println!("{table}");

    print_issue_table(&outcome.report.issues);

    if outcome.gate_tripped {
        eprintln!(
            "Validation failed: {}/{} files contain ERROR-level issues. Build step blocked.",
            metadata.files_failed, metadata.total_files_checked
        );
    } else {
        println!("Validation passed. Proceed to build processed dataset.");
    }
}

fn print_issue_table(issues: &[Issue]) {
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Season"),
        header_cell("File"),
        header_cell("Issue"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for issue in issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(&issue.season),
            Cell::new(&issue.file),
            Cell::new(issue_type_label(issue.issue_type)),
            match &issue.column {
                Some(column) => Cell::new(column),
                None => dim_cell("-"),
            },
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn print_build(outcome: &BuildOutcome) {
    println!("Dataset: {}", outcome.output_path.display());
    println!(
        "Rows written: {} (from {} files)",
        outcome.rows_written, outcome.files_used
    );
    for (file, notice) in &outcome.notices {
        println!("Notice: {file}: {notice}");
    }
    for skip in &outcome.skipped {
        eprintln!("Skipped {}: {}", skip.file, skip.reason);
    }
}

pub fn print_summary(outcome: &SummaryOutcome) {
    print!("{}", outcome.markdown);
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
        IssueSeverity::Info => Cell::new("INFO").fg(Color::Blue),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
