use anyhow::Result;
use comfy_table::{Cell, Table};

use epl_cli::pipeline::{BuildGate, run_build, run_summary, run_validate};
use epl_model::schema::{CANONICAL_COLUMNS, REQUIRED_CORE_COLUMNS, SEASON_COLUMN};

use crate::cli::{BuildArgs, SummaryArgs, ValidateArgs};
use crate::console;

/// Returns whether the validation gate tripped (non-zero exit).
pub fn run_validate_command(args: &ValidateArgs) -> Result<bool> {
    let outcome = run_validate(&args.data_dir, &args.report)?;
    console::print_validation(&outcome);
    Ok(outcome.gate_tripped)
}

pub fn run_build_command(args: &BuildArgs) -> Result<()> {
    let gate = match &args.trust_report {
        Some(path) => BuildGate::TrustReport(path.clone()),
        None => BuildGate::Recheck,
    };
    let outcome = run_build(&args.data_dir, &args.output, &gate)?;
    console::print_build(&outcome);
    Ok(())
}

pub fn run_summary_command(args: &SummaryArgs) -> Result<()> {
    let outcome = run_summary(&args.report, args.output.as_deref())?;
    match &args.output {
        Some(path) => println!("Summary: {}", path.display()),
        None => console::print_summary(&outcome),
    }
    Ok(())
}

pub fn run_columns_command() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Role"]);
    console::apply_table_style(&mut table);
    for column in CANONICAL_COLUMNS {
        let role = if column == SEASON_COLUMN {
            "injected (derived from file name)"
        } else if REQUIRED_CORE_COLUMNS.contains(&column) {
            "required core"
        } else {
            "optional diagnostic"
        };
        table.add_row(vec![Cell::new(column), Cell::new(role)]);
    }
    println!("{table}");
    Ok(())
}
