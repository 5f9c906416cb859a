//! CLI argument definitions for the EPL match-data pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "epl-pipeline",
    version,
    about = "EPL match-data pipeline - validate and normalize raw season files",
    long_about = "Validate raw Premier League season CSVs against the expected schema,\n\
                  build the merged canonical dataset, and produce audit summaries."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate raw season files and persist the validation report.
    Validate(ValidateArgs),

    /// Normalize and merge season files into the canonical dataset.
    Build(BuildArgs),

    /// Render the audit summary from a persisted validation report.
    Summary(SummaryArgs),

    /// List the canonical dataset columns.
    Columns,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Directory containing raw season CSV files.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Where to write the JSON validation report.
    #[arg(
        long = "report",
        value_name = "PATH",
        default_value = "validation_report.json"
    )]
    pub report: PathBuf,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Directory containing raw season CSV files.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Where to write the merged canonical dataset.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "epl_matches_processed.csv"
    )]
    pub output: PathBuf,

    /// Trust a persisted validation report instead of rechecking required
    /// columns per file.
    ///
    /// Files the report marked as failed are excluded up front and the
    /// normalizer skips its own schema check. Without this flag every
    /// file is rechecked against the schema registry.
    #[arg(long = "trust-report", value_name = "PATH")]
    pub trust_report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Path to a persisted JSON validation report.
    #[arg(value_name = "REPORT")]
    pub report: PathBuf,

    /// Write the Markdown summary here instead of printing it.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
