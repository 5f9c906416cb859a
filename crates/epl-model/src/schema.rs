//! Static schema registry for raw season files and the canonical dataset.
//!
//! Both the validation stage and the normalization stage decide "is this
//! file usable" through [`missing_required`], so the two stages cannot
//! drift apart in their definition of required.

use std::ops::RangeInclusive;

/// Columns identifying one match.
pub const CORE_IDENTIFIERS: [&str; 3] = ["Date", "HomeTeam", "AwayTeam"];

/// Pre-match average-odds columns (core signal).
pub const CORE_PREMATCH_ODDS: [&str; 3] = ["AvgH", "AvgD", "AvgA"];

/// Full-time outcome columns (targets).
pub const CORE_TARGETS: [&str; 3] = ["FTHG", "FTAG", "FTR"];

/// Columns whose absence makes a season file unusable.
pub const REQUIRED_CORE_COLUMNS: [&str; 9] = [
    // identifiers
    "Date",
    "HomeTeam",
    "AwayTeam",
    // pre-match odds
    "AvgH",
    "AvgD",
    "AvgA",
    // targets
    "FTHG",
    "FTAG",
    "FTR",
];

/// Post-match statistic columns; absence is tolerated and filled with the
/// missing marker.
pub const OPTIONAL_DIAGNOSTIC_COLUMNS: [&str; 15] = [
    // halftime info
    "HTHG",
    "HTAG",
    "HTR",
    // shots
    "HS",
    "AS",
    "HST",
    "AST",
    // set pieces & fouls
    "HC",
    "AC",
    "HF",
    "AF",
    // discipline
    "HY",
    "AY",
    "HR",
    "AR",
];

/// Name of the injected season column.
pub const SEASON_COLUMN: &str = "Season";

/// Exact column order of the merged canonical dataset.
pub const CANONICAL_COLUMNS: [&str; 25] = [
    // identifiers
    "Date",
    "Season",
    "HomeTeam",
    "AwayTeam",
    // pre-match market features
    "AvgH",
    "AvgD",
    "AvgA",
    // targets
    "FTHG",
    "FTAG",
    "FTR",
    // post-match diagnostic features
    "HTHG",
    "HTAG",
    "HTR",
    "HS",
    "AS",
    "HST",
    "AST",
    "HC",
    "AC",
    "HF",
    "AF",
    "HY",
    "AY",
    "HR",
    "AR",
];

/// Expected data-row envelope for one Premier League season (380 fixtures,
/// with slack for replays and source quirks).
pub const ROW_COUNT_RANGE: RangeInclusive<usize> = 380..=420;

fn contains(header: &[String], column: &str) -> bool {
    header.iter().any(|h| h == column)
}

/// Required core columns absent from `header`, in registry order.
pub fn missing_required(header: &[String]) -> Vec<&'static str> {
    REQUIRED_CORE_COLUMNS
        .iter()
        .copied()
        .filter(|column| !contains(header, column))
        .collect()
}

/// Optional diagnostic columns absent from `header`, in registry order.
pub fn missing_optional(header: &[String]) -> Vec<&'static str> {
    OPTIONAL_DIAGNOSTIC_COLUMNS
        .iter()
        .copied()
        .filter(|column| !contains(header, column))
        .collect()
}
