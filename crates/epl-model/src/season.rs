//! Season labels derived from file names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Normalized season identifier of the form `YYYY_YY` (e.g. `2014_15`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonLabel(String);

impl SeasonLabel {
    /// Derive a label from a season file name.
    ///
    /// The first maximal run of decimal digits in the name is interpreted
    /// as two concatenated 2-digit year suffixes, so `season_1415.csv`
    /// yields `2014_15`. Pure function of the file name.
    ///
    /// # Errors
    ///
    /// `MalformedFilename` when the name contains no digits, or the digit
    /// run cannot be split into two 2-digit fragments.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let digits = first_digit_run(file_name).ok_or_else(|| ModelError::MalformedFilename {
            file: file_name.to_string(),
        })?;
        if digits.len() != 4 {
            return Err(ModelError::MalformedFilename {
                file: file_name.to_string(),
            });
        }
        Ok(Self(format!("20{}_{}", &digits[..2], &digits[2..])))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn first_digit_run(name: &str) -> Option<&str> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let run = &name[start..];
    let end = run
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(run.len());
    Some(&run[..end])
}

/// Wire code used by the upstream source for the season starting in
/// `start_year` (`2014` -> `"1415"`).
pub fn season_code(start_year: u16) -> String {
    format!("{:02}{:02}", start_year % 100, (start_year + 1) % 100)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn derives_label_from_conventional_name() {
        let label = SeasonLabel::from_file_name("season_1415.csv").unwrap();
        assert_eq!(label.as_str(), "2014_15");
    }

    #[test]
    fn uses_first_digit_run_only() {
        let label = SeasonLabel::from_file_name("E0_2021_backup7.csv").unwrap();
        assert_eq!(label.as_str(), "2020_21");
    }

    #[test]
    fn same_digits_yield_same_label() {
        let a = SeasonLabel::from_file_name("season_1718.csv").unwrap();
        let b = SeasonLabel::from_file_name("premier_league_1718_final.csv").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_names_without_digits() {
        assert!(SeasonLabel::from_file_name("season_unknown.csv").is_err());
    }

    #[test]
    fn rejects_digit_runs_that_are_not_two_year_suffixes() {
        assert!(SeasonLabel::from_file_name("season_141.csv").is_err());
        assert!(SeasonLabel::from_file_name("season_14155.csv").is_err());
    }

    #[test]
    fn season_code_round_trips_through_label() {
        let name = format!("season_{}.csv", season_code(2014));
        let label = SeasonLabel::from_file_name(&name).unwrap();
        assert_eq!(label.as_str(), "2014_15");
    }

    #[test]
    fn season_code_wraps_centuries() {
        assert_eq!(season_code(1999), "9900");
        assert_eq!(season_code(2024), "2425");
    }

    proptest! {
        #[test]
        fn label_always_matches_expected_shape(start in 0u8..=99, end in 0u8..=99) {
            let name = format!("season_{start:02}{end:02}.csv");
            let label = SeasonLabel::from_file_name(&name).unwrap();
            let label = label.as_str();
            prop_assert_eq!(label.len(), 7);
            prop_assert_eq!(&label[..2], "20");
            prop_assert_eq!(label.as_bytes()[4], b'_');
            prop_assert!(label[..4].bytes().all(|b| b.is_ascii_digit()));
            prop_assert!(label[5..].bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
