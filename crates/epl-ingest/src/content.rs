//! Sanity checks applied to raw downloaded bytes before a season file is
//! persisted. Catches the upstream source answering with an error page or
//! a truncated payload.

use thiserror::Error;

/// Minimum plausible size of a full season file.
const MIN_CONTENT_BYTES: usize = 5_000;

/// Newline-count envelope accepted at download time. Wider than the
/// per-season validation envelope: a truncated file should be rejected
/// here, but a short season is a validation finding, not a download error.
const DOWNLOAD_ROW_RANGE: std::ops::RangeInclusive<usize> = 300..=420;

/// Reason a downloaded payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentIssue {
    #[error("payload looks like an HTML document, not a CSV")]
    HtmlPayload,
    #[error("payload is {0} bytes, below the {MIN_CONTENT_BYTES} byte minimum for a season file")]
    TooSmall(usize),
    #[error("header row is missing the HomeTeam/AwayTeam columns")]
    HeaderMissing,
    #[error("newline count {0} outside the expected Premier League range")]
    RowCountOutOfRange(usize),
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Checks a raw payload against the structural expectations for one season
/// file. Returns the first failed check.
pub fn check_csv_content(content: &[u8]) -> Result<(), ContentIssue> {
    let snippet = content[..content.len().min(1_000)].to_ascii_lowercase();
    if contains_bytes(&snippet, b"<html")
        || contains_bytes(&snippet, b"<!doctype")
        || contains_bytes(&snippet, b"<head")
    {
        return Err(ContentIssue::HtmlPayload);
    }

    if content.len() < MIN_CONTENT_BYTES {
        return Err(ContentIssue::TooSmall(content.len()));
    }

    let header = content.split(|&b| b == b'\n').next().unwrap_or(&[]);
    if !contains_bytes(header, b"HomeTeam") || !contains_bytes(header, b"AwayTeam") {
        return Err(ContentIssue::HeaderMissing);
    }

    let row_count = content.iter().filter(|&&b| b == b'\n').count();
    if !DOWNLOAD_ROW_RANGE.contains(&row_count) {
        return Err(ContentIssue::RowCountOutOfRange(row_count));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season_payload(rows: usize) -> Vec<u8> {
        let mut content = b"Date,HomeTeam,AwayTeam,FTR\n".to_vec();
        for i in 0..rows {
            content.extend_from_slice(
                format!("16/08/14,Team {i} United FC,Team {i} City FC,H\n").as_bytes(),
            );
        }
        content
    }

    #[test]
    fn accepts_a_plausible_season_payload() {
        assert_eq!(check_csv_content(&season_payload(380)), Ok(()));
    }

    #[test]
    fn rejects_html_error_pages() {
        let payload = b"<!DOCTYPE html><html><head></head></html>".to_vec();
        assert_eq!(check_csv_content(&payload), Err(ContentIssue::HtmlPayload));
    }

    #[test]
    fn rejects_truncated_payloads() {
        assert!(matches!(
            check_csv_content(b"Date,HomeTeam,AwayTeam\n"),
            Err(ContentIssue::TooSmall(_))
        ));
    }

    #[test]
    fn rejects_headers_without_team_columns() {
        let mut payload = b"Date,FTR\n".to_vec();
        payload.resize(MIN_CONTENT_BYTES + 1, b'x');
        assert_eq!(
            check_csv_content(&payload),
            Err(ContentIssue::HeaderMissing)
        );
    }

    #[test]
    fn rejects_row_counts_outside_envelope() {
        assert!(matches!(
            check_csv_content(&season_payload(450)),
            Err(ContentIssue::RowCountOutOfRange(_))
        ));
    }
}
