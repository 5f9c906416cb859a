//! Collaborator seam for the upstream season-file source.
//!
//! The actual network client (download, retry, timeout policy) lives
//! outside this workspace; tests use in-memory fakes.

use epl_model::season_code;

/// Anything that can produce the raw bytes of one season's results file.
pub trait SeasonSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the raw CSV bytes for the season starting in `start_year`.
    fn fetch_season(&self, start_year: u16) -> Result<Vec<u8>, Self::Error>;
}

/// Conventional on-disk name for a stored season file (`season_1415.csv`).
pub fn season_file_name(start_year: u16) -> String {
    format!("season_{}.csv", season_code(start_year))
}
