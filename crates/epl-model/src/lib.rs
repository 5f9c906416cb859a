pub mod error;
pub mod issue;
pub mod schema;
pub mod season;

pub use error::{ModelError, Result};
pub use issue::{Issue, IssueSeverity, IssueType, RunMetadata, ValidationReport};
pub use season::{SeasonLabel, season_code};
