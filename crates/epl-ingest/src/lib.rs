pub mod content;
pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod fetch;

pub use content::{ContentIssue, check_csv_content};
pub use csv_table::{CsvPreview, CsvTable, read_csv_preview, read_csv_table};
pub use discovery::{file_name_of, list_season_files};
pub use error::{IngestError, Result};
pub use fetch::{SeasonSource, season_file_name};
