pub mod aggregator;
pub mod validator;

pub use aggregator::{
    RUN_TIMESTAMP_FORMAT, ValidationRun, validate_directory, validate_directory_with,
    write_report,
};
pub use validator::{FileIdentity, check_season_file, has_error};
