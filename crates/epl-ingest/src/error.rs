use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("data directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },
    #[error("failed to read directory {}: {}", .path.display(), .source)]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read csv {}: {}", .path.display(), .source)]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
