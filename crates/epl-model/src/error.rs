use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot derive a season label from file name `{file}`")]
    MalformedFilename { file: String },
    #[error("{file}: required columns missing: {}", .missing.join(", "))]
    SchemaError { file: String, missing: Vec<String> },
    #[error("no season files survived normalization; nothing to merge")]
    EmptyDataset,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
