use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write '{}': {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Target directory does not exist: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("Target path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Catalog configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize data: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
