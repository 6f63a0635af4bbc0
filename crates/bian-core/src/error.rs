use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BianError {
    #[error("Cannot read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error parsing {format} file: {path}\n{message}")]
    Parse {
        path: PathBuf,
        format: String,
        message: String,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BianError {
    /// Parse failures are recoverable per file; everything else aborts the batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, BianError>;
