use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid JSON format in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON file is empty: {}", path.display())]
    EmptyInput { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),
}

impl ConvertError {
    /// Wraps an I/O failure, promoting `NotFound` to its own variant.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ConvertError::NotFound { path },
            _ => ConvertError::Io { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
