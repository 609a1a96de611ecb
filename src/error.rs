use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LogTableError>;

#[derive(Error, Debug)]
pub enum LogTableError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl LogTableError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogTableError::Io {
            path: path.into(),
            source,
        }
    }
}
