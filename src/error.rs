use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum StationError {
    #[error("Observer not registered: {0}")]
    ObserverNotRegistered(String),

    #[error("Failed to read readings file {path}: {source}")]
    ReadingsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StationError>;
