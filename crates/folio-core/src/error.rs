//! Error types for folio.

use thiserror::Error;

/// folio error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Book not found: {0}")]
    BookNotFound(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Dataset(err.to_string())
    }
}

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, Error>;
