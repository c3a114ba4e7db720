use thiserror::Error;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input file not found: {0:?}")]
    MissingFile(PathBuf),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// Type alias for Result
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error conversions
impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedDocument(msg.into())
    }

    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        Error::Encoding(msg.into())
    }
}

impl From<crate::document::DocumentError> for Error {
    fn from(err: crate::document::DocumentError) -> Self {
        use crate::document::DocumentError;
        match err {
            DocumentError::NotFound(path) => Error::MissingFile(path),
            DocumentError::IoError(e) => Error::Io(e),
            DocumentError::Encoding(msg) => Error::encoding(msg),
            e @ (DocumentError::Xml { .. } | DocumentError::IllFormed(_)) => {
                Error::malformed(e.to_string())
            }
        }
    }
}
