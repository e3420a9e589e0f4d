//! Error types for unlexical library.

use std::io;
use thiserror::Error;

/// Result type alias for unlexical operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or writing rich-text documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON does not have the shape of a rich-text document.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build an [`Error::InvalidDocument`] for a node at `path`.
    pub(crate) fn invalid_at(path: &str, message: impl std::fmt::Display) -> Self {
        Error::InvalidDocument(format!("{}: {}", path, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDocument("missing root".to_string());
        assert_eq!(err.to_string(), "Invalid document: missing root");

        let err = Error::invalid_at("root.children[2]", "expected an object");
        assert_eq!(
            err.to_string(),
            "Invalid document: root.children[2]: expected an object"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
