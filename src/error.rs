//! Error types for the handover library.

use std::io;
use thiserror::Error;

/// Result type alias for handover operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building handover output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The handover form could not be read.
    #[error("Invalid handover form: {0}")]
    InvalidInput(String),

    /// Error while assembling the PDF object graph.
    #[error("PDF writing error: {0}")]
    Pdf(String),

    /// Error during rendering (Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("missing field".to_string());
        assert_eq!(err.to_string(), "Invalid handover form: missing field");

        let err = Error::Pdf("bad xref".to_string());
        assert_eq!(err.to_string(), "PDF writing error: bad xref");
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
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
