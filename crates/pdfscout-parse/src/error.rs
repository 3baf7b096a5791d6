//! Error types for extraction backends.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Every [`BackendError`]
//! converts into [`ScoutError::ExtractionFailed`] at the session boundary.

use pdfscout_core::ScoutError;
use thiserror::Error;

/// Error type for extraction backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The bytes could not be parsed as a PDF document.
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading PDF data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is encrypted and cannot be read without a password.
    #[error("PDF is encrypted and requires a password")]
    Encrypted,

    /// The document parsed but contains no pages.
    #[error("PDF has no pages")]
    NoPages,
}

impl From<BackendError> for ScoutError {
    fn from(err: BackendError) -> Self {
        ScoutError::ExtractionFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = BackendError::Parse("invalid xref table".to_string());
        assert_eq!(err.to_string(), "PDF parse error: invalid xref table");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BackendError = io_err.into();
        assert!(matches!(err, BackendError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn converts_to_extraction_failed() {
        let scout: ScoutError = BackendError::Encrypted.into();
        assert_eq!(
            scout,
            ScoutError::ExtractionFailed("PDF is encrypted and requires a password".to_string())
        );
    }

    #[test]
    fn no_pages_converts() {
        let scout: ScoutError = BackendError::NoPages.into();
        assert!(matches!(scout, ScoutError::ExtractionFailed(msg) if msg == "PDF has no pages"));
    }
}
