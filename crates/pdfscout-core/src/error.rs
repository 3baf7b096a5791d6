//! Error types for pdfscout.
//!
//! [`ScoutError`] covers every failure a session can report to the user.
//! None of them is fatal: after any error the user can retry an upload.
//! Search pattern problems are deliberately absent; they degrade to zero
//! matches inside [`crate::search`].

use std::fmt;

/// Which export action failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ExportAction {
    Clipboard,
    Download,
    Print,
}

impl ExportAction {
    /// Lowercase name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportAction::Clipboard => "clipboard",
            ExportAction::Download => "download",
            ExportAction::Print => "print",
        }
    }
}

impl fmt::Display for ExportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by a pdfscout session.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoutError {
    /// The upload was rejected before any processing (missing file, wrong
    /// type, too large).
    InvalidFile(String),
    /// The extraction backend failed to produce text.
    ExtractionFailed(String),
    /// An export action (clipboard, download, print) failed.
    ExportFailed {
        /// The action that failed.
        action: ExportAction,
        /// Why it failed.
        reason: String,
    },
    /// I/O error outside of an export action.
    Io(String),
}

impl ScoutError {
    /// Short notice suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ScoutError::InvalidFile(reason) => format!("Please choose a PDF file ({reason})."),
            ScoutError::ExtractionFailed(_) => {
                "Failed to extract PDF content. Please try again with a different PDF file."
                    .to_string()
            }
            ScoutError::ExportFailed {
                action: ExportAction::Clipboard,
                ..
            } => "Could not copy text to clipboard.".to_string(),
            ScoutError::ExportFailed {
                action: ExportAction::Download,
                ..
            } => "Could not save the extracted text.".to_string(),
            ScoutError::ExportFailed {
                action: ExportAction::Print,
                ..
            } => "Could not prepare the printable view.".to_string(),
            ScoutError::Io(msg) => format!("I/O error: {msg}"),
        }
    }
}

impl fmt::Display for ScoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoutError::InvalidFile(msg) => write!(f, "invalid file: {msg}"),
            ScoutError::ExtractionFailed(msg) => write!(f, "extraction failed: {msg}"),
            ScoutError::ExportFailed { action, reason } => {
                write!(f, "{action} export failed: {reason}")
            }
            ScoutError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ScoutError {}

impl From<std::io::Error> for ScoutError {
    fn from(err: std::io::Error) -> Self {
        ScoutError::Io(err.to_string())
    }
}
