//! Exporting a document: download, clipboard, and printable view.
//!
//! Each action returns a [`ScoutError::ExportFailed`] on failure. [`Notice`]
//! turns an action's outcome into the short message shown to the user.

use std::fs;
use std::path::{Path, PathBuf};

use pdfscout_core::{ExportAction, ScoutError, SearchState, render_print_page};

use crate::document::Document;

/// Suffix appended to the source name for downloads.
pub const DOWNLOAD_SUFFIX: &str = "_extracted.txt";

/// `report.pdf` becomes `report_extracted.txt`.
///
/// Only a trailing `.pdf` (any case) is stripped; other names keep their
/// full text.
pub fn download_file_name(original: &str) -> String {
    let stem = original
        .len()
        .checked_sub(4)
        .filter(|&cut| original.is_char_boundary(cut))
        .filter(|&cut| original[cut..].eq_ignore_ascii_case(".pdf"))
        .map_or(original, |cut| &original[..cut]);
    format!("{stem}{DOWNLOAD_SUFFIX}")
}

fn export_error(action: ExportAction, reason: impl ToString) -> ScoutError {
    ScoutError::ExportFailed {
        action,
        reason: reason.to_string(),
    }
}

/// Write the document text into `dir` under its download name.
pub fn write_download(document: &Document, dir: &Path) -> Result<PathBuf, ScoutError> {
    let path = dir.join(download_file_name(document.file_name()));
    fs::write(&path, document.text()).map_err(|e| export_error(ExportAction::Download, e))?;
    tracing::info!(path = %path.display(), bytes = document.text().len(), "wrote download");
    Ok(path)
}

/// A place text can be copied to.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// Copy the full document text.
pub fn copy_to_clipboard<C: Clipboard + ?Sized>(
    document: &Document,
    clipboard: &mut C,
) -> Result<(), ScoutError> {
    clipboard
        .set_text(document.text())
        .map_err(|e| export_error(ExportAction::Clipboard, e))?;
    tracing::debug!(chars = document.text().len(), "copied document text");
    Ok(())
}

/// Standalone HTML page for printing.
///
/// With a search that has a query, its matches are highlighted and the
/// current one is marked active.
pub fn print_view(document: &Document, search: Option<&SearchState>) -> String {
    let view = search
        .filter(|s| s.has_query())
        .map(|s| s.annotate(document.text()));
    render_print_page(document.file_name(), document.text(), view.as_ref())
}

pub fn write_print_view(
    document: &Document,
    search: Option<&SearchState>,
    path: &Path,
) -> Result<(), ScoutError> {
    fs::write(path, print_view(document, search)).map_err(|e| export_error(ExportAction::Print, e))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A transient message about an export action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, description: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// The notice for `action` finishing with `result`.
    pub fn for_export<T>(action: ExportAction, result: &Result<T, ScoutError>) -> Self {
        match (action, result) {
            (ExportAction::Clipboard, Ok(_)) => Self::new(
                NoticeKind::Success,
                "Copied to clipboard",
                "The extracted text has been copied to your clipboard.",
            ),
            (ExportAction::Download, Ok(_)) => Self::new(
                NoticeKind::Success,
                "Download ready",
                "The extracted text has been saved.",
            ),
            (ExportAction::Print, Ok(_)) => Self::new(
                NoticeKind::Success,
                "Print view ready",
                "The printable view has been prepared.",
            ),
            (ExportAction::Clipboard, Err(err)) => {
                Self::new(NoticeKind::Failure, "Failed to copy", &err.user_message())
            }
            (ExportAction::Download, Err(err)) => {
                Self::new(NoticeKind::Failure, "Failed to save", &err.user_message())
            }
            (ExportAction::Print, Err(err)) => {
                Self::new(NoticeKind::Failure, "Failed to print", &err.user_message())
            }
        }
    }
}
