//! pdfscout: Extract, reflow, and search the text of PDF documents.
//!
//! This is the public API facade crate for pdfscout. It re-exports the text
//! algorithms from pdfscout-core and uses pdfscout-parse for decoding.
//!
//! # Architecture
//!
//! - **pdfscout-core**: Page formatting, paragraph reflow, literal search,
//!   statistics, and HTML rendering
//! - **pdfscout-parse**: Extraction backends (lopdf)
//! - **pdfscout** (this crate): [`Session`] with its upload lifecycle,
//!   background [`ExtractionWorker`], and export actions
//!
//! # Example
//!
//! ```ignore
//! use pdfscout::{Direction, LopdfBackend, Session, UploadRequest};
//!
//! let mut session = Session::default();
//! let request = UploadRequest::from_path("paper.pdf")?;
//! session.upload_with(&request, &LopdfBackend::new())?;
//!
//! session.set_query("entropy");
//! println!("{}", session.search().position_label());
//! session.navigate(Direction::Next);
//! ```

mod document;
pub mod export;
mod session;
mod worker;

pub use document::Document;
pub use export::{
    Clipboard, DOWNLOAD_SUFFIX, Notice, NoticeKind, copy_to_clipboard, download_file_name,
    print_view, write_download, write_print_view,
};
pub use session::{
    DEFAULT_MAX_UPLOAD_BYTES, PDF_MIME_TYPE, ProcessingStatus, Session, SessionOptions,
    UploadOutcome, UploadRequest, UploadTicket, mime_type_for, validate_upload,
};
pub use worker::{ExtractionWorker, FinishedExtraction};

pub use pdfscout_core;
pub use pdfscout_core::{
    AnnotatedView, Direction, DocumentStats, ExportAction, ExtractedText, MatchSpan,
    RawExtraction, ReflowOptions, ScoutError, SearchState, Segment, annotate, count_matches,
    escape_html, find_matches, format_pages, navigate, reflow, reflow_with, render_marked,
    render_print_page,
};
pub use pdfscout_parse;
pub use pdfscout_parse::{BackendError, LopdfBackend, TextBackend};
