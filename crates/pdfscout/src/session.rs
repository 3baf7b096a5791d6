//! Upload lifecycle and search session.
//!
//! A [`Session`] owns at most one [`Document`] and the [`SearchState`] for it.
//! Uploads are validated up front and then tracked by an [`UploadTicket`]
//! carrying a generation number. Starting a new upload, or resetting the
//! session, bumps the generation so that a result still in flight for an
//! older ticket is discarded when it arrives instead of overwriting newer
//! state.

use std::path::Path;

use pdfscout_core::{
    AnnotatedView, Direction, DocumentStats, RawExtraction, ReflowOptions, ScoutError,
    SearchState,
};
use pdfscout_parse::TextBackend;

use crate::document::Document;

/// MIME type accepted for uploads.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Default upload size ceiling (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Uploads larger than this are rejected before extraction.
    pub max_upload_bytes: usize,
    /// Thresholds passed to the reflow pass.
    pub reflow: ReflowOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            reflow: ReflowOptions::default(),
        }
    }
}

/// A file offered for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_name: String,
    /// Declared MIME type. `None` when the source does not provide one.
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadRequest {
    pub fn new(file_name: impl Into<String>, mime_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.map(str::to_string),
            bytes,
        }
    }

    /// Read a file from disk, inferring its MIME type from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScoutError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            ScoutError::InvalidFile(format!("cannot read {}: {e}", path.display()))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_type_for(&file_name);
        Ok(Self::new(file_name, mime_type, bytes))
    }
}

/// MIME type implied by a file name's extension, if it is one we know.
pub fn mime_type_for(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    ext.eq_ignore_ascii_case("pdf").then_some(PDF_MIME_TYPE)
}

/// Check an upload against the session's acceptance rules.
///
/// An upload must be non-empty, within `max_upload_bytes`, and declared as
/// PDF. A missing MIME type falls back to the file extension.
pub fn validate_upload(
    request: &UploadRequest,
    options: &SessionOptions,
) -> Result<(), ScoutError> {
    let declared = request
        .mime_type
        .as_deref()
        .or_else(|| mime_type_for(&request.file_name));

    match declared {
        Some(mime) if mime.eq_ignore_ascii_case(PDF_MIME_TYPE) => {}
        Some(mime) => {
            return Err(ScoutError::InvalidFile(format!(
                "{} is {mime}, not a PDF",
                request.file_name
            )));
        }
        None => {
            return Err(ScoutError::InvalidFile(format!(
                "{} is not a PDF",
                request.file_name
            )));
        }
    }

    if request.bytes.is_empty() {
        return Err(ScoutError::InvalidFile(format!("{} is empty", request.file_name)));
    }
    if request.bytes.len() > options.max_upload_bytes {
        return Err(ScoutError::InvalidFile(format!(
            "{} is {} bytes, limit is {}",
            request.file_name,
            request.bytes.len(),
            options.max_upload_bytes
        )));
    }
    Ok(())
}

/// Handle for one accepted upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    generation: u64,
    file_name: String,
}

impl UploadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// What the session is doing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProcessingStatus {
    /// No document and nothing in flight.
    #[default]
    Idle,
    /// An extraction is running for `file_name`.
    Processing { file_name: String },
    /// A document is loaded.
    Ready,
    /// The most recent upload failed; holds the user-facing message.
    Failed(String),
}

/// Result of handing an extraction result back to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The document was installed.
    Applied,
    /// The ticket was superseded; the result was dropped.
    Discarded,
    /// The extraction for the current ticket failed.
    Failed(ScoutError),
}

/// One document, its search, and the upload in flight.
#[derive(Debug, Default)]
pub struct Session {
    options: SessionOptions,
    generation: u64,
    status: ProcessingStatus,
    document: Option<Document>,
    search: SearchState,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Accept an upload and enter the processing state.
    ///
    /// On success the previous document and search are cleared and any
    /// earlier ticket becomes stale. A rejected upload leaves the session
    /// untouched.
    pub fn begin_upload(&mut self, request: &UploadRequest) -> Result<UploadTicket, ScoutError> {
        validate_upload(request, &self.options)?;

        self.generation += 1;
        self.document = None;
        self.search.clear();
        self.status = ProcessingStatus::Processing {
            file_name: request.file_name.clone(),
        };
        tracing::info!(
            file = %request.file_name,
            bytes = request.bytes.len(),
            generation = self.generation,
            "upload accepted"
        );

        Ok(UploadTicket {
            generation: self.generation,
            file_name: request.file_name.clone(),
        })
    }

    /// Whether `ticket` still belongs to the latest upload.
    pub fn is_current(&self, ticket: &UploadTicket) -> bool {
        ticket.generation == self.generation
            && matches!(self.status, ProcessingStatus::Processing { .. })
    }

    /// Apply the result of the extraction started for `ticket`.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<RawExtraction, ScoutError>,
    ) -> UploadOutcome {
        if !self.is_current(&ticket) {
            tracing::debug!(
                file = %ticket.file_name,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale extraction result"
            );
            return UploadOutcome::Discarded;
        }

        match result {
            Ok(raw) => {
                let document =
                    Document::from_extraction(ticket.file_name, raw, &self.options.reflow);
                self.search.refresh(document.text());
                tracing::info!(
                    file = %document.file_name(),
                    pages = document.total_pages(),
                    chars = document.text().len(),
                    "document ready"
                );
                self.document = Some(document);
                self.status = ProcessingStatus::Ready;
                UploadOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(file = %ticket.file_name, error = %err, "extraction failed");
                self.status = ProcessingStatus::Failed(err.user_message());
                UploadOutcome::Failed(err)
            }
        }
    }

    /// Validate, extract on the calling thread, and install the result.
    pub fn upload_with<B: TextBackend + ?Sized>(
        &mut self,
        request: &UploadRequest,
        backend: &B,
    ) -> Result<&Document, ScoutError> {
        let ticket = self.begin_upload(request)?;
        tracing::debug!(backend = backend.name(), "extracting in place");
        let result = backend.extract(&request.bytes).map_err(ScoutError::from);
        match self.complete_upload(ticket, result) {
            UploadOutcome::Failed(err) => Err(err),
            _ => self
                .document
                .as_ref()
                .ok_or_else(|| ScoutError::ExtractionFailed("no document produced".to_string())),
        }
    }

    /// Drop the document, the search, and any upload in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.document = None;
        self.search.clear();
        self.status = ProcessingStatus::Idle;
        tracing::debug!(generation = self.generation, "session reset");
    }

    /// Replace the search query. Ignored while no document is loaded.
    pub fn set_query(&mut self, query: impl Into<String>) {
        if let Some(document) = &self.document {
            self.search.set_query(document.text(), query);
        }
    }

    pub fn clear_query(&mut self) {
        self.search.clear();
    }

    /// Move to the next or previous match and return the new index.
    pub fn navigate(&mut self, direction: Direction) -> usize {
        if !self.search.navigation_enabled() {
            return self.search.current();
        }
        self.search.navigate(direction)
    }

    /// The document split into plain and highlighted segments.
    pub fn annotated_view(&self) -> Option<AnnotatedView> {
        self.document
            .as_ref()
            .map(|document| self.search.annotate(document.text()))
    }

    pub fn stats(&self) -> Option<DocumentStats> {
        self.document.as_ref().map(Document::stats)
    }

    pub fn status(&self) -> &ProcessingStatus {
        &self.status
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.status, ProcessingStatus::Processing { .. })
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_request(name: &str) -> UploadRequest {
        UploadRequest::new(name, Some(PDF_MIME_TYPE), b"%PDF-1.5 stub".to_vec())
    }

    fn pages(texts: &[&str]) -> RawExtraction {
        RawExtraction::from_pages(texts.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn rejects_non_pdf_mime() {
        let req = UploadRequest::new("notes.txt", Some("text/plain"), b"hi".to_vec());
        let err = validate_upload(&req, &SessionOptions::default()).unwrap_err();
        assert!(matches!(err, ScoutError::InvalidFile(_)));
    }

    #[test]
    fn missing_mime_falls_back_to_extension() {
        let ok = UploadRequest::new("Report.PDF", None, b"x".to_vec());
        assert!(validate_upload(&ok, &SessionOptions::default()).is_ok());
        let bad = UploadRequest::new("report", None, b"x".to_vec());
        assert!(validate_upload(&bad, &SessionOptions::default()).is_err());
    }

    #[test]
    fn rejects_empty_and_oversized() {
        let options = SessionOptions {
            max_upload_bytes: 4,
            ..SessionOptions::default()
        };
        let empty = UploadRequest::new("a.pdf", Some(PDF_MIME_TYPE), Vec::new());
        assert!(validate_upload(&empty, &options).is_err());
        let big = UploadRequest::new("a.pdf", Some(PDF_MIME_TYPE), vec![0; 5]);
        assert!(validate_upload(&big, &options).is_err());
        let fits = UploadRequest::new("a.pdf", Some(PDF_MIME_TYPE), vec![0; 4]);
        assert!(validate_upload(&fits, &options).is_ok());
    }

    #[test]
    fn rejected_upload_leaves_state_alone() {
        let mut session = Session::default();
        let ticket = session.begin_upload(&pdf_request("a.pdf")).unwrap();
        session.complete_upload(ticket, Ok(pages(&["Alpha."])));
        session.set_query("alpha");

        let bad = UploadRequest::new("b.png", Some("image/png"), b"x".to_vec());
        assert!(session.begin_upload(&bad).is_err());
        assert_eq!(session.status(), &ProcessingStatus::Ready);
        assert_eq!(session.search().match_count(), 1);
    }

    #[test]
    fn begin_upload_clears_previous_document() {
        let mut session = Session::default();
        let ticket = session.begin_upload(&pdf_request("a.pdf")).unwrap();
        session.complete_upload(ticket, Ok(pages(&["Alpha."])));
        session.set_query("alpha");

        let _ticket = session.begin_upload(&pdf_request("b.pdf")).unwrap();
        assert!(session.document().is_none());
        assert_eq!(session.search().query(), "");
        assert!(session.is_processing());
        assert_eq!(
            session.status(),
            &ProcessingStatus::Processing {
                file_name: "b.pdf".to_string()
            }
        );
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut session = Session::default();
        let first = session.begin_upload(&pdf_request("first.pdf")).unwrap();
        let second = session.begin_upload(&pdf_request("second.pdf")).unwrap();

        assert_eq!(
            session.complete_upload(second, Ok(pages(&["Second."]))),
            UploadOutcome::Applied
        );
        assert_eq!(
            session.complete_upload(first, Ok(pages(&["First."]))),
            UploadOutcome::Discarded
        );
        let doc = session.document().unwrap();
        assert_eq!(doc.file_name(), "second.pdf");
        assert!(doc.text().contains("Second."));
    }

    #[test]
    fn stale_result_discarded_even_when_arriving_first() {
        let mut session = Session::default();
        let first = session.begin_upload(&pdf_request("first.pdf")).unwrap();
        let second = session.begin_upload(&pdf_request("second.pdf")).unwrap();

        assert_eq!(
            session.complete_upload(first, Ok(pages(&["First."]))),
            UploadOutcome::Discarded
        );
        assert!(session.is_processing());
        session.complete_upload(second, Ok(pages(&["Second."])));
        assert_eq!(session.document().unwrap().file_name(), "second.pdf");
    }

    #[test]
    fn reset_invalidates_in_flight_upload() {
        let mut session = Session::default();
        let ticket = session.begin_upload(&pdf_request("a.pdf")).unwrap();
        session.reset();
        assert_eq!(
            session.complete_upload(ticket, Ok(pages(&["Late."]))),
            UploadOutcome::Discarded
        );
        assert_eq!(session.status(), &ProcessingStatus::Idle);
        assert!(session.document().is_none());
    }

    #[test]
    fn failed_extraction_sets_failed_status() {
        let mut session = Session::default();
        let ticket = session.begin_upload(&pdf_request("bad.pdf")).unwrap();
        let outcome = session.complete_upload(
            ticket,
            Err(ScoutError::ExtractionFailed("broken xref".to_string())),
        );
        assert!(matches!(outcome, UploadOutcome::Failed(ScoutError::ExtractionFailed(_))));
        assert_eq!(
            session.status(),
            &ProcessingStatus::Failed(
                "Failed to extract PDF content. Please try again with a different PDF file."
                    .to_string()
            )
        );
        assert!(session.document().is_none());
    }

    #[test]
    fn completed_ticket_cannot_apply_twice() {
        let mut session = Session::default();
        let ticket = session.begin_upload(&pdf_request("a.pdf")).unwrap();
        assert_eq!(
            session.complete_upload(ticket.clone(), Ok(pages(&["One."]))),
            UploadOutcome::Applied
        );
        assert_eq!(
            session.complete_upload(ticket, Ok(pages(&["Two."]))),
            UploadOutcome::Discarded
        );
        assert!(session.document().unwrap().text().contains("One."));
    }

    #[test]
    fn query_navigation_and_view() {
        let mut session = Session::default();
        let ticket = session.begin_upload(&pdf_request("a.pdf")).unwrap();
        session.complete_upload(ticket, Ok(pages(&["The cat sat.\n\nThe CAT ran."])));

        session.set_query("cat");
        assert_eq!(session.search().match_count(), 2);
        assert_eq!(session.search().position_label(), "1 of 2");
        assert_eq!(session.navigate(Direction::Next), 1);
        assert_eq!(session.navigate(Direction::Next), 0);
        assert_eq!(session.navigate(Direction::Previous), 1);

        let view = session.annotated_view().unwrap();
        assert_eq!(view.match_count, 2);
        assert_eq!(view.active, Some(1));

        session.set_query("dog");
        assert_eq!(session.search().position_label(), "0 matches");
        assert_eq!(session.navigate(Direction::Next), 0);
    }

    #[test]
    fn query_ignored_without_document() {
        let mut session = Session::default();
        session.set_query("anything");
        assert_eq!(session.search().query(), "");
        assert!(session.annotated_view().is_none());
        assert!(session.stats().is_none());
    }

    #[test]
    fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.pdf");
        std::fs::write(&path, b"%PDF-1.5").unwrap();

        let req = UploadRequest::from_path(&path).unwrap();
        assert_eq!(req.file_name, "sample.pdf");
        assert_eq!(req.mime_type.as_deref(), Some(PDF_MIME_TYPE));
        assert_eq!(req.bytes, b"%PDF-1.5");
    }

    #[test]
    fn from_path_missing_file_is_invalid() {
        let err = UploadRequest::from_path("/definitely/not/here.pdf").unwrap_err();
        assert!(matches!(err, ScoutError::InvalidFile(_)));
    }
}
