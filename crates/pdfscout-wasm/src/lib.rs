//! WebAssembly/JavaScript bindings for pdfscout.
//!
//! The browser page either hands over PDF bytes ([`WasmDocument::open`]) or
//! the per-page strings it already decoded ([`WasmDocument::from_pages`]).
//! Search state lives on the JavaScript side: every query, count, and
//! navigation step is a pure call. Complex types are serialized to JsValue
//! using serde_wasm_bindgen.

use wasm_bindgen::prelude::*;

use pdfscout::{
    Direction, Document, LopdfBackend, PDF_MIME_TYPE, RawExtraction, ReflowOptions, Session,
    UploadRequest, annotate, count_matches, download_file_name, render_marked,
    render_print_page,
};

/// An extracted, reflowed document (WASM binding).
///
/// # JavaScript Usage
///
/// ```js
/// const doc = WasmDocument.open(pdfBytes, file.name);
/// const total = doc.countMatches("budget");
/// let current = 0;
/// current = navigate("next", total, current);
/// output.innerHTML = doc.markedHtml("budget", current);
/// ```
#[wasm_bindgen]
pub struct WasmDocument {
    inner: Document,
}

#[wasm_bindgen]
impl WasmDocument {
    /// Decode PDF bytes (Uint8Array in JavaScript) with the bundled backend.
    pub fn open(data: &[u8], file_name: Option<String>) -> Result<WasmDocument, JsError> {
        let file_name = file_name.unwrap_or_else(|| "document.pdf".to_string());
        let request = UploadRequest::new(file_name, Some(PDF_MIME_TYPE), data.to_vec());
        let mut session = Session::default();
        let document = session
            .upload_with(&request, &LopdfBackend::new())
            .map_err(|e| JsError::new(&e.user_message()))?;
        Ok(WasmDocument {
            inner: document.clone(),
        })
    }

    /// Build from per-page strings decoded elsewhere (e.g. by pdf.js).
    #[wasm_bindgen(js_name = "fromPages")]
    pub fn from_pages(file_name: String, pages: Vec<String>) -> WasmDocument {
        let raw = RawExtraction::from_pages(pages);
        WasmDocument {
            inner: Document::from_extraction(file_name, raw, &ReflowOptions::default()),
        }
    }

    /// Build from text that is already merged across pages.
    #[wasm_bindgen(js_name = "fromText")]
    pub fn from_text(file_name: String, total_pages: usize, text: String) -> WasmDocument {
        let raw = RawExtraction::merged(total_pages, text);
        WasmDocument {
            inner: Document::from_extraction(file_name, raw, &ReflowOptions::default()),
        }
    }

    /// The reflowed text.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.inner.text().to_string()
    }

    #[wasm_bindgen(getter, js_name = "pageCount")]
    pub fn page_count(&self) -> usize {
        self.inner.total_pages()
    }

    #[wasm_bindgen(getter, js_name = "fileName")]
    pub fn file_name(&self) -> String {
        self.inner.file_name().to_string()
    }

    /// Suggested name for saving the text, e.g. `report_extracted.txt`.
    #[wasm_bindgen(getter, js_name = "downloadFileName")]
    pub fn download_file_name(&self) -> String {
        download_file_name(self.inner.file_name())
    }

    /// Number of case-insensitive literal occurrences of `query`.
    #[wasm_bindgen(js_name = "countMatches")]
    pub fn count_matches(&self, query: &str) -> usize {
        count_matches(self.inner.text(), query)
    }

    /// Plain and match segments (byte offsets) with match `current` active.
    pub fn annotate(&self, query: &str, current: usize) -> Result<JsValue, JsError> {
        let view = annotate(self.inner.text(), query, current);
        serde_wasm_bindgen::to_value(&view).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Escaped HTML with `<mark data-match-index>` around every match.
    #[wasm_bindgen(js_name = "markedHtml")]
    pub fn marked_html(&self, query: &str, current: usize) -> String {
        let view = annotate(self.inner.text(), query, current);
        render_marked(self.inner.text(), &view)
    }

    /// Standalone printable page, highlighted when `query` is non-blank.
    #[wasm_bindgen(js_name = "printHtml")]
    pub fn print_html(&self, query: Option<String>, current: Option<usize>) -> String {
        let text = self.inner.text();
        let view = query
            .filter(|q| !q.trim().is_empty())
            .map(|q| annotate(text, &q, current.unwrap_or(0)));
        render_print_page(self.inner.file_name(), text, view.as_ref())
    }

    /// Word, character, line, and paragraph counts as an object.
    pub fn stats(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.stats()).map_err(|e| JsError::new(&e.to_string()))
    }
}

/// Reflow page-marker interleaved text into paragraphs.
#[wasm_bindgen]
pub fn reflow(text: &str) -> String {
    pdfscout::reflow(text)
}

/// Step a match index: `direction` is `"next"` or `"previous"`.
#[wasm_bindgen]
pub fn navigate(direction: &str, match_count: usize, current: usize) -> Result<usize, JsError> {
    let direction = parse_direction(direction).ok_or_else(|| {
        JsError::new(&format!(
            "unknown direction '{direction}', expected 'next' or 'previous'"
        ))
    })?;
    Ok(pdfscout::navigate(direction, match_count, current))
}

/// `"<n> of <total>"`, or `"0 matches"`.
#[wasm_bindgen(js_name = "positionLabel")]
pub fn position_label(match_count: usize, current: usize) -> String {
    if match_count > 0 {
        format!("{} of {}", current.min(match_count - 1) + 1, match_count)
    } else {
        "0 matches".to_string()
    }
}

fn parse_direction(direction: &str) -> Option<Direction> {
    match direction {
        "next" | "down" => Some(Direction::Next),
        "previous" | "prev" | "up" => Some(Direction::Previous),
        _ => None,
    }
}
