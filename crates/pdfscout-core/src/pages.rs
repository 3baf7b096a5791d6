//! Page-marker formatting.
//!
//! A decoder hands back one string per page. Before reflow, the pages are
//! concatenated with a marker line (`--- Page <n> ---`) in front of each
//! non-empty page so that page boundaries survive into the final document.

/// Every page-marker line starts with this prefix.
pub const PAGE_MARKER_PREFIX: &str = "--- Page";

/// Build the marker line for a 1-based page label.
pub fn page_marker(label: usize) -> String {
    format!("{PAGE_MARKER_PREFIX} {label} ---")
}

/// Returns true if the (trimmed) line is a page marker.
pub fn is_page_marker(line: &str) -> bool {
    line.trim().starts_with(PAGE_MARKER_PREFIX)
}

/// Iterate over the page-marker lines of a document, in order.
pub fn page_marker_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| is_page_marker(line))
}

/// Concatenate per-page text with page markers.
///
/// Page `i` (0-based) is labelled `i + 1`. Pages whose trimmed text is empty
/// are skipped, but the labels of later pages keep their original numbers.
/// Each surviving page contributes `"\n--- Page <label> ---\n<trimmed text>\n"`
/// and the whole result is trimmed.
pub fn format_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut out = String::new();
    for (index, page) in pages.iter().enumerate() {
        let text = page.as_ref().trim();
        if text.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(&page_marker(index + 1));
        out.push('\n');
        out.push_str(text);
        out.push('\n');
    }
    out.trim().to_string()
}

/// Text returned by an extraction backend.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "text", rename_all = "snake_case")
)]
pub enum ExtractedText {
    /// One string per page, in page order.
    Pages(Vec<String>),
    /// The whole document as a single string. Used verbatim.
    Merged(String),
}

/// The output contract of the extraction collaborator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawExtraction {
    /// Number of pages in the source document.
    pub total_pages: usize,
    /// The extracted text.
    pub text: ExtractedText,
}

impl RawExtraction {
    /// Wrap per-page text. `total_pages` is the number of pages given.
    pub fn from_pages(pages: Vec<String>) -> Self {
        Self {
            total_pages: pages.len(),
            text: ExtractedText::Pages(pages),
        }
    }

    /// Wrap text the backend already merged into one string.
    pub fn merged(total_pages: usize, text: impl Into<String>) -> Self {
        Self {
            total_pages,
            text: ExtractedText::Merged(text.into()),
        }
    }

    /// Per-page strings, or an empty slice for merged text.
    pub fn pages(&self) -> &[String] {
        match &self.text {
            ExtractedText::Pages(pages) => pages,
            ExtractedText::Merged(_) => &[],
        }
    }

    /// The page-marker interleaved text that feeds the reflow engine.
    pub fn formatted_text(&self) -> String {
        match &self.text {
            ExtractedText::Pages(pages) => format_pages(pages),
            ExtractedText::Merged(text) => text.clone(),
        }
    }
}
