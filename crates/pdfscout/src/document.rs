//! The extracted, reflowed document.

use pdfscout_core::{DocumentStats, RawExtraction, ReflowOptions, page_marker_lines, reflow_with};

/// A document produced by one successful extraction.
///
/// Built once from a [`RawExtraction`] and never modified afterwards; a new
/// upload replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    file_name: String,
    total_pages: usize,
    raw_pages: Vec<String>,
    formatted_text: String,
    reflowed_text: String,
}

impl Document {
    /// Format and reflow the output of an extraction backend.
    pub fn from_extraction(
        file_name: impl Into<String>,
        raw: RawExtraction,
        options: &ReflowOptions,
    ) -> Self {
        let formatted_text = raw.formatted_text();
        let reflowed_text = reflow_with(&formatted_text, options);
        let total_pages = raw.total_pages;
        let raw_pages = match raw.text {
            pdfscout_core::ExtractedText::Pages(pages) => pages,
            pdfscout_core::ExtractedText::Merged(_) => Vec::new(),
        };

        Self {
            file_name: file_name.into(),
            total_pages,
            raw_pages,
            formatted_text,
            reflowed_text,
        }
    }

    /// Original file name as uploaded.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Page count reported by the backend.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Per-page text as the backend returned it. Empty for merged text.
    pub fn raw_pages(&self) -> &[String] {
        &self.raw_pages
    }

    /// Page-marker interleaved text, before reflow.
    pub fn formatted_text(&self) -> &str {
        &self.formatted_text
    }

    /// The reflowed text that search, statistics, and export operate on.
    pub fn text(&self) -> &str {
        &self.reflowed_text
    }

    /// Number of pages that contributed text (one marker each).
    pub fn pages_with_text(&self) -> usize {
        page_marker_lines(&self.reflowed_text).count()
    }

    pub fn is_empty(&self) -> bool {
        self.reflowed_text.is_empty()
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats::compute(&self.reflowed_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_pages() {
        let raw = RawExtraction::from_pages(vec![
            "The quick brown fox\njumps over the lazy dog.".to_string(),
            "   ".to_string(),
            "Last page.".to_string(),
        ]);
        let doc = Document::from_extraction("fox.pdf", raw, &ReflowOptions::default());

        assert_eq!(doc.file_name(), "fox.pdf");
        assert_eq!(doc.total_pages(), 3);
        assert_eq!(doc.raw_pages().len(), 3);
        assert_eq!(doc.pages_with_text(), 2);
        assert_eq!(
            doc.text(),
            "--- Page 1 ---\n\nThe quick brown fox jumps over the lazy dog.\n\n--- Page 3 ---\n\nLast page."
        );
        assert!(doc.formatted_text().contains("The quick brown fox\njumps"));
    }

    #[test]
    fn merged_text_is_reflowed_verbatim() {
        let raw = RawExtraction::merged(1, "one line\ncontinued.");
        let doc = Document::from_extraction("m.pdf", raw, &ReflowOptions::default());
        assert!(doc.raw_pages().is_empty());
        assert_eq!(doc.text(), "one line continued.");
        assert_eq!(doc.pages_with_text(), 0);
    }

    #[test]
    fn blank_extraction_gives_empty_document() {
        let raw = RawExtraction::from_pages(vec![String::new(), " \n ".to_string()]);
        let doc = Document::from_extraction("blank.pdf", raw, &ReflowOptions::default());
        assert!(doc.is_empty());
        assert_eq!(doc.stats().words, 0);
    }
}
