//! lopdf-based extraction backend.
//!
//! Implements [`TextBackend`] using the [lopdf](https://crates.io/crates/lopdf)
//! crate. Pages are decoded one at a time; a page whose content cannot be
//! decoded contributes an empty string and a warning instead of failing the
//! whole document.

use pdfscout_core::RawExtraction;

use crate::backend::TextBackend;
use crate::error::BackendError;

/// The lopdf-based extraction backend.
///
/// # Example
///
/// ```ignore
/// use pdfscout_parse::{LopdfBackend, TextBackend};
///
/// let raw = LopdfBackend::new().extract(&pdf_bytes)?;
/// assert_eq!(raw.total_pages, raw.pages().len());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }

    fn load(bytes: &[u8]) -> Result<lopdf::Document, BackendError> {
        if bytes.is_empty() {
            return Err(BackendError::Parse("empty input".to_string()));
        }

        let doc = lopdf::Document::load_mem(bytes)
            .map_err(|e| BackendError::Parse(format!("failed to parse PDF: {e}")))?;

        if doc.is_encrypted() {
            return Err(BackendError::Encrypted);
        }
        Ok(doc)
    }
}

impl TextBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract(&self, bytes: &[u8]) -> Result<RawExtraction, BackendError> {
        let doc = Self::load(bytes)?;

        // get_pages returns a BTreeMap keyed by 1-based page number, so
        // iteration is already in page order.
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        if page_numbers.is_empty() {
            return Err(BackendError::NoPages);
        }

        let mut pages = Vec::with_capacity(page_numbers.len());
        for number in page_numbers {
            match doc.extract_text(&[number]) {
                Ok(text) => pages.push(text),
                Err(e) => {
                    tracing::warn!(page = number, error = %e, "could not decode page text");
                    pages.push(String::new());
                }
            }
        }

        tracing::debug!(pages = pages.len(), bytes = bytes.len(), "extracted PDF text");
        Ok(RawExtraction::from_pages(pages))
    }
}

#[cfg(test)]
fn create_text_pdf(pages: &[&[&str]]) -> Vec<u8> {
    use lopdf::{Document, Object, ObjectId, Stream, dictionary};

    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut page_ids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut content = String::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 720 - (i as i64) * 14;
            content.push_str(&format!("BT /F1 12 Tf 72 {y} Td ({line}) Tj ET\n"));
        }
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(612), Object::Integer(792)],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        });
        page_ids.push(page_id.into());
    }

    let count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}
