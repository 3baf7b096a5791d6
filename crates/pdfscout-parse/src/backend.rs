//! Extraction backend trait.
//!
//! Defines the [`TextBackend`] trait that abstracts PDF-to-text decoding so
//! that sessions can run against lopdf, another decoder, or a test double.

use pdfscout_core::RawExtraction;

use crate::error::BackendError;

/// Trait abstracting PDF-to-text decoding.
///
/// Given the raw bytes of a document, a backend returns its page count and
/// its text, either per page or already merged.
///
/// # Usage
///
/// ```ignore
/// let backend = LopdfBackend::new();
/// let raw = backend.extract(&pdf_bytes)?;
/// let formatted = raw.formatted_text();
/// ```
pub trait TextBackend {
    /// Short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Decode `bytes` into text.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a readable PDF document.
    fn extract(&self, bytes: &[u8]) -> Result<RawExtraction, BackendError>;
}

impl<B: TextBackend + ?Sized> TextBackend for &B {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn extract(&self, bytes: &[u8]) -> Result<RawExtraction, BackendError> {
        (**self).extract(bytes)
    }
}

impl<B: TextBackend + ?Sized> TextBackend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn extract(&self, bytes: &[u8]) -> Result<RawExtraction, BackendError> {
        (**self).extract(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl TextBackend for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn extract(&self, _bytes: &[u8]) -> Result<RawExtraction, BackendError> {
            Ok(RawExtraction::merged(1, self.0))
        }
    }

    #[test]
    fn reference_and_box_forward() {
        let backend = Fixed("hello");
        let by_ref: &Fixed = &backend;
        assert_eq!(by_ref.name(), "fixed");
        let boxed: Box<dyn TextBackend> = Box::new(Fixed("boxed"));
        let raw = boxed.extract(b"").unwrap();
        assert_eq!(raw.formatted_text(), "boxed");
    }
}
