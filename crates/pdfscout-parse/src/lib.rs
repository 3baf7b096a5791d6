//! pdfscout-parse: PDF text extraction backends.
//!
//! Decoding a PDF into text is delegated to a [`TextBackend`]. The crate ships
//! [`LopdfBackend`], built on [lopdf](https://crates.io/crates/lopdf), which
//! returns one string per page. The rest of pdfscout only ever sees the
//! backend's [`RawExtraction`](pdfscout_core::RawExtraction).

pub mod backend;
pub mod error;
pub mod lopdf_backend;

pub use backend::TextBackend;
pub use error::BackendError;
pub use lopdf_backend::LopdfBackend;
pub use pdfscout_core;
