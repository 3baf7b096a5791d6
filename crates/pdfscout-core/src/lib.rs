//! pdfscout-core: Backend-independent text algorithms.
//!
//! This crate turns per-page text produced by a PDF decoder into a readable
//! document and searches it:
//!
//! - [`pages`]: page-marker formatting of raw per-page text
//! - [`reflow`]: the paragraph reflow heuristic
//! - [`search`]: literal case-insensitive search, annotation, and navigation
//! - [`stats`]: word/character/paragraph statistics
//! - [`html`]: escaped highlight markup and printable pages
//!
//! Nothing here performs I/O. Every function is pure and safe to call on
//! every keystroke.

pub mod error;
pub mod html;
pub mod pages;
pub mod reflow;
pub mod search;
pub mod stats;

pub use error::{ExportAction, ScoutError};
pub use html::{escape_html, render_marked, render_print_page};
pub use pages::{
    ExtractedText, PAGE_MARKER_PREFIX, RawExtraction, format_pages, is_page_marker, page_marker,
    page_marker_lines,
};
pub use reflow::{ReflowOptions, reflow, reflow_with};
pub use search::{
    AnnotatedView, Direction, MatchSpan, PATTERN_SIZE_LIMIT, SearchState, Segment, annotate,
    count_matches, escape_literal, find_matches, literal_matcher, navigate,
};
pub use stats::{DocumentStats, WORDS_PER_MINUTE};
