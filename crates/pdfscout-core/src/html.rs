//! HTML rendering of documents and search highlights.
//!
//! Text is always escaped before it is embedded, so document content can never
//! inject markup. Highlights are emitted as `<mark>` elements carrying their
//! match ordinal in `data-match-index`; the active match also gets
//! `class="active"`.

use crate::search::{AnnotatedView, Segment};

/// Escape special HTML characters.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render `document` as escaped text with `<mark>` elements around matches.
pub fn render_marked(document: &str, view: &AnnotatedView) -> String {
    let mut out = String::with_capacity(document.len() + view.match_count * 48);
    for segment in &view.segments {
        let text = escape_html(segment.text(document));
        match *segment {
            Segment::Plain { .. } => out.push_str(&text),
            Segment::Match {
                ordinal, active, ..
            } => {
                if active {
                    out.push_str(&format!(
                        "<mark class=\"active\" data-match-index=\"{ordinal}\">{text}</mark>"
                    ));
                } else {
                    out.push_str(&format!("<mark data-match-index=\"{ordinal}\">{text}</mark>"));
                }
            }
        }
    }
    out
}

const PRINT_STYLE: &str = "body{font-family:Georgia,serif;margin:2cm;color:#111}\
h1{font-size:16pt;border-bottom:1px solid #999;padding-bottom:4pt}\
pre{white-space:pre-wrap;font-family:inherit;font-size:11pt;line-height:1.5}\
mark{background:#fde68a}mark.active{background:#f59e0b;font-weight:bold}";

/// Build a standalone printable HTML page.
///
/// The page is titled with `title` (the original file name). When `view` is
/// given, its highlights are rendered; otherwise the text is plain.
pub fn render_print_page(title: &str, document: &str, view: Option<&AnnotatedView>) -> String {
    let title = escape_html(title);
    let body = match view {
        Some(view) => render_marked(document, view),
        None => escape_html(document),
    };
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>{PRINT_STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n<pre>{body}</pre>\n\
         </body>\n</html>\n"
    )
}
