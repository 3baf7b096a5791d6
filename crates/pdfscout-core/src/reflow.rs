//! Paragraph reflow.
//!
//! PDF text arrives hard-wrapped at whatever width the page was laid out
//! with. [`reflow`] walks the lines once and greedily glues wrapped lines back
//! into paragraphs, using terminal punctuation and the capitalization of the
//! following line as paragraph-boundary signals. Page markers are kept and
//! framed by exactly one blank line on each side.
//!
//! Paragraphs are only ever merged, never split.

use crate::pages::is_page_marker;

/// Characters that end a sentence-like line.
const TERMINAL_PUNCTUATION: [char; 5] = ['.', '!', '?', ':', ';'];

/// Thresholds for the reflow heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReflowOptions {
    /// A line with at most this many words may be "very short" (default: 4).
    pub short_line_max_words: usize,
    /// A "very short" line also has fewer than this many characters (default: 60).
    pub short_line_max_chars: usize,
}

impl Default for ReflowOptions {
    fn default() -> Self {
        Self {
            short_line_max_words: 4,
            short_line_max_chars: 60,
        }
    }
}

/// Reflow page-marker interleaved text with default options.
pub fn reflow(raw: &str) -> String {
    reflow_with(raw, &ReflowOptions::default())
}

/// Reflow page-marker interleaved text.
///
/// Each line is trimmed, then:
/// - a blank line closes the current paragraph and is kept as a blank line;
/// - a page marker closes the current paragraph and is framed by blank lines;
/// - a content line is appended to the current paragraph, which is closed
///   afterwards unless the line looks like a wrapped fragment.
///
/// Runs of blank lines in the result are collapsed to one, and leading or
/// trailing blank lines are dropped. Input without any non-blank line yields
/// an empty string.
pub fn reflow_with(raw: &str, options: &ReflowOptions) -> String {
    let lines: Vec<&str> = raw.split('\n').map(str::trim).collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut paragraph = String::new();

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            flush(&mut paragraph, &mut out);
            out.push(String::new());
            continue;
        }

        if is_page_marker(line) {
            flush(&mut paragraph, &mut out);
            out.push(String::new());
            out.push((*line).to_string());
            out.push(String::new());
            continue;
        }

        let next = lines.get(i + 1).copied().filter(|next| !next.is_empty());
        let continues = continues_paragraph(line, next, options);

        if !paragraph.is_empty() {
            paragraph.push(' ');
        }
        paragraph.push_str(line);

        if !continues {
            flush(&mut paragraph, &mut out);
        }
    }
    flush(&mut paragraph, &mut out);

    collapse_blank_lines(out)
}

/// Decide whether `line` is a wrapped fragment whose paragraph goes on.
fn continues_paragraph(line: &str, next: Option<&str>, options: &ReflowOptions) -> bool {
    let is_very_short = line.split_whitespace().count() <= options.short_line_max_words
        && line.chars().count() < options.short_line_max_chars;
    let ends_with_punctuation = line.ends_with(TERMINAL_PUNCTUATION);
    let ends_with_comma = line.ends_with(',');
    let next_starts_with_capital = next
        .and_then(|next| next.chars().next())
        .is_some_and(char::is_uppercase);

    if is_very_short && !ends_with_punctuation && next.is_some_and(|next| !is_page_marker(next)) {
        return true;
    }

    ends_with_comma || (!ends_with_punctuation && !next_starts_with_capital && next.is_some())
}

fn flush(paragraph: &mut String, out: &mut Vec<String>) {
    let text = paragraph.trim();
    if !text.is_empty() {
        out.push(text.to_string());
    }
    paragraph.clear();
}

fn collapse_blank_lines(lines: Vec<String>) -> String {
    let mut kept: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if line.is_empty() && kept.last().is_none_or(|prev| prev.is_empty()) {
            continue;
        }
        kept.push(line);
    }
    while kept.last().is_some_and(|line| line.is_empty()) {
        kept.pop();
    }
    kept.join("\n")
}
