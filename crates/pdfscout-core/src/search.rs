//! Literal, case-insensitive search over a reflowed document.
//!
//! The query is always treated as literal text: every regex metacharacter is
//! escaped before the pattern is built. Matches are non-overlapping and
//! numbered by their position in the document (the match *ordinal*).
//!
//! A query that cannot be turned into a pattern (for example one that blows
//! the regex size limit) never fails the caller: it is logged and behaves as
//! a query with zero matches.

use regex::{Regex, RegexBuilder};

/// Upper bound on the compiled size of a search pattern, in bytes.
pub const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Escape `query` so that it matches only itself when used as a pattern.
pub fn escape_literal(query: &str) -> String {
    regex::escape(query)
}

/// Build the case-insensitive literal matcher for `query`.
///
/// Returns `None` for a blank query, or when the pattern cannot be built.
pub fn literal_matcher(query: &str) -> Option<Regex> {
    build_matcher(query, PATTERN_SIZE_LIMIT)
}

fn build_matcher(query: &str, size_limit: usize) -> Option<Regex> {
    if query.trim().is_empty() {
        return None;
    }

    match RegexBuilder::new(&escape_literal(query))
        .case_insensitive(true)
        .size_limit(size_limit)
        .build()
    {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!(
                query_len = query.len(),
                error = %err,
                "search pattern could not be built; reporting zero matches"
            );
            None
        }
    }
}

/// A single match in the document, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSpan {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
    /// Zero-based rank of this match in document order.
    pub ordinal: usize,
}

/// Find every non-overlapping occurrence of `query` in `document`.
pub fn find_matches(document: &str, query: &str) -> Vec<MatchSpan> {
    let Some(re) = literal_matcher(query) else {
        return Vec::new();
    };

    re.find_iter(document)
        .enumerate()
        .map(|(ordinal, m)| MatchSpan {
            start: m.start(),
            end: m.end(),
            ordinal,
        })
        .collect()
}

/// Count the non-overlapping, case-insensitive occurrences of `query`.
///
/// A blank query counts zero.
pub fn count_matches(document: &str, query: &str) -> usize {
    match literal_matcher(query) {
        Some(re) => re.find_iter(document).count(),
        None => 0,
    }
}

/// One piece of an [`AnnotatedView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Segment {
    /// Text outside any match.
    Plain { start: usize, end: usize },
    /// A match occurrence.
    Match {
        start: usize,
        end: usize,
        ordinal: usize,
        active: bool,
    },
}

impl Segment {
    /// Byte range of this segment in the document.
    pub fn range(&self) -> std::ops::Range<usize> {
        match *self {
            Segment::Plain { start, end } | Segment::Match { start, end, .. } => start..end,
        }
    }

    /// The slice of `document` covered by this segment.
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.range()]
    }
}

/// A document split into plain and matched segments.
///
/// Segments are contiguous, in order, and cover the whole document. The match
/// whose ordinal equals the current match index is flagged `active`. The
/// view only stores offsets so each renderer can escape the text its own way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotatedView {
    /// Segments in document order.
    pub segments: Vec<Segment>,
    /// Total number of matches.
    pub match_count: usize,
    /// Ordinal of the active match, if it exists.
    pub active: Option<usize>,
}

impl AnnotatedView {
    /// Build a view over a document of `len` bytes from its matches.
    pub fn from_matches(len: usize, matches: &[MatchSpan], current: usize) -> Self {
        let mut segments = Vec::with_capacity(matches.len() * 2 + 1);
        let mut cursor = 0;
        for m in matches {
            if m.start > cursor {
                segments.push(Segment::Plain {
                    start: cursor,
                    end: m.start,
                });
            }
            segments.push(Segment::Match {
                start: m.start,
                end: m.end,
                ordinal: m.ordinal,
                active: m.ordinal == current,
            });
            cursor = m.end;
        }
        if cursor < len {
            segments.push(Segment::Plain { start: cursor, end: len });
        }

        Self {
            segments,
            match_count: matches.len(),
            active: (current < matches.len()).then_some(current),
        }
    }

    /// Iterate over only the match segments.
    pub fn matches(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Match { .. }))
    }

    /// Byte range of the active match.
    pub fn active_range(&self) -> Option<std::ops::Range<usize>> {
        self.segments.iter().find_map(|segment| match *segment {
            Segment::Match {
                start,
                end,
                active: true,
                ..
            } => Some(start..end),
            _ => None,
        })
    }

    /// Zero-based line number of the active match, for scrolling it into view.
    pub fn active_line(&self, document: &str) -> Option<usize> {
        self.active_range()
            .map(|range| document[..range.start].matches('\n').count())
    }
}

/// Annotate every occurrence of `query`, flagging ordinal `current` active.
pub fn annotate(document: &str, query: &str, current: usize) -> AnnotatedView {
    let matches = find_matches(document, query);
    AnnotatedView::from_matches(document.len(), &matches, current)
}

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Direction {
    Next,
    Previous,
}

/// Step the current match index with wraparound.
///
/// `Next` from the last match returns to 0; `Previous` from 0 goes to the
/// last match. With no matches the index is returned unchanged.
pub fn navigate(direction: Direction, match_count: usize, current: usize) -> usize {
    if match_count == 0 {
        return current;
    }
    let last = match_count - 1;
    match direction {
        Direction::Next if current >= last => 0,
        Direction::Next => current + 1,
        Direction::Previous if current == 0 => last,
        Direction::Previous => (current - 1).min(last),
    }
}

/// Query, match count, and current match for one document.
///
/// The current index resets to 0 whenever the query or the document changes
/// and otherwise only moves through [`navigate`](SearchState::navigate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    match_count: usize,
    current: usize,
}

impl SearchState {
    /// An empty search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query and recount its matches in `document`.
    pub fn set_query(&mut self, document: &str, query: impl Into<String>) {
        self.query = query.into();
        self.match_count = count_matches(document, &self.query);
        self.current = 0;
    }

    /// Recount the current query against a replacement document.
    pub fn refresh(&mut self, document: &str) {
        self.match_count = count_matches(document, &self.query);
        self.current = 0;
    }

    /// Drop the query entirely.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Move the current match one step and return the new index.
    pub fn navigate(&mut self, direction: Direction) -> usize {
        self.current = navigate(direction, self.match_count, self.current);
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.navigate(Direction::Next)
    }

    pub fn previous(&mut self) -> usize {
        self.navigate(Direction::Previous)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Index of the current match. Always 0 when there are no matches.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether the query has any non-whitespace content.
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Next/previous navigation is only offered for a query with matches.
    pub fn navigation_enabled(&self) -> bool {
        self.has_query() && self.match_count > 0
    }

    /// `"<n> of <total>"`, or `"0 matches"`.
    pub fn position_label(&self) -> String {
        if self.match_count > 0 {
            format!("{} of {}", self.current + 1, self.match_count)
        } else {
            "0 matches".to_string()
        }
    }

    /// Annotate `document` with this state's query and current match.
    pub fn annotate(&self, document: &str) -> AnnotatedView {
        annotate(document, &self.query, self.current)
    }
}
