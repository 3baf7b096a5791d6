//! Document statistics.

/// Average silent reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Counts over a reflowed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentStats {
    /// Whitespace-delimited tokens.
    pub words: usize,
    /// Unicode scalar values, whitespace included.
    pub characters: usize,
    /// Unicode scalar values, whitespace excluded.
    pub characters_no_whitespace: usize,
    /// Lines, as split on line endings.
    pub lines: usize,
    /// Maximal runs of non-blank lines.
    pub paragraphs: usize,
    /// `ceil(words / WORDS_PER_MINUTE)`.
    pub reading_minutes: usize,
}

impl DocumentStats {
    /// Compute statistics for `text`.
    pub fn compute(text: &str) -> Self {
        let words = text.split_whitespace().count();
        let characters = text.chars().count();
        let characters_no_whitespace = text.chars().filter(|c| !c.is_whitespace()).count();

        let mut lines = 0;
        let mut paragraphs = 0;
        let mut in_paragraph = false;
        for line in text.lines() {
            lines += 1;
            let blank = line.trim().is_empty();
            if !blank && !in_paragraph {
                paragraphs += 1;
            }
            in_paragraph = !blank;
        }

        Self {
            words,
            characters,
            characters_no_whitespace,
            lines,
            paragraphs,
            reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_all_zero() {
        assert_eq!(DocumentStats::compute(""), DocumentStats::default());
    }

    #[test]
    fn counts_words_and_characters() {
        let stats = DocumentStats::compute("Hello  world.\nBye");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.characters, 17);
        assert_eq!(stats.characters_no_whitespace, 14);
        assert_eq!(stats.lines, 2);
    }

    #[test]
    fn paragraphs_are_runs_of_non_blank_lines() {
        let text = "--- Page 1 ---\n\nFirst para.\nStill first.\n\n  \nSecond para.";
        let stats = DocumentStats::compute(text);
        assert_eq!(stats.paragraphs, 3);
        assert_eq!(stats.lines, 7);
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(DocumentStats::compute("word").reading_minutes, 1);
        assert_eq!(
            DocumentStats::compute(&"w ".repeat(200)).reading_minutes,
            1
        );
        assert_eq!(
            DocumentStats::compute(&"w ".repeat(201)).reading_minutes,
            2
        );
    }

    #[test]
    fn unicode_characters_counted_once() {
        let stats = DocumentStats::compute("café ünïcode");
        assert_eq!(stats.characters, 12);
        assert_eq!(stats.characters_no_whitespace, 11);
    }
}
