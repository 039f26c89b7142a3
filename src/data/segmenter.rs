// ============================================================
// Layer 4 — Paragraph Segmenter
// ============================================================
// Splits document text into paragraph-level TextUnits.
//
// Rules:
//   - Lines are trimmed; consecutive non-blank lines form one
//     paragraph, joined by single spaces
//   - A blank line closes the current paragraph
//   - A pending paragraph at end of input is flushed
//   - Paragraphs of 20 characters or fewer are dropped, and
//     indices are assigned after dropping
//
// Example:
//   "Intro line one\nline two\n\nshort\n\nA longer closing paragraph."
//   → [0] "Intro line one line two"
//     [1] "A longer closing paragraph."
//     ("short" is too short to keep)

use crate::domain::text_unit::TextUnit;

/// Paragraphs must be strictly longer than this many characters.
pub const MIN_PARAGRAPH_CHARS: usize = 20;

pub struct Segmenter {
    /// Trimmed paragraphs of this many characters or fewer are dropped
    min_chars: usize,
}

impl Segmenter {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Split text into ordered paragraphs. Empty or all-blank
    /// input yields an empty Vec.
    pub fn segment(&self, text: &str) -> Vec<TextUnit> {
        let mut groups: Vec<String> = Vec::new();
        let mut pending: Vec<&str>  = Vec::new();

        for line in text.split('\n') {
            let line = line.trim();
            if !line.is_empty() {
                pending.push(line);
            } else if !pending.is_empty() {
                groups.push(pending.join(" "));
                pending.clear();
            }
        }
        if !pending.is_empty() {
            groups.push(pending.join(" "));
        }

        groups
            .into_iter()
            .filter(|p| p.trim().chars().count() > self.min_chars)
            .enumerate()
            .map(|(index, text)| TextUnit::new(index, text))
            .collect()
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(MIN_PARAGRAPH_CHARS)
    }
}
