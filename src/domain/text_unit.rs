// ============================================================
// Layer 3 — Text Units
// ============================================================
// A TextUnit is one paragraph of a document: consecutive
// non-blank lines joined by single spaces. Units are produced
// fresh by the Segmenter on every call and never cached.
//
// A ScoredUnit pairs a unit with its relevance score against
// a query. Ranking order is score descending, then paragraph
// index descending (see `ScoredUnit::ranking`).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One paragraph of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextUnit {
    /// Position among the retained paragraphs (0-based)
    pub index: usize,

    /// Lines of the paragraph joined by single spaces
    pub text: String,

    /// Whitespace-separated word count of `text`
    pub word_count: usize,
}

impl TextUnit {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        let text       = text.into();
        let word_count = text.split_whitespace().count();
        Self { index, text, word_count }
    }
}

/// A paragraph that scored above zero for some query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredUnit {
    /// Composite relevance score, always > 0 for retained units
    pub score: f64,

    pub index: usize,

    pub text: String,
}

impl ScoredUnit {
    /// Comparator used to rank candidates: higher score first,
    /// equal scores ordered by higher paragraph index first.
    pub fn ranking(a: &ScoredUnit, b: &ScoredUnit) -> Ordering {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.index.cmp(&a.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_is_whitespace_based() {
        let unit = TextUnit::new(0, "one  two\tthree");
        assert_eq!(unit.word_count, 3);
    }

    #[test]
    fn test_ranking_breaks_ties_by_descending_index() {
        let mut units = vec![
            ScoredUnit { score: 1.0, index: 0, text: "a".into() },
            ScoredUnit { score: 2.0, index: 1, text: "b".into() },
            ScoredUnit { score: 1.0, index: 2, text: "c".into() },
        ];
        units.sort_by(ScoredUnit::ranking);

        let order: Vec<usize> = units.iter().map(|u| u.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }
}
