// ============================================================
// Layer 5 — Relevance Scorer
// ============================================================
// Ranks text against a question using word overlap plus a few
// cheap signals. Two granularities share the same building
// blocks:
//
// Paragraph level (context retrieval):
//   total = overlap
//         + 2 * density          (overlap / meaningful query words)
//         + length_bonus         (min(words / 100, 1.0))
//         + 0.5 per phrase category present (causal, result,
//           definitional), at most 1.5
//
// Sentence level (answer selection inside the context):
//   total = overlap
//         + 1 per phrase category present, where the
//           definitional category also includes "is" / "are"
//
// Words are compared as sets, so repeating a query word inside
// a unit does not raise its score. Anything scoring 0 is
// dropped before ranking.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::analysis::lexicon::{
    contains_any, meaningful_words, overlap, word_set, CAUSAL_PHRASES, CONTEXT_STOPWORDS,
    DEFINITION_PHRASES, RESULT_PHRASES, SENTENCE_DEFINITION_PHRASES, SENTENCE_RESULT_PHRASES,
    SENTENCE_STOPWORDS,
};
use crate::domain::text_unit::{ScoredUnit, TextUnit};

/// Bonus per phrase category at paragraph level
pub const PARAGRAPH_PATTERN_BONUS: f64 = 0.5;

/// Weight of the density term
pub const DENSITY_WEIGHT: f64 = 2.0;

/// Words at which the length bonus saturates
pub const LENGTH_BONUS_WORDS: f64 = 100.0;

/// Breakdown of a paragraph score, mostly useful for debugging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreParts {
    pub overlap:       usize,
    pub density:       f64,
    pub length_bonus:  f64,
    pub pattern_bonus: f64,
}

impl ScoreParts {
    pub fn total(&self) -> f64 {
        self.overlap as f64 + DENSITY_WEIGHT * self.density + self.length_bonus + self.pattern_bonus
    }
}

/// Score one paragraph against an already-filtered query word set.
pub fn score_unit(query_words: &HashSet<String>, unit: &TextUnit) -> ScoreParts {
    let unit_words = word_set(&unit.text);
    let overlap    = overlap(query_words, &unit_words);

    let density = if query_words.is_empty() {
        0.0
    } else {
        overlap as f64 / query_words.len() as f64
    };

    let length_bonus = (unit.word_count as f64 / LENGTH_BONUS_WORDS).min(1.0);

    let lower = unit.text.to_lowercase();
    let pattern_bonus = [&CAUSAL_PHRASES[..], &RESULT_PHRASES[..], &DEFINITION_PHRASES[..]]
        .iter()
        .filter(|phrases| contains_any(&lower, phrases))
        .count() as f64
        * PARAGRAPH_PATTERN_BONUS;

    ScoreParts { overlap, density, length_bonus, pattern_bonus }
}

/// Score every paragraph, drop zero scores and return the best
/// `top_k`, ranked by `ScoredUnit::ranking`.
pub fn rank_units(query: &str, units: &[TextUnit], top_k: usize) -> Vec<ScoredUnit> {
    let query_words = meaningful_words(query, &CONTEXT_STOPWORDS);

    let mut scored: Vec<ScoredUnit> = units
        .iter()
        .filter_map(|unit| {
            let parts = score_unit(&query_words, unit);
            let score = parts.total();
            tracing::debug!(
                "paragraph {} scored {:.3} (overlap={}, density={:.2}, length={:.2}, pattern={:.1})",
                unit.index,
                score,
                parts.overlap,
                parts.density,
                parts.length_bonus,
                parts.pattern_bonus,
            );
            (score > 0.0).then(|| ScoredUnit {
                score,
                index: unit.index,
                text:  unit.text.clone(),
            })
        })
        .collect();

    scored.sort_by(ScoredUnit::ranking);
    scored.truncate(top_k);
    scored
}

// ─── Sentence scoring ────────────────────────────────────────────────────────

/// A sentence of the context with its integer relevance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredSentence<'a> {
    pub score: u32,
    pub text:  &'a str,
}

impl ScoredSentence<'_> {
    /// Higher score first, equal scores ordered by sentence text descending.
    pub fn ranking(a: &ScoredSentence<'_>, b: &ScoredSentence<'_>) -> Ordering {
        b.score.cmp(&a.score).then_with(|| b.text.cmp(a.text))
    }
}

/// Score sentences for a question, keep the ones above zero,
/// best first.
pub fn score_sentences<'a>(question: &str, sentences: &[&'a str]) -> Vec<ScoredSentence<'a>> {
    let query_words = meaningful_words(question, &SENTENCE_STOPWORDS);

    let mut scored: Vec<ScoredSentence<'a>> = sentences
        .iter()
        .filter_map(|&text| {
            let overlap = overlap(&query_words, &word_set(text)) as u32;
            let lower   = text.to_lowercase();
            let pattern = [
                &SENTENCE_DEFINITION_PHRASES[..],
                &CAUSAL_PHRASES[..],
                &SENTENCE_RESULT_PHRASES[..],
            ]
            .iter()
            .filter(|phrases| contains_any(&lower, phrases))
            .count() as u32;

            let score = overlap + pattern;
            (score > 0).then_some(ScoredSentence { score, text })
        })
        .collect();

    scored.sort_by(ScoredSentence::ranking);
    scored
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn unit(index: usize, text: &str) -> TextUnit {
        TextUnit::new(index, text)
    }

    #[test]
    fn test_score_components() {
        let query = meaningful_words("What is the capital of France?", &CONTEXT_STOPWORDS);
        let parts = score_unit(&query, &unit(0, "Paris is the capital of France and its largest city."));

        assert_eq!(parts.overlap, 2);
        assert!((parts.density - 1.0).abs() < 1e-9);
        assert!((parts.length_bonus - 0.10).abs() < 1e-9);
        assert_eq!(parts.pattern_bonus, 0.0);
        assert!((parts.total() - 4.10).abs() < 1e-9);
    }

    #[test]
    fn test_pattern_bonus_caps_at_three_categories() {
        let query = HashSet::new();
        let parts = score_unit(
            &query,
            &unit(0, "The drop happened because of frost; the result shows it; frost means cold."),
        );
        assert!((parts.pattern_bonus - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_length_bonus_saturates() {
        let long = "word ".repeat(250);
        let parts = score_unit(&HashSet::new(), &unit(0, &long));
        assert_eq!(parts.length_bonus, 1.0);
    }

    #[test]
    fn test_score_is_monotonic_in_overlap() {
        let query = meaningful_words("river flood spring", &CONTEXT_STOPWORDS);
        // Same word count, no pattern phrases, different overlap
        let none = score_unit(&query, &unit(0, "alpha bravo charlie delta"));
        let one  = score_unit(&query, &unit(1, "river bravo charlie delta"));
        let two  = score_unit(&query, &unit(2, "river flood charlie delta"));

        assert!(one.total() > none.total());
        assert!(two.total() > one.total());
    }

    #[test]
    fn test_zero_scoring_units_are_excluded() {
        let units = vec![unit(0, ""), unit(1, "Rivers flood after heavy spring rain.")];
        let ranked = rank_units("river", &units, 3);

        // The empty unit has no overlap, no pattern and no length
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 1);
        assert!(ranked.iter().all(|s| s.score > 0.0));
    }

    #[test]
    fn test_rank_units_orders_and_truncates() {
        let units = vec![
            unit(0, "Nothing relevant is mentioned in this opening paragraph."),
            unit(1, "The capital of France is Paris."),
            unit(2, "France borders Spain and Germany."),
            unit(3, "Another unrelated paragraph about gardening."),
        ];
        let ranked = rank_units("What is the capital of France?", &units, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[1].index, 2);
    }

    #[test]
    fn test_equal_scores_prefer_later_paragraphs() {
        let units = vec![
            unit(0, "Glaciers carve valleys slowly."),
            unit(1, "Glaciers carve valleys slowly."),
        ];
        let ranked = rank_units("glaciers", &units, 3);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[1].index, 0);
    }

    #[test]
    fn test_query_without_meaningful_words_still_ranks_by_length() {
        let units  = vec![unit(0, "Some paragraph with several plain words.")];
        let ranked = rank_units("what is the", &units, 3);
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].score - 0.06).abs() < 1e-9);
    }

    #[test]
    fn test_sentence_scores_use_integer_bonuses() {
        let sentences = vec![
            "Paris is the capital of France",
            "The Eiffel Tower was built in 1889",
            "Rain fell because of the storm",
        ];
        let scored = score_sentences("What is the capital of France?", &sentences);

        assert_eq!(scored.len(), 2);
        // overlap 2 + copula "is" 1
        assert_eq!(scored[0], ScoredSentence { score: 3, text: "Paris is the capital of France" });
        // causal phrase only
        assert_eq!(scored[1].score, 1);
    }

    #[test]
    fn test_sentence_ties_break_by_text_descending() {
        let sentences = vec!["apple orchard notes", "zebra crossing notes"];
        let scored    = score_sentences("notes", &sentences);
        assert_eq!(scored[0].text, "zebra crossing notes");
        assert_eq!(scored[1].text, "apple orchard notes");
    }
}
