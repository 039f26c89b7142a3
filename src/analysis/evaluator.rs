// ============================================================
// Layer 5 — Answer Evaluator
// ============================================================
// Grades a user's free-text answer by word overlap:
//
//   correct_score  = |user ∩ reference| / max(1, |reference|)
//   document_score = |user ∩ document|  / min(max(1, |document|), 100)
//   score          = 0.7 * correct_score + 0.3 * document_score
//
// The reference is the synthesizer's own answer to the same
// question. Capping the document denominator at 100 keeps long
// documents from crushing the second term.

use crate::analysis::lexicon::{overlap, word_set};
use crate::domain::insight::{Answer, Evaluation, FeedbackTier};

pub const REFERENCE_WEIGHT: f64 = 0.7;
pub const DOCUMENT_WEIGHT: f64  = 0.3;

/// Upper bound of the document-vocabulary denominator
pub const DOCUMENT_VOCABULARY_CAP: usize = 100;

/// Overlap score of `user_answer` against a reference answer text
/// and the full document text.
pub fn score(user_answer: &str, reference: &str, document_text: &str) -> f64 {
    let user_words      = word_set(user_answer);
    let reference_words = word_set(reference);
    let document_words  = word_set(document_text);

    let correct_score = overlap(&user_words, &reference_words) as f64
        / reference_words.len().max(1) as f64;
    let document_score = overlap(&user_words, &document_words) as f64
        / document_words.len().clamp(1, DOCUMENT_VOCABULARY_CAP) as f64;

    REFERENCE_WEIGHT * correct_score + DOCUMENT_WEIGHT * document_score
}

/// Grade `user_answer` against an already computed reference answer.
pub fn evaluate(reference: &Answer, document_text: &str, user_answer: &str) -> Evaluation {
    let score = score(user_answer, &reference.answer, document_text);
    let tier  = FeedbackTier::from_score(score);

    Evaluation {
        tier,
        feedback:      tier.message().to_string(),
        justification: reference.justification.clone(),
        score,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: &str = "Paris is the capital of France. It has a population of 2.1 million. The Eiffel Tower was built in 1889.";

    fn reference() -> Answer {
        Answer::new("Paris is the capital of France.", "Based on paragraph 1.")
    }

    #[test]
    fn test_full_overlap_is_excellent() {
        let eval = evaluate(&reference(), PARIS, "Paris is the capital of France");

        // 0.7 * 6/6 + 0.3 * 6/19
        let expected = 0.7 + 0.3 * 6.0 / 19.0;
        assert!((eval.score - expected).abs() < 1e-9);
        assert_eq!(eval.tier, FeedbackTier::Excellent);
        assert_eq!(eval.justification, "Based on paragraph 1.");
    }

    #[test]
    fn test_single_word_answer_scores_low() {
        let eval = evaluate(&reference(), PARIS, "Paris");
        let expected = 0.7 / 6.0 + 0.3 / 19.0;
        assert!((eval.score - expected).abs() < 1e-9);
        assert_eq!(eval.tier, FeedbackTier::NeedsImprovement);
    }

    #[test]
    fn test_no_shared_words_scores_zero() {
        let eval = evaluate(&reference(), PARIS, "bananas grow quickly");
        assert_eq!(eval.score, 0.0);
        assert_eq!(eval.tier, FeedbackTier::NeedsImprovement);
        assert_eq!(eval.feedback, FeedbackTier::NeedsImprovement.message());
    }

    #[test]
    fn test_empty_inputs_do_not_divide_by_zero() {
        assert_eq!(score("", "", ""), 0.0);
        assert_eq!(score("anything", "", ""), 0.0);
    }

    #[test]
    fn test_document_denominator_is_capped() {
        // 200 distinct document words; the user matches 50 of them
        let document: Vec<String> = (0..200).map(|i| format!("w{i}")).collect();
        let user: Vec<String>     = (0..50).map(|i| format!("w{i}")).collect();

        let s = score(&user.join(" "), "", &document.join(" "));
        // reference term is 0, document term is 0.3 * 50/100
        assert!((s - 0.15).abs() < 1e-9);
    }
}
