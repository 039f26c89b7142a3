// ============================================================
// Layer 3 — Analysis Results
// ============================================================
// Plain values returned by the analysis engine. None of them
// carry references back into the document; they are built
// per call and handed to the caller by value.

use serde::{Deserialize, Serialize};

/// An extractive answer plus a pointer to where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Sentence(s) copied from the document, ending with a period
    pub answer: String,

    /// Which paragraph(s) contributed, with a short excerpt
    pub justification: String,
}

impl Answer {
    pub fn new(answer: impl Into<String>, justification: impl Into<String>) -> Self {
        Self {
            answer:        answer.into(),
            justification: justification.into(),
        }
    }
}

/// Key concepts found in a document.
///
/// Every list is bounded: 15 proper nouns, 10 numbers,
/// 5 quotes and 10 technical terms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptSet {
    /// Capitalised words, in first-seen order
    pub proper_nouns: Vec<String>,

    /// Years, decimals and percentages, in scan order
    pub numbers: Vec<String>,

    /// Double-quoted spans without the quotes, in scan order
    pub quotes: Vec<String>,

    /// Lowercased words of 6+ letters, most frequent first
    pub technical_terms: Vec<String>,
}

impl ConceptSet {
    pub fn is_empty(&self) -> bool {
        self.proper_nouns.is_empty()
            && self.numbers.is_empty()
            && self.quotes.is_empty()
            && self.technical_terms.is_empty()
    }
}

/// Up to eight distinct comprehension questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSet {
    pub questions: Vec<String>,
}

impl ChallengeSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

// ─── Feedback tiers ──────────────────────────────────────────────────────────
/// Categorical grade derived from an evaluation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Excellent,
    Good,
    Partial,
    NeedsImprovement,
}

impl FeedbackTier {
    /// Map a score to its tier. Thresholds are strict:
    /// exactly 0.7 is Good, exactly 0.5 is Partial, exactly 0.3
    /// needs improvement.
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            FeedbackTier::Excellent
        } else if score > 0.5 {
            FeedbackTier::Good
        } else if score > 0.3 {
            FeedbackTier::Partial
        } else {
            FeedbackTier::NeedsImprovement
        }
    }

    /// Short label used in reports and plain-text output
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent        => "excellent",
            FeedbackTier::Good             => "good",
            FeedbackTier::Partial          => "partial",
            FeedbackTier::NeedsImprovement => "needs improvement",
        }
    }

    /// Feedback sentence shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => {
                "Excellent! Your answer aligns well with the document content and demonstrates good understanding."
            }
            FeedbackTier::Good => {
                "Good answer! You captured important points from the document. Consider including more specific details."
            }
            FeedbackTier::Partial => {
                "Your answer shows some understanding but could be more comprehensive. Review the document for additional details."
            }
            FeedbackTier::NeedsImprovement => {
                "Your answer needs improvement. Please refer to the document more closely and include relevant information."
            }
        }
    }
}

/// Grade of one user answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub tier: FeedbackTier,

    /// `tier.message()`, kept as a field for serialisation
    pub feedback: String,

    /// Justification of the reference answer, unchanged
    pub justification: String,

    /// 0.7 * overlap with the reference + 0.3 * overlap with the document
    pub score: f64,
}

/// One row of a batch evaluation, as returned by the evaluate use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub question_index: usize,
    pub question:       String,
    pub user_answer:    String,
    pub tier:           FeedbackTier,
    pub feedback:       String,
    pub justification:  String,
    pub score:          f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_strict() {
        assert_eq!(FeedbackTier::from_score(0.71), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::from_score(0.70), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_score(0.69), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_score(0.51), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_score(0.50), FeedbackTier::Partial);
        assert_eq!(FeedbackTier::from_score(0.49), FeedbackTier::Partial);
        assert_eq!(FeedbackTier::from_score(0.31), FeedbackTier::Partial);
        assert_eq!(FeedbackTier::from_score(0.30), FeedbackTier::NeedsImprovement);
        assert_eq!(FeedbackTier::from_score(0.29), FeedbackTier::NeedsImprovement);
        assert_eq!(FeedbackTier::from_score(0.0), FeedbackTier::NeedsImprovement);
    }

    #[test]
    fn test_tier_serialises_in_snake_case() {
        let json = serde_json::to_string(&FeedbackTier::NeedsImprovement).unwrap();
        assert_eq!(json, "\"needs_improvement\"");
    }

    #[test]
    fn test_empty_concept_set() {
        assert!(ConceptSet::default().is_empty());
    }
}
