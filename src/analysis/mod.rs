// ============================================================
// Layer 5 — Analysis Engine
// ============================================================
// The heuristic text-understanding engine. No model, no I/O:
// every operation is a pure function of the document text
// (plus an injected Rng for challenge generation).
//
//   lexicon.rs      — word sets, sentences, stopwords, phrases
//   relevance.rs    — paragraph and sentence scoring
//   concepts.rs     — proper nouns, numbers, quotes, terms
//   summarizer.rs   — extractive summary at upload time
//   synthesizer.rs  — extractive answers with justification
//   challenge.rs    — comprehension question generation
//   evaluator.rs    — grading of free-text answers
//
// Data flow:
//
//   Segmenter ──► relevance ──► synthesizer ──► evaluator
//       │
//       └──────► concepts ───► challenge
//
// TextAnalyzer below is the single entry point used by the
// application layer.

pub mod challenge;
pub mod concepts;
pub mod evaluator;
pub mod lexicon;
pub mod relevance;
pub mod summarizer;
pub mod synthesizer;

use rand::Rng;

use crate::domain::insight::{Answer, ChallengeSet, ConceptSet, Evaluation};
use crate::domain::traits::QuestionAnswerer;

use challenge::{ChallengeGenerator, DEFAULT_MAX_QUESTIONS};
use summarizer::{Summarizer, DEFAULT_SUMMARY_WORDS};
use synthesizer::{AnswerSynthesizer, DEFAULT_MAX_CONTEXTS};

/// Facade over the engine components, configured once and
/// reused for any number of documents.
pub struct TextAnalyzer {
    summarizer:  Summarizer,
    synthesizer: AnswerSynthesizer,
    challenges:  ChallengeGenerator,
}

impl TextAnalyzer {
    pub fn new(max_contexts: usize, summary_max_words: usize, max_questions: usize) -> Self {
        Self {
            summarizer:  Summarizer::new(summary_max_words),
            synthesizer: AnswerSynthesizer::new(max_contexts),
            challenges:  ChallengeGenerator::new(max_questions),
        }
    }

    /// Extractive summary of at most `summary_max_words` words
    pub fn summarize(&self, text: &str) -> String {
        self.summarizer.summarize(text)
    }

    /// Extractive answer to `question`
    pub fn answer(&self, text: &str, question: &str) -> Answer {
        self.synthesizer.answer(text, question)
    }

    pub fn extract_concepts(&self, text: &str) -> ConceptSet {
        concepts::extract(text)
    }

    /// Comprehension questions; sampling and shuffling draw from `rng`
    pub fn generate_challenge<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ChallengeSet {
        self.challenges.generate(text, rng)
    }

    /// Grade `user_answer` against this analyzer's own answer to `question`
    pub fn evaluate(&self, text: &str, question: &str, user_answer: &str) -> Evaluation {
        let reference = self.synthesizer.answer(text, question);
        evaluator::evaluate(&reference, text, user_answer)
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONTEXTS, DEFAULT_SUMMARY_WORDS, DEFAULT_MAX_QUESTIONS)
    }
}

impl QuestionAnswerer for TextAnalyzer {
    fn answer(&self, text: &str, question: &str) -> Answer {
        TextAnalyzer::answer(self, text, question)
    }
}
