// ============================================================
// Layer 5 — Challenge Generator
// ============================================================
// Turns extracted concepts into comprehension questions.
//
// Candidate pool, built in this order:
//   - 3 random proper nouns     → 2 questions each
//   - 2 random numbers          → 1 question each
//   - 2 random quotes           → 2 questions each (only quotes
//                                 longer than 20 characters)
//   - 3 random technical terms  → 2 questions each
//   - 3 structural questions    (documents with 3+ paragraphs)
//   - 8 generic analytical questions
//
// The pool is deduplicated in first-seen order, shuffled and
// cut to 8. Documents with fewer than 2 paragraphs get the
// three fallback questions verbatim.
//
// All randomness comes from the caller's Rng, so a seeded
// generator makes the output reproducible.

use indexmap::IndexSet;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::analysis::concepts;
use crate::data::segmenter::Segmenter;
use crate::domain::insight::ChallengeSet;

pub const DEFAULT_MAX_QUESTIONS: usize = 8;

pub const FALLBACK_QUESTIONS: [&str; 3] = [
    "What is the main topic discussed in this document?",
    "What are the key points mentioned in the text?",
    "What conclusions can be drawn from this document?",
];

pub const STRUCTURAL_QUESTIONS: [&str; 3] = [
    "What is discussed in the opening section of the document?",
    "What are the main arguments presented in the middle sections?",
    "What conclusions are drawn in the final section?",
];

pub const ANALYTICAL_QUESTIONS: [&str; 8] = [
    "What is the author's main argument or thesis?",
    "What evidence does the author provide to support their claims?",
    "What are the key takeaways from this document?",
    "How does the author structure their argument?",
    "What examples or case studies are mentioned?",
    "What are the implications of the information presented?",
    "What questions does this document raise?",
    "How does this document relate to broader themes or issues?",
];

const SAMPLED_NOUNS: usize   = 3;
const SAMPLED_NUMBERS: usize = 2;
const SAMPLED_QUOTES: usize  = 2;
const SAMPLED_TERMS: usize   = 3;

/// Quotes must be longer than this to produce questions
const MIN_QUOTE_CHARS: usize = 20;

/// Characters of a quote shown inside a question
const QUOTE_PREVIEW_CHARS: usize = 50;

pub struct ChallengeGenerator {
    max_questions: usize,
    segmenter:     Segmenter,
}

impl ChallengeGenerator {
    pub fn new(max_questions: usize) -> Self {
        Self {
            max_questions,
            segmenter: Segmenter::default(),
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> ChallengeSet {
        let paragraphs = self.segmenter.segment(text);
        if paragraphs.len() < 2 {
            return fallback();
        }

        let found = concepts::extract(text);
        let mut pool: IndexSet<String> = IndexSet::new();

        for noun in found.proper_nouns.choose_multiple(rng, SAMPLED_NOUNS) {
            pool.insert(format!("What role does {noun} play in the document?"));
            pool.insert(format!("What information is provided about {noun}?"));
        }

        for number in found.numbers.choose_multiple(rng, SAMPLED_NUMBERS) {
            pool.insert(format!("What is the significance of {number} mentioned in the document?"));
        }

        for quote in found.quotes.choose_multiple(rng, SAMPLED_QUOTES) {
            if quote.chars().count() > MIN_QUOTE_CHARS {
                let preview: String = quote.chars().take(QUOTE_PREVIEW_CHARS).collect();
                pool.insert(format!("Who said or wrote: '{preview}...'?"));
                pool.insert(format!("What is the context of the quote: '{preview}...'?"));
            }
        }

        for term in found.technical_terms.choose_multiple(rng, SAMPLED_TERMS) {
            pool.insert(format!("How is the term '{term}' defined or explained in the document?"));
            pool.insert(format!("What is the importance of '{term}' in the context of this document?"));
        }

        if paragraphs.len() >= 3 {
            pool.extend(STRUCTURAL_QUESTIONS.iter().map(|q| q.to_string()));
        }
        pool.extend(ANALYTICAL_QUESTIONS.iter().map(|q| q.to_string()));

        let mut questions: Vec<String> = pool.into_iter().collect();
        questions.shuffle(rng);
        questions.truncate(self.max_questions);

        if questions.is_empty() {
            return fallback();
        }

        tracing::debug!("generated {} challenge questions", questions.len());
        ChallengeSet { questions }
    }
}

impl Default for ChallengeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_QUESTIONS)
    }
}

fn fallback() -> ChallengeSet {
    ChallengeSet {
        questions: FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    }
}
