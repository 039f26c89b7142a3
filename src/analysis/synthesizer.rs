// ============================================================
// Layer 5 — Answer Synthesizer
// ============================================================
// Builds an extractive answer in five steps:
//
//   1. Rank paragraphs against the question, keep the top 3
//   2. Join them (in ranked order) into one context blob
//   3. Rank the blob's sentences and take the best one, plus
//      up to two runners-up scoring at least 70% of the best
//   4. If the answer merely echoes the question, swap it for
//      the first relevant context sentence that does not
//   5. Attach a justification naming the top paragraph
//
// Every answer is verbatim text from the document, ending in
// a period. Nothing here can fail: missing context or missing
// sentences produce fixed fallback strings.

use std::collections::HashSet;

use crate::analysis::concepts;
use crate::analysis::lexicon::{
    meaningful_words, split_sentences, word_set, SENTENCE_STOPWORDS,
};
use crate::analysis::relevance::{rank_units, score_sentences};
use crate::data::segmenter::Segmenter;
use crate::domain::insight::Answer;
use crate::domain::text_unit::ScoredUnit;

pub const DEFAULT_MAX_CONTEXTS: usize = 3;

pub const NO_CONTEXT_ANSWER: &str =
    "I couldn't find relevant information to answer this question in the document.";

pub const NO_CONTEXT_JUSTIFICATION: &str =
    "No relevant context found in the document for this question.";

pub const NO_SENTENCE_ANSWER: &str =
    "I cannot find relevant information in the document to answer this question.";

/// Context sentences must be longer than this
const MIN_SENTENCE_CHARS: usize = 10;

/// Runners-up must reach this fraction of the top sentence score
const COMBINE_RATIO: f64 = 0.7;

/// Runners-up considered after the top sentence
const MAX_EXTRA_SENTENCES: usize = 2;

/// Question coverage above which an answer may be an echo
const ECHO_COVERAGE: f64 = 0.8;

/// Replacement sentences must cover less of the question than this
const REPLACEMENT_COVERAGE: f64 = 0.6;

/// Characters of the top paragraph quoted in the justification
const EXCERPT_CHARS: usize = 150;

pub struct AnswerSynthesizer {
    max_contexts: usize,
    segmenter:    Segmenter,
}

impl AnswerSynthesizer {
    pub fn new(max_contexts: usize) -> Self {
        Self {
            max_contexts,
            segmenter: Segmenter::default(),
        }
    }

    /// Answer `question` from `text`.
    pub fn answer(&self, text: &str, question: &str) -> Answer {
        let paragraphs = self.segmenter.segment(text);
        let contexts   = rank_units(question, &paragraphs, self.max_contexts);

        if contexts.is_empty() {
            return Answer::new(NO_CONTEXT_ANSWER, NO_CONTEXT_JUSTIFICATION);
        }

        let context = contexts
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let answer = contextual_answer(&context, question);
        let answer = guard_against_echo(question, answer, &context);

        let mut answer = answer.trim().to_string();
        if !answer.ends_with('.') {
            answer.push('.');
        }

        Answer::new(answer, justification(&contexts))
    }
}

impl Default for AnswerSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONTEXTS)
    }
}

/// Pick the sentence(s) of `context` that best answer `question`.
fn contextual_answer(context: &str, question: &str) -> String {
    let sentences = split_sentences(context.trim(), MIN_SENTENCE_CHARS);
    if sentences.is_empty() {
        return NO_SENTENCE_ANSWER.to_string();
    }

    let scored = score_sentences(question, &sentences);

    if let Some((best, rest)) = scored.split_first() {
        let threshold = best.score as f64 * COMBINE_RATIO;
        let mut combined = best.text.to_string();
        for runner_up in rest.iter().take(MAX_EXTRA_SENTENCES) {
            if runner_up.score as f64 >= threshold {
                combined.push(' ');
                combined.push_str(runner_up.text);
            }
        }
        return combined;
    }

    // Nothing scored: first sentence mentioning any question keyword
    let keywords = meaningful_words(question, &SENTENCE_STOPWORDS);
    sentences
        .iter()
        .find(|s| {
            let lower = s.to_lowercase();
            keywords.iter().any(|k| lower.contains(k.as_str()))
        })
        .unwrap_or(&sentences[0])
        .to_string()
}

/// Share of `question_words` present in `words`. An empty question
/// covers nothing.
fn coverage(question_words: &HashSet<String>, words: &HashSet<String>) -> f64 {
    let hits = question_words.intersection(words).count();
    hits as f64 / question_words.len().max(1) as f64
}

/// True when `answer` names a proper noun or a number that the
/// question does not mention.
fn adds_key_concept(question_words: &HashSet<String>, answer: &str) -> bool {
    let found = concepts::extract(answer);
    found
        .proper_nouns
        .iter()
        .chain(found.numbers.iter())
        .any(|c| word_set(c).iter().any(|w| !question_words.contains(w)))
}

/// Replace an answer that only restates the question.
///
/// An answer is an echo when it covers more than 80% of the
/// question's words and names no proper noun or number of its
/// own. Padding with ordinary words does not count as content.
/// The replacement is the first context sentence covering less
/// than 60% of the question that still scores above zero for it;
/// without one the answer is kept.
fn guard_against_echo(question: &str, answer: String, context: &str) -> String {
    let question_words = word_set(question);

    if coverage(&question_words, &word_set(&answer)) <= ECHO_COVERAGE
        || adds_key_concept(&question_words, &answer)
    {
        return answer;
    }

    tracing::debug!("answer echoes the question, looking for an alternative");
    split_sentences(context, MIN_SENTENCE_CHARS)
        .into_iter()
        .find(|&s| {
            coverage(&question_words, &word_set(s)) < REPLACEMENT_COVERAGE
                && !score_sentences(question, &[s]).is_empty()
        })
        .map(str::to_string)
        .unwrap_or(answer)
}

/// "Based on the document content, particularly from paragraph N..."
/// followed by an excerpt of the top-ranked paragraph.
fn justification(contexts: &[ScoredUnit]) -> String {
    let top = &contexts[0];

    let mut out = String::from("Based on the document content, particularly from ");
    if contexts.len() == 1 {
        out.push_str(&format!("paragraph {}", top.index + 1));
    } else {
        out.push_str(&format!(
            "paragraphs {} and {} other related sections",
            top.index + 1,
            contexts.len() - 1
        ));
    }

    let excerpt: String = top.text.chars().take(EXCERPT_CHARS).collect();
    out.push_str(&format!(". The relevant content includes: \"{}...\"", excerpt));
    out
}
