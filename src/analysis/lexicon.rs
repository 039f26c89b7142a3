// ============================================================
// Layer 5 — Lexicon
// ============================================================
// Tokenisation, sentence splitting, stopword lists and the
// phrase categories that earn pattern bonuses. Every scorer in
// this layer goes through these helpers so they all agree on
// what a "word" and a "sentence" are.
//
//   word      — a `\w+` match in the lowercased text
//   sentence  — a trimmed piece between runs of `.`, `!` or `?`

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("word regex"));

/// Question and function words ignored when matching paragraphs.
pub const CONTEXT_STOPWORDS: [&str; 36] = [
    "what", "who", "when", "where", "why", "how",
    "is", "are", "was", "were", "do", "does", "did",
    "can", "could", "should", "would", "will",
    "the", "a", "an", "and", "or", "but",
    "in", "on", "at", "to", "for", "of", "with", "by",
    "this", "that", "these", "those",
];

/// Stopwords used when ranking sentences inside the context.
/// Same as CONTEXT_STOPWORDS minus the demonstratives.
pub const SENTENCE_STOPWORDS: [&str; 32] = [
    "what", "who", "when", "where", "why", "how",
    "is", "are", "was", "were", "do", "does", "did",
    "can", "could", "should", "would", "will",
    "the", "a", "an", "and", "or", "but",
    "in", "on", "at", "to", "for", "of", "with", "by",
];

// ─── Phrase categories ───────────────────────────────────────────────────────
// Matched as plain substrings of the lowercased text, so "is"
// also fires inside "this" or "raises".

pub const CAUSAL_PHRASES: [&str; 4] = ["because", "due to", "reason", "caused by"];

pub const RESULT_PHRASES: [&str; 5] = ["result", "conclusion", "shows", "indicates", "demonstrates"];

pub const DEFINITION_PHRASES: [&str; 4] = ["define", "definition", "means", "refers to"];

/// Sentence-level definitional cues include the bare copulas
pub const SENTENCE_DEFINITION_PHRASES: [&str; 6] =
    ["define", "definition", "means", "refers to", "is", "are"];

pub const SENTENCE_RESULT_PHRASES: [&str; 4] = ["result", "conclusion", "shows", "indicates"];

/// Lowercased set of `\w+` tokens in `text`.
pub fn word_set(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Words of `query` that are not in `stopwords`.
pub fn meaningful_words(query: &str, stopwords: &[&str]) -> HashSet<String> {
    word_set(query)
        .into_iter()
        .filter(|w| !stopwords.contains(&w.as_str()))
        .collect()
}

/// Split on runs of `.!?`, trim each piece and keep the ones
/// strictly longer than `min_chars` characters.
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<&str> {
    text.split(|c: char| matches!(c, '.' | '!' | '?'))
        .map(str::trim)
        .filter(|s| s.chars().count() > min_chars)
        .collect()
}

/// True when any phrase occurs as a substring of `lower`.
/// `lower` must already be lowercased.
pub fn contains_any(lower: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| lower.contains(p))
}

/// Number of words of `a` that also appear in `b`.
pub fn overlap(a: &HashSet<String>, b: &HashSet<String>) -> usize {
    a.intersection(b).count()
}
