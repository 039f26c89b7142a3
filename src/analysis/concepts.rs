// ============================================================
// Layer 5 — Concept Extractor
// ============================================================
// Pulls four kinds of key concepts out of a document:
//
//   proper nouns     — Capitalised words inside sentences longer
//                      than 20 characters. Unique, first-seen
//                      order, at most 15.
//   numbers          — 4-digit integers, decimals and percentages,
//                      scan order, at most 10.
//   quotes           — Text between double quotes, scan order,
//                      at most 5.
//   technical terms  — Lowercased words of 6+ letters ranked by
//                      frequency; equal counts keep first-seen
//                      order. At most 10.

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::lexicon::split_sentences;
use crate::domain::insight::ConceptSet;

pub const MAX_PROPER_NOUNS: usize    = 15;
pub const MAX_NUMBERS: usize         = 10;
pub const MAX_QUOTES: usize          = 5;
pub const MAX_TECHNICAL_TERMS: usize = 10;

/// Sentences must be longer than this to contribute proper nouns
const MIN_SENTENCE_CHARS: usize = 20;

static PROPER_NOUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\b").expect("proper noun regex"));

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{4}\b|\b\d+\.\d+\b|\b\d+%").expect("number regex"));

static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("quote regex"));

static TERM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{6,}\b").expect("technical term regex"));

/// Extract every concept category from `text`.
pub fn extract(text: &str) -> ConceptSet {
    ConceptSet {
        proper_nouns:    proper_nouns(text),
        numbers:         numbers(text),
        quotes:          quotes(text),
        technical_terms: technical_terms(text),
    }
}

fn proper_nouns(text: &str) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for sentence in split_sentences(text, MIN_SENTENCE_CHARS) {
        seen.extend(PROPER_NOUN_RE.find_iter(sentence).map(|m| m.as_str()));
    }
    seen.into_iter()
        .take(MAX_PROPER_NOUNS)
        .map(str::to_string)
        .collect()
}

fn numbers(text: &str) -> Vec<String> {
    NUMBER_RE
        .find_iter(text)
        .take(MAX_NUMBERS)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn quotes(text: &str) -> Vec<String> {
    QUOTE_RE
        .captures_iter(text)
        .take(MAX_QUOTES)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn technical_terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut freq: IndexMap<&str, usize> = IndexMap::new();
    for m in TERM_RE.find_iter(&lower) {
        *freq.entry(m.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = freq.into_iter().collect();
    // Stable sort: equal counts stay in first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(MAX_TECHNICAL_TERMS)
        .map(|(word, _)| word.to_string())
        .collect()
}
