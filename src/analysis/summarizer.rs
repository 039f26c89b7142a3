// ============================================================
// Layer 5 — Extractive Summarizer
// ============================================================
// Produces the summary shown right after upload:
//
//   - sentences shorter than 21 characters are ignored
//   - the first sentence is always included
//   - then up to 3 sentences starting at the 1/3 mark, each
//     only if the running word count stays within the limit
//   - the middle window never starts before sentence 1, so
//     short documents don't repeat the first sentence
//
// Sentences are joined with ". " and the summary ends with a
// period.

use crate::analysis::lexicon::split_sentences;

pub const DEFAULT_SUMMARY_WORDS: usize = 150;

pub const NO_SUMMARY: &str = "Unable to generate summary from this document.";

const MIN_SENTENCE_CHARS: usize = 20;

/// Sentences taken from the middle of the document
const MIDDLE_SENTENCES: usize = 3;

pub struct Summarizer {
    max_words: usize,
}

impl Summarizer {
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    pub fn summarize(&self, text: &str) -> String {
        let sentences = split_sentences(text, MIN_SENTENCE_CHARS);
        let Some(first) = sentences.first() else {
            return NO_SUMMARY.to_string();
        };

        let mut chosen      = vec![*first];
        let mut total_words = first.split_whitespace().count();

        let middle_start = sentences.len() / 3;
        let middle_end   = (middle_start + MIDDLE_SENTENCES).min(sentences.len());

        // Index 0 is already in the summary
        for sentence in sentences.iter().copied().take(middle_end).skip(middle_start.max(1)) {
            if total_words >= self.max_words {
                break;
            }
            let words = sentence.split_whitespace().count();
            if total_words + words <= self.max_words {
                chosen.push(sentence);
                total_words += words;
            }
        }

        let mut summary = chosen.join(". ");
        if !summary.ends_with('.') {
            summary.push('.');
        }
        summary
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_WORDS)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_document_does_not_repeat_first_sentence() {
        let text = "Paris is the capital of France. The Eiffel Tower was built in 1889.";
        assert_eq!(
            Summarizer::default().summarize(text),
            "Paris is the capital of France. The Eiffel Tower was built in 1889."
        );
    }

    #[test]
    fn test_single_sentence_appears_once() {
        let text = "Paris is the capital of France.";
        assert_eq!(Summarizer::default().summarize(text), "Paris is the capital of France.");
    }

    #[test]
    fn test_takes_sentences_from_the_middle() {
        let sentences: Vec<String> = (0..9)
            .map(|i| format!("Sentence number {i} has enough words"))
            .collect();
        let text = sentences.join(". ");

        // first sentence, then indices 3, 4, 5
        let expected = format!(
            "{}. {}. {}. {}.",
            sentences[0], sentences[3], sentences[4], sentences[5]
        );
        assert_eq!(Summarizer::default().summarize(&text), expected);
    }

    #[test]
    fn test_respects_word_limit() {
        let text = "The opening sentence is fairly short. \
                    Another sentence that is also quite modest. \
                    A final sentence which would exceed the limit entirely.";
        let summary = Summarizer::new(12).summarize(text);
        // opening (6 words) + another (7 words) = 13 > 12, final (9) also too long
        assert_eq!(summary, "The opening sentence is fairly short.");
    }

    #[test]
    fn test_no_sentences_fallback() {
        assert_eq!(Summarizer::default().summarize("Too short."), NO_SUMMARY);
        assert_eq!(Summarizer::default().summarize(""), NO_SUMMARY);
    }
}
