// ============================================================
// Layer 2 — Ask Use Case
// ============================================================
// Answers a free-form question about a stored document:
//   1. Look the document up by id
//   2. Hand its text to a QuestionAnswerer (normally the
//      analysis engine's TextAnalyzer)
//
// The engine never fails; the only errors here are a blank
// question or an unknown document id.

use anyhow::{bail, Result};

use crate::application::find_document;
use crate::domain::document::DocumentId;
use crate::domain::insight::Answer;
use crate::domain::traits::{DocumentStore, QuestionAnswerer};

pub struct AskUseCase<'a> {
    store:    &'a dyn DocumentStore,
    answerer: &'a dyn QuestionAnswerer,
}

impl<'a> AskUseCase<'a> {
    pub fn new(store: &'a dyn DocumentStore, answerer: &'a dyn QuestionAnswerer) -> Self {
        Self { store, answerer }
    }

    pub fn answer(&self, document_id: &DocumentId, question: &str) -> Result<Answer> {
        if question.trim().is_empty() {
            bail!("A question is required");
        }

        let document = find_document(self.store, document_id)?;
        let answer   = self.answerer.answer(&document.text, question);

        tracing::info!("Question answered for document {}", document_id);
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TextAnalyzer;
    use crate::application::test_support::{store_with, PARIS};

    struct FixedAnswerer;

    impl QuestionAnswerer for FixedAnswerer {
        fn answer(&self, text: &str, _question: &str) -> Answer {
            Answer::new(format!("{} chars", text.len()), "fixed")
        }
    }

    #[test]
    fn test_answers_from_stored_document() {
        let (store, id) = store_with(PARIS);
        let analyzer    = TextAnalyzer::default();

        let answer = AskUseCase::new(&store, &analyzer)
            .answer(&id, "What is the capital of France?")
            .unwrap();
        assert_eq!(answer.answer, "Paris is the capital of France.");
    }

    #[test]
    fn test_any_answerer_can_be_plugged_in() {
        let (store, id) = store_with(PARIS);
        let answer = AskUseCase::new(&store, &FixedAnswerer).answer(&id, "Anything?").unwrap();
        assert_eq!(answer.answer, format!("{} chars", PARIS.len()));
    }

    #[test]
    fn test_unknown_document() {
        let (store, _) = store_with(PARIS);
        let analyzer   = TextAnalyzer::default();

        let err = AskUseCase::new(&store, &analyzer)
            .answer(&uuid::Uuid::new_v4(), "Anything?")
            .unwrap_err();
        assert!(err.to_string().contains("Document not found"));
    }

    #[test]
    fn test_blank_question() {
        let (store, id) = store_with(PARIS);
        let analyzer    = TextAnalyzer::default();
        assert!(AskUseCase::new(&store, &analyzer).answer(&id, "   ").is_err());
    }
}
