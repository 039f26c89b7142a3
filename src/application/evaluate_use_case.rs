// ============================================================
// Layer 2 — Evaluate Use Case
// ============================================================
// Grades a batch of user answers to challenge questions.
//
// Questions and answers are matched by position, so both lists
// must be non-empty and of equal length. Each answer is scored
// against the engine's own answer to the same question.

use anyhow::{bail, Result};

use crate::analysis::TextAnalyzer;
use crate::application::find_document;
use crate::domain::document::DocumentId;
use crate::domain::insight::AnswerFeedback;
use crate::domain::traits::DocumentStore;

pub struct EvaluateUseCase<'a> {
    store:    &'a dyn DocumentStore,
    analyzer: &'a TextAnalyzer,
}

impl<'a> EvaluateUseCase<'a> {
    pub fn new(store: &'a dyn DocumentStore, analyzer: &'a TextAnalyzer) -> Self {
        Self { store, analyzer }
    }

    pub fn evaluate(
        &self,
        document_id: &DocumentId,
        questions:   &[String],
        answers:     &[String],
    ) -> Result<Vec<AnswerFeedback>> {
        if questions.is_empty() || answers.is_empty() {
            bail!("Questions and answers are required");
        }
        if questions.len() != answers.len() {
            bail!(
                "Number of questions and answers must match ({} questions, {} answers)",
                questions.len(),
                answers.len()
            );
        }

        let document = find_document(self.store, document_id)?;

        let feedback: Vec<AnswerFeedback> = questions
            .iter()
            .zip(answers)
            .enumerate()
            .map(|(question_index, (question, user_answer))| {
                let eval = self.analyzer.evaluate(&document.text, question, user_answer);
                AnswerFeedback {
                    question_index,
                    question:      question.clone(),
                    user_answer:   user_answer.clone(),
                    tier:          eval.tier,
                    feedback:      eval.feedback,
                    justification: eval.justification,
                    score:         eval.score,
                }
            })
            .collect();

        tracing::info!("Answers evaluated for document {} ({} answers)", document_id, feedback.len());
        Ok(feedback)
    }
}
