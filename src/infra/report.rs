// ============================================================
// Layer 6 — Evaluation Report
// ============================================================
// Appends graded answers to a CSV file so results from several
// runs can be compared in a spreadsheet.
//
// Columns:
//   document_id     — id of the document the answers refer to
//   question_index  — position of the question in the batch
//   score           — overlap score, 6 decimal places
//   tier            — excellent / good / partial / needs improvement
//   question        — the question text
//
// Example:
//   document_id,question_index,score,tier,question
//   4f0c…,0,0.794737,excellent,What is the capital of France?

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use crate::domain::document::DocumentId;
use crate::domain::insight::AnswerFeedback;

const HEADER: &str = "document_id,question_index,score,tier,question";

pub struct EvaluationReport {
    csv_path: PathBuf,
}

impl EvaluationReport {
    /// Open (or create) the report. The header is written only
    /// when the file is new, so runs append to the same file.
    pub fn new(csv_path: impl Into<PathBuf>) -> Result<Self> {
        let csv_path = csv_path.into();

        if let Some(parent) = csv_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)
                .with_context(|| format!("Cannot create report '{}'", csv_path.display()))?;
            writeln!(f, "{HEADER}")?;
            tracing::debug!("Created evaluation report '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one row per graded answer.
    pub fn append(&self, document_id: &DocumentId, rows: &[AnswerFeedback]) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open report '{}'", self.csv_path.display()))?;

        for row in rows {
            writeln!(
                f,
                "{},{},{:.6},{},{}",
                document_id,
                row.question_index,
                row.score,
                row.tier.label(),
                csv_field(&row.question),
            )?;
        }

        tracing::info!(
            "Appended {} rows to '{}'",
            rows.len(),
            self.csv_path.display()
        );
        Ok(())
    }
}

/// Quote a field when it contains a comma, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::insight::FeedbackTier;

    fn row(index: usize, question: &str, score: f64) -> AnswerFeedback {
        let tier = FeedbackTier::from_score(score);
        AnswerFeedback {
            question_index: index,
            question:       question.to_string(),
            user_answer:    "answer".to_string(),
            tier,
            feedback:       tier.message().to_string(),
            justification:  "justification".to_string(),
            score,
        }
    }

    #[test]
    fn test_header_written_once() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let id   = uuid::Uuid::new_v4();

        EvaluationReport::new(&path).unwrap().append(&id, &[row(0, "Q one?", 0.8)]).unwrap();
        EvaluationReport::new(&path).unwrap().append(&id, &[row(1, "Q two?", 0.2)]).unwrap();

        let text  = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], format!("{id},0,0.800000,excellent,Q one?"));
        assert_eq!(lines[2], format!("{id},1,0.200000,needs improvement,Q two?"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
