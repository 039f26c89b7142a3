// ============================================================
// Layer 1 — Plain-text Rendering
// ============================================================
// Human-readable output for each result type. The `--json`
// flag bypasses these and prints the serde representation.

use crate::application::status::StatusReport;
use crate::application::upload_use_case::UploadReceipt;
use crate::domain::insight::{Answer, AnswerFeedback, ChallengeSet, ConceptSet};

pub fn receipt(r: &UploadReceipt) -> String {
    format!("Document: {} ({})\n\nSummary:\n{}", r.filename, r.document_id, r.summary)
}

pub fn answer(a: &Answer) -> String {
    format!("Answer: {}\n\nJustification: {}", a.answer, a.justification)
}

pub fn concepts(c: &ConceptSet) -> String {
    if c.is_empty() {
        return "No key concepts found.".to_string();
    }
    let line = |label: &str, items: &[String]| {
        if items.is_empty() {
            format!("{label}: -")
        } else {
            format!("{label}: {}", items.join(", "))
        }
    };
    [
        line("Proper nouns", &c.proper_nouns),
        line("Numbers", &c.numbers),
        line("Quotes", &c.quotes),
        line("Technical terms", &c.technical_terms),
    ]
    .join("\n")
}

pub fn challenge(set: &ChallengeSet) -> String {
    set.questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, q))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn feedback(rows: &[AnswerFeedback]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "Q{}: {}\n  Your answer:   {}\n  Score:         {:.3} ({})\n  Feedback:      {}\n  Justification: {}",
                row.question_index + 1,
                row.question,
                row.user_answer,
                row.score,
                row.tier.label(),
                row.feedback,
                row.justification,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn status(s: &StatusReport) -> String {
    format!(
        "Status: {}\nDocuments: {}\nChecked at: {}",
        s.status,
        s.documents_count,
        s.timestamp.to_rfc3339()
    )
}
