// ============================================================
// Layer 3 — Document Domain Types
// ============================================================
// A RawDocument is what a DocumentSource hands over: a file
// name and the text extracted from it. Once the upload use
// case has cleaned and summarised it, it becomes a Document
// with an identifier and lives in the DocumentStore.
//
// The text of a stored Document is never mutated. Readers get
// an Arc<Document> snapshot from the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier handed out by the store for every upload.
pub type DocumentId = Uuid;

/// Text as extracted from a source, before cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// The file name the text came from
    pub filename: String,

    /// Extracted text, untouched
    pub text: String,
}

impl RawDocument {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text:     text.into(),
        }
    }
}

/// A document registered with the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,

    /// Original file name, kept for display
    pub filename: String,

    /// Normalised document text, the only field the analysis
    /// engine ever reads
    pub text: String,

    /// Extractive summary computed at upload time
    pub summary: String,

    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    /// Create a Document with a fresh v4 id, stamped with the current time.
    pub fn new(
        filename: impl Into<String>,
        text:     impl Into<String>,
        summary:  impl Into<String>,
    ) -> Self {
        Self {
            id:          Uuid::new_v4(),
            filename:    filename.into(),
            text:        text.into(),
            summary:     summary.into(),
            uploaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_documents_get_distinct_ids() {
        let a = Document::new("a.txt", "alpha", "alpha.");
        let b = Document::new("a.txt", "alpha", "alpha.");
        assert_ne!(a.id, b.id);
        assert_eq!(a.filename, "a.txt");
    }
}
