// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only talks to these traits, so the
// file loader, the in-memory registry and the analysis engine
// can each be swapped out (or faked in tests) independently.
//
//   DocumentSource   → FileSource (data/loader.rs)
//   DocumentStore    → InMemoryDocumentStore (infra/document_store.rs)
//   QuestionAnswerer → TextAnalyzer (analysis/mod.rs)

use anyhow::Result;
use std::sync::Arc;

use crate::domain::document::{Document, DocumentId, RawDocument};
use crate::domain::insight::Answer;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Anything that can hand over the text of one document.
pub trait DocumentSource {
    /// Extract the document's text. Fails on unreadable or
    /// unsupported input.
    fn load(&self) -> Result<RawDocument>;
}

// ─── DocumentStore ────────────────────────────────────────────────────────────
/// Key-value registry of uploaded documents.
///
/// `get` returns a shared snapshot; the stored text is never
/// mutated while a caller holds it.
pub trait DocumentStore {
    /// Register a document and return its id
    fn insert(&self, document: Document) -> DocumentId;

    /// Look up a document by id
    fn get(&self, id: &DocumentId) -> Option<Arc<Document>>;

    /// Ids of all stored documents, oldest upload first
    fn ids(&self) -> Vec<DocumentId>;

    /// Number of stored documents
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ─── QuestionAnswerer ─────────────────────────────────────────────────────────
/// Any component that can answer a question about a text.
pub trait QuestionAnswerer {
    /// Best-effort answer; never fails, falls back to a fixed
    /// "no relevant information" answer instead.
    fn answer(&self, text: &str, question: &str) -> Answer;
}
