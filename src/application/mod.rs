// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal at a time (upload, ask, challenge, evaluate, status).
//
// Rules for this layer:
//   - No text heuristics here (that's Layer 5)
//   - No UI or printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Every use case borrows the document store and the analysis
// engine; neither is owned here.

use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::domain::document::{Document, DocumentId};
use crate::domain::traits::DocumentStore;

// Run-wide settings
pub mod config;

// Extract, clean, summarise and register a document
pub mod upload_use_case;

// Question answering
pub mod ask_use_case;

// Comprehension question generation
pub mod challenge_use_case;

// Batch grading of user answers
pub mod evaluate_use_case;

// Health snapshot
pub mod status;

/// Fetch a stored document or fail with a readable error
pub fn find_document(store: &dyn DocumentStore, id: &DocumentId) -> Result<Arc<Document>> {
    store
        .get(id)
        .ok_or_else(|| anyhow!("Document not found: {id}"))
}
