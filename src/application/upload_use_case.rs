// ============================================================
// Layer 2 — Upload Use Case
// ============================================================
// Registers a new document:
//
//   Step 1: Extract text from the source      (Layer 4 - data)
//   Step 2: Normalise it                      (Layer 4 - data)
//   Step 3: Reject documents with no text
//   Step 4: Compute the extractive summary    (Layer 5 - analysis)
//   Step 5: Store it under a fresh id         (Layer 6 - infra)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::analysis::TextAnalyzer;
use crate::data::preprocessor::Preprocessor;
use crate::domain::document::{Document, DocumentId};
use crate::domain::traits::{DocumentSource, DocumentStore};

/// What the caller gets back after an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub document_id: DocumentId,
    pub filename:    String,
    pub summary:     String,
}

pub struct UploadUseCase<'a> {
    store:        &'a dyn DocumentStore,
    analyzer:     &'a TextAnalyzer,
    preprocessor: Preprocessor,
}

impl<'a> UploadUseCase<'a> {
    pub fn new(store: &'a dyn DocumentStore, analyzer: &'a TextAnalyzer) -> Self {
        Self {
            store,
            analyzer,
            preprocessor: Preprocessor::new(),
        }
    }

    pub fn execute(&self, source: &dyn DocumentSource) -> Result<UploadReceipt> {
        // ── Step 1 + 2: Extract and clean ─────────────────────────────────────
        let raw  = source.load()?;
        let text = self.preprocessor.clean(&raw.text);

        // ── Step 3: Nothing to analyse ────────────────────────────────────────
        if text.is_empty() {
            bail!("No text could be extracted from the document '{}'", raw.filename);
        }

        // ── Step 4 + 5: Summarise and store ───────────────────────────────────
        let summary     = self.analyzer.summarize(&text);
        let document    = Document::new(raw.filename.clone(), text, summary.clone());
        let document_id = self.store.insert(document);

        tracing::info!("Document uploaded successfully: {} ({})", document_id, raw.filename);

        Ok(UploadReceipt {
            document_id,
            filename: raw.filename,
            summary,
        })
    }
}
