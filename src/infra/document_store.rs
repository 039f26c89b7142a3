// ============================================================
// Layer 6 — In-Memory Document Store
// ============================================================
// The registry of uploaded documents for the lifetime of the
// process. Nothing is written to disk.
//
// Documents are stored behind Arc so a reader keeps an
// immutable snapshot even if the store changes afterwards.
// The RwLock lets many readers look documents up at once.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::document::{Document, DocumentId};
use crate::domain::traits::DocumentStore;

#[derive(Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<Registry>,
}

#[derive(Default)]
struct Registry {
    documents: HashMap<DocumentId, Arc<Document>>,
    /// Upload order, oldest first
    order: Vec<DocumentId>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn insert(&self, document: Document) -> DocumentId {
        let id = document.id;
        let mut registry = self.inner.write();
        if registry.documents.insert(id, Arc::new(document)).is_none() {
            registry.order.push(id);
        }
        tracing::debug!("stored document {} ({} total)", id, registry.order.len());
        id
    }

    fn get(&self, id: &DocumentId) -> Option<Arc<Document>> {
        self.inner.read().documents.get(id).cloned()
    }

    fn ids(&self) -> Vec<DocumentId> {
        self.inner.read().order.clone()
    }

    fn len(&self) -> usize {
        self.inner.read().documents.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let store = InMemoryDocumentStore::new();
        let id    = store.insert(Document::new("a.txt", "Some text here.", "Some text here."));

        let doc = store.get(&id).unwrap();
        assert_eq!(doc.filename, "a.txt");
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_unknown_id_is_none() {
        let store = InMemoryDocumentStore::new();
        assert!(store.get(&uuid::Uuid::new_v4()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_keep_upload_order() {
        let store = InMemoryDocumentStore::new();
        let first  = store.insert(Document::new("1.txt", "one", "one."));
        let second = store.insert(Document::new("2.txt", "two", "two."));
        assert_eq!(store.ids(), vec![first, second]);
    }

    #[test]
    fn test_snapshot_outlives_replacement() {
        let store    = InMemoryDocumentStore::new();
        let original = Document::new("a.txt", "old text", "old.");
        let id       = original.id;
        store.insert(original);

        let snapshot = store.get(&id).unwrap();
        let mut replacement = Document::new("a.txt", "new text", "new.");
        replacement.id = id;
        store.insert(replacement);

        assert_eq!(snapshot.text, "old text");
        assert_eq!(store.get(&id).unwrap().text, "new text");
        assert_eq!(store.len(), 1);
        assert_eq!(store.ids().len(), 1);
    }
}
