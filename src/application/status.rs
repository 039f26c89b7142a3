// ============================================================
// Layer 2 — Status
// ============================================================
// A health snapshot: always "healthy" while the process runs,
// with the time of the check and how many documents are held.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::traits::DocumentStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status:          String,
    pub timestamp:       DateTime<Utc>,
    pub documents_count: usize,
}

pub fn check(store: &dyn DocumentStore) -> StatusReport {
    StatusReport {
        status:          "healthy".to_string(),
        timestamp:       Utc::now(),
        documents_count: store.len(),
    }
}
