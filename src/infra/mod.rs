// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any business
// layer:
//
//   document_store.rs — In-memory registry of uploaded
//                       documents (implements DocumentStore).
//                       Lives only as long as the process.
//
//   config_store.rs   — Loads and saves AssistantConfig as
//                       JSON, falling back to defaults when
//                       no file exists.
//
//   report.rs         — Appends graded answers to a CSV file.

/// In-memory document registry
pub mod document_store;

/// JSON configuration loading and saving
pub mod config_store;

/// Evaluation CSV report writer
pub mod report;
