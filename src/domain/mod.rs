// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// research assistant works with:
//
//   document.rs   — an uploaded document and its raw text
//   text_unit.rs  — paragraphs and their relevance scores
//   insight.rs    — answers, concept sets, challenge sets
//                   and answer evaluations
//   traits.rs     — seams implemented by other layers
//
// Rules for this layer:
//   - NO file I/O
//   - NO scoring or text heuristics (that's Layer 5)
//   - Only data and the traits other layers implement

// An uploaded document with its extracted text
pub mod document;

// Paragraph-level text units and scored candidates
pub mod text_unit;

// Results produced by the analysis engine
pub mod insight;

// Core abstractions (traits) that other layers implement
pub mod traits;
