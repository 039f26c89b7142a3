// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between an uploaded file and the paragraphs the
// analysis engine scores:
//
//   .txt / .md / .docx file
//       │
//       ▼
//   FileSource        → reads the file, extracts raw text
//       │
//       ▼
//   Preprocessor      → normalises whitespace and line endings
//       │
//       ▼
//   (stored as a Document, Layer 6)
//       │
//       ▼
//   Segmenter         → splits text into paragraph TextUnits

/// Loads .txt, .md and .docx files
pub mod loader;

/// Cleans and normalises raw extracted text
pub mod preprocessor;

/// Splits text into blank-line delimited paragraphs
pub mod segmenter;
