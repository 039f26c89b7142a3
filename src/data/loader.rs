// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Reads one uploaded file and returns its text.
//
// Supported formats:
//   .txt / .md  — read as UTF-8, falling back to Latin-1 when
//                 the bytes are not valid UTF-8
//   .docx       — parsed with docx-rs; paragraph text is
//                 joined with blank lines so each Word
//                 paragraph becomes its own TextUnit
//   .pdf        — text layer extracted with pdf-extract;
//                 scanned pages without text yield nothing
//
// A .docx file is a ZIP archive of XML. docx-rs exposes it as:
//   Document
//     └── children: Vec<DocumentChild>
//           └── Paragraph
//                 └── children: Vec<ParagraphChild>
//                       └── Run
//                             └── children: Vec<RunChild>
//                                   └── Text

use anyhow::{bail, Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::document::RawDocument;
use crate::domain::traits::DocumentSource;

/// Default upload limit: 16 MiB
pub const MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;

/// Extensions accepted by FileSource, lowercase
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["txt", "md", "docx", "pdf"];

/// Loads a single document from disk.
/// Implements the DocumentSource trait from Layer 3.
pub struct FileSource {
    path:      PathBuf,
    max_bytes: u64,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:      path.into(),
            max_bytes: MAX_FILE_BYTES,
        }
    }

    /// Override the size limit
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
    }

    fn filename(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }
}

impl DocumentSource for FileSource {
    fn load(&self) -> Result<RawDocument> {
        let ext = match self.extension() {
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => ext,
            _ => bail!(
                "Unsupported file '{}': only {} files are supported",
                self.path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            ),
        };

        let size = fs::metadata(&self.path)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?
            .len();
        if size > self.max_bytes {
            bail!(
                "File '{}' is {} bytes, larger than the {} byte limit",
                self.path.display(),
                size,
                self.max_bytes
            );
        }

        let bytes = fs::read(&self.path)
            .with_context(|| format!("Cannot read '{}'", self.path.display()))?;

        let text = match ext.as_str() {
            "docx" => extract_docx_text(&self.path, &bytes)?,
            "pdf"  => extract_pdf_text(&self.path, &bytes)?,
            _      => decode_plain_text(bytes),
        };

        tracing::debug!("Loaded: {} ({} chars)", self.filename(), text.len());
        Ok(RawDocument::new(self.filename(), text))
    }
}

/// Decode a plain text file. Invalid UTF-8 is re-read as Latin-1,
/// where every byte maps to the code point of the same value.
fn decode_plain_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("File is not valid UTF-8, decoding as Latin-1");
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Parse a .docx file and return its paragraph text, one Word
/// paragraph per blank-line separated block.
fn extract_docx_text(path: &Path, bytes: &[u8]) -> Result<String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| {
        anyhow::anyhow!("docx-rs parse error in '{}': {:?}", path.display(), e)
    })?;

    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        use docx_rs::DocumentChild;

        // Tables, images and section properties are ignored
        if let DocumentChild::Paragraph(para) = child {
            let para_text = extract_paragraph_text(para);
            if !para_text.trim().is_empty() {
                paragraphs.push(para_text);
            }
        }
    }

    Ok(paragraphs.join("\n\n"))
}

/// Extract the text layer of a PDF, page by page.
fn extract_pdf_text(path: &Path, bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| anyhow::anyhow!("pdf-extract error in '{}': {:?}", path.display(), e))
}

/// Concatenate every text run of a paragraph.
fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut parts = Vec::new();

    for child in &para.children {
        use docx_rs::ParagraphChild;

        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                use docx_rs::RunChild;

                if let RunChild::Text(t) = rc {
                    parts.push(t.text.clone());
                }
            }
        }
    }

    parts.join("")
}
