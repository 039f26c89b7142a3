// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Normalises extracted text before it is stored and analysed.
//
// Uploaded .txt and .docx files arrive with:
//   - Windows (\r\n) or old Mac (\r) line endings
//   - Non-breaking spaces (U+00A0) and zero-width spaces (U+200B)
//   - Byte order marks (U+FEFF)
//   - Tabs and stray control characters
//   - Runs of spaces from indentation
//
// Cleaning steps (applied in order):
//   1. Normalise line endings to \n
//   2. Map odd whitespace and control characters to a space
//   3. Collapse runs of spaces and trim each line
//   4. Collapse runs of blank lines into a single blank line
//   5. Trim the whole document
//
// Blank lines are paragraph boundaries for the Segmenter, so
// step 4 keeps exactly one of them wherever there was any.

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Clean a raw text string. Returns an owned String.
    pub fn clean(&self, text: &str) -> String {

        // ── Step 1: Line endings ──────────────────────────────────────────────
        let unix = text.replace("\r\n", "\n").replace('\r', "\n");

        // ── Step 2: Character-level normalisation ─────────────────────────────
        let chars: String = unix
            .chars()
            .map(|c| match c {
                '\t' | '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() && c != '\n' => ' ',
                c => c,
            })
            .collect();

        // ── Step 3 + 4: Per-line cleanup, blank-line collapsing ───────────────
        let mut lines: Vec<String> = Vec::new();
        let mut last_blank         = true;

        for line in chars.split('\n') {
            let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
            if collapsed.is_empty() {
                if !last_blank {
                    lines.push(String::new());
                }
                last_blank = true;
            } else {
                lines.push(collapsed);
                last_blank = false;
            }
        }

        // ── Step 5: Document trim ─────────────────────────────────────────────
        lines.join("\n").trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
