// ============================================================
// Layer 2 — Assistant Configuration
// ============================================================
// Every tunable of a run in one serialisable struct. It is
// loaded from JSON by the ConfigStore (Layer 6), then CLI flags
// override individual fields (Layer 1).
//
// `#[serde(default)]` lets a config file name only the fields
// it wants to change.

use serde::{Deserialize, Serialize};

use crate::analysis::challenge::DEFAULT_MAX_QUESTIONS;
use crate::analysis::summarizer::DEFAULT_SUMMARY_WORDS;
use crate::analysis::synthesizer::DEFAULT_MAX_CONTEXTS;
use crate::analysis::TextAnalyzer;
use crate::data::loader::MAX_FILE_BYTES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Paragraphs combined into the answer context
    pub max_contexts: usize,

    /// Word budget of the upload summary
    pub summary_max_words: usize,

    /// Questions returned by a challenge
    pub max_questions: usize,

    /// Largest accepted upload, in bytes
    pub max_file_bytes: u64,

    /// Fixed seed for challenge sampling; None draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            max_contexts:      DEFAULT_MAX_CONTEXTS,
            summary_max_words: DEFAULT_SUMMARY_WORDS,
            max_questions:     DEFAULT_MAX_QUESTIONS,
            max_file_bytes:    MAX_FILE_BYTES,
            seed:              None,
        }
    }
}

impl AssistantConfig {
    /// Build the analysis engine these limits describe
    pub fn analyzer(&self) -> TextAnalyzer {
        TextAnalyzer::new(self.max_contexts, self.summary_max_words, self.max_questions)
    }

    /// Replace every field the overrides set; the rest is kept
    pub fn with_overrides(self, overrides: Overrides) -> Self {
        Self {
            max_contexts:      overrides.max_contexts.unwrap_or(self.max_contexts),
            summary_max_words: overrides.summary_max_words.unwrap_or(self.summary_max_words),
            max_questions:     overrides.max_questions.unwrap_or(self.max_questions),
            max_file_bytes:    self.max_file_bytes,
            seed:              overrides.seed.or(self.seed),
        }
    }
}

/// Per-invocation changes to a loaded config. Layer 1 builds
/// these from its arguments, so nothing here knows about clap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub max_contexts:      Option<usize>,
    pub summary_max_words: Option<usize>,
    pub max_questions:     Option<usize>,
    pub seed:              Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssistantConfig::default();
        assert_eq!(config.max_contexts, 3);
        assert_eq!(config.summary_max_words, 150);
        assert_eq!(config.max_questions, 8);
        assert_eq!(config.max_file_bytes, 16 * 1024 * 1024);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_overrides_replace_only_set_fields() {
        let base = AssistantConfig { seed: Some(1), ..AssistantConfig::default() };
        let merged = base.with_overrides(Overrides {
            max_questions: Some(4),
            ..Overrides::default()
        });

        assert_eq!(merged.max_questions, 4);
        assert_eq!(merged.seed, Some(1));
        assert_eq!(merged.max_contexts, 3);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: AssistantConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AssistantConfig::default());
    }
}
