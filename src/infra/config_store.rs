// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes AssistantConfig as pretty JSON.
//
// A missing file is not an error: the defaults are used. A
// file that exists but does not parse is an error, so a typo
// in a config file never silently falls back to defaults.
//
// Example file (every field optional):
//   {
//     "max_contexts": 3,
//     "summary_max_words": 150,
//     "max_questions": 8,
//     "max_file_bytes": 16777216,
//     "seed": 42
//   }

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::config::AssistantConfig;

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the config, or the defaults when the file does not exist.
    pub fn load_or_default(&self) -> Result<AssistantConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "No config at '{}', using defaults",
                self.path.display()
            );
            return Ok(AssistantConfig::default());
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config '{}'", self.path.display()))?;
        let config: AssistantConfig = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config '{}'", self.path.display()))?;

        tracing::info!("Loaded config from '{}'", self.path.display());
        Ok(config)
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save(&self, config: &AssistantConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(config)?)
            .with_context(|| format!("Cannot write config '{}'", self.path.display()))?;
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir    = tempfile::tempdir().unwrap();
        let config = ConfigStore::new(dir.path().join("none.json")).load_or_default().unwrap();
        assert_eq!(config, AssistantConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "max_questions": 5, "seed": 11 }"#).unwrap();

        let config = ConfigStore::new(&path).load_or_default().unwrap();
        assert_eq!(config.max_questions, 5);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.max_contexts, AssistantConfig::default().max_contexts);
    }

    #[test]
    fn test_save_then_load() {
        let dir   = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nested").join("config.json"));
        let config = AssistantConfig { summary_max_words: 80, ..AssistantConfig::default() };

        store.save(&config).unwrap();
        assert_eq!(store.load_or_default().unwrap(), config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(ConfigStore::new(&path).load_or_default().is_err());
    }
}
