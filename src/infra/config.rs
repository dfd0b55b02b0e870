// ============================================================
// Layer 6 - Pipeline Configuration
// ============================================================
// Every toggle the pipeline and its collaborators read lives in
// one PipelineConfig value. It is built once in the CLI layer
// and passed down explicitly; nothing reads global state.
//
// Sources, lowest precedence first:
//   1. PipelineConfig::default()
//   2. A JSON file (--config path), any subset of fields
//   3. Command line toggles (--debug, --mock-search, --no-cache)
//
// Example config.json:
//   {
//     "cache_file": "cache/questions.jsonl",
//     "docs_dir":   "corpus",
//     "max_documents": 5
//   }
//
// Why #[serde(default)] on the whole struct?
//   - A config file only needs the fields it wants to change
//   - Adding a field later does not break older config files
//
// Reference: serde docs (Container attributes: default)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Append a record per question to `cache_file`
    pub cache_enabled: bool,

    /// JSON-lines log of questions and their answers
    pub cache_file: PathBuf,

    /// Emit the full ranked candidate list for every answered question
    pub debug: bool,

    /// Serve documents from `mock_documents` instead of `docs_dir`
    pub mock_retrieval: bool,

    /// JSON array of {"source", "text"} objects used by mock retrieval
    pub mock_documents: PathBuf,

    /// Directory of .txt / .docx files searched by the directory retriever
    pub docs_dir: PathBuf,

    /// How many documents the directory retriever returns at most
    pub max_documents: usize,

    /// Optional JSON rule table for the classifier; built-in rules otherwise
    pub classifier_rules: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cache_enabled:    true,
            cache_file:       PathBuf::from("question_cache.jsonl"),
            debug:            false,
            mock_retrieval:   false,
            mock_documents:   PathBuf::from("data/mock_documents.json"),
            docs_dir:         PathBuf::from("data/documents"),
            max_documents:    10,
            classifier_rules: None,
        }
    }
}

impl PipelineConfig {
    /// Load a config file, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(
                "Config file '{}' does not exist - using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Write the config as pretty JSON, e.g. to seed a new config file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved pipeline config to '{}'", path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(PipelineConfig::load(&path).unwrap(), PipelineConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"cache_enabled": false, "max_documents": 3}"#).unwrap();

        let cfg = PipelineConfig::load(&path).unwrap();
        assert!(!cfg.cache_enabled);
        assert_eq!(cfg.max_documents, 3);
        assert_eq!(cfg.cache_file, PipelineConfig::default().cache_file);
    }

    #[test]
    fn test_save_then_load() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let cfg  = PipelineConfig {
            debug: true,
            classifier_rules: Some(PathBuf::from("rules.json")),
            ..PipelineConfig::default()
        };
        cfg.save(&path).unwrap();
        assert_eq!(PipelineConfig::load(&path).unwrap(), cfg);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(PipelineConfig::load(&path).is_err());
    }
}
