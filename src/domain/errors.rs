// ============================================================
// Layer 3 - Typed Errors
// ============================================================
// Only the two failures the pipeline knows how to handle get a
// type of their own. Everything else (classifier down, retrieval
// failure, extractor fault) travels as anyhow::Error.

use std::io;

use thiserror::Error;

use crate::domain::question::TypeLabel;

/// No extraction strategy is registered for a (coarse, fine) pair.
///
/// This is an expected outcome for unsupported question types,
/// not a program fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no extractor registered for {coarse}: {fine}")]
pub struct NoExtractorError {
    pub coarse: String,
    pub fine:   String,
}

impl From<&TypeLabel> for NoExtractorError {
    fn from(label: &TypeLabel) -> Self {
        Self {
            coarse: label.coarse.clone(),
            fine:   label.fine.clone(),
        }
    }
}

/// Appending to the cache log failed.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache file '{path}' is not writable: {source}")]
    Io {
        path:   String,
        #[source]
        source: io::Error,
    },

    #[error("could not encode cache record: {0}")]
    Encode(#[from] serde_json::Error),
}
