// ============================================================
// Layer 3 - Document Domain Type
// ============================================================
// A unit of retrieved source text. The answer pipeline never
// looks inside a Document: it receives an ordered Vec from the
// retriever and hands it, in the same order, to the extractor.
//
// Serialize/Deserialize lets the mock retriever load a fixed
// document list from a JSON fixture file.

use serde::{Deserialize, Serialize};

/// A retrieved document: where it came from and its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// File name, URL or fixture id, kept for traceability
    pub source: String,

    /// Normalised text content
    pub text: String,
}

impl Document {
    /// Create a new Document with a source and text content.
    ///
    /// Example:
    ///   let doc = Document::new("france.txt", "Paris is the capital of France.");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }
}
