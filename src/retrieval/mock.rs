// ============================================================
// Layer 5 - Mock Retriever
// ============================================================
// Returns the same fixed documents for every question. Used with
// --mock-search so the pipeline can be exercised without a real
// corpus or search backend.
//
// Fixture format (JSON array of documents):
//   [
//     {"source": "fixture-1", "text": "Paris is the capital of France."}
//   ]

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::data::preprocessor::normalize_text;
use crate::domain::document::Document;
use crate::domain::traits::DocumentRetriever;

pub struct MockRetriever {
    documents: Vec<Document>,
}

impl MockRetriever {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Load fixture documents. A missing fixture file gives an empty
    /// retriever; a malformed one is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(
                "Mock documents '{}' do not exist - mock retrieval returns nothing",
                path.display()
            );
            return Ok(Self::new(Vec::new()));
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read mock documents from '{}'", path.display()))?;
        let documents: Vec<Document> = serde_json::from_str(&json)
            .with_context(|| format!("Invalid mock documents file '{}'", path.display()))?;

        let documents = documents
            .into_iter()
            .map(|d| Document::new(d.source, normalize_text(&d.text)))
            .collect();

        Ok(Self::new(documents))
    }
}

impl DocumentRetriever for MockRetriever {
    fn retrieve(&self, _question: &str) -> Result<Vec<Document>> {
        tracing::debug!("Mock retrieval: returning {} fixture documents", self.documents.len());
        Ok(self.documents.clone())
    }
}
