// ============================================================
// Layer 5 - Directory Retriever
// ============================================================
// Loads a corpus once at start-up and, per question, returns the
// documents sharing the most key terms with it, best first.
// Documents with no overlap at all are not returned.

use anyhow::Result;
use std::path::Path;

use crate::data::keywords::{key_terms, overlap_score};
use crate::data::loader::CorpusLoader;
use crate::domain::document::Document;
use crate::domain::traits::DocumentRetriever;

pub struct DirectoryRetriever {
    corpus:        Vec<Document>,
    max_documents: usize,
}

impl DirectoryRetriever {
    /// Load every supported file under `dir`.
    pub fn load(dir: &Path, max_documents: usize) -> Result<Self> {
        let corpus = CorpusLoader::new(dir).load_all()?;
        Ok(Self::from_documents(corpus, max_documents))
    }

    pub fn from_documents(corpus: Vec<Document>, max_documents: usize) -> Self {
        Self { corpus, max_documents }
    }

    pub fn corpus_size(&self) -> usize {
        self.corpus.len()
    }
}

impl DocumentRetriever for DirectoryRetriever {
    fn retrieve(&self, question: &str) -> Result<Vec<Document>> {
        let terms = key_terms(question);

        let mut scored: Vec<(f64, &Document)> = self
            .corpus
            .iter()
            .map(|doc| (overlap_score(&terms, &doc.text.to_lowercase()), doc))
            .filter(|(score, _)| *score > 0.0)
            .collect();

        // Stable: equally relevant documents keep corpus order
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let docs: Vec<Document> = scored
            .into_iter()
            .take(self.max_documents)
            .map(|(_, doc)| doc.clone())
            .collect();

        tracing::debug!(
            "Retrieved {} of {} documents",
            docs.len(),
            self.corpus.len()
        );
        Ok(docs)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new("weather.txt", "It rained in Lyon yesterday."),
            Document::new("lyon.txt", "Lyon is a city in France."),
            Document::new("paris.txt", "Paris is the capital of France."),
        ]
    }

    #[test]
    fn test_orders_by_overlap() {
        let retriever = DirectoryRetriever::from_documents(corpus(), 10);
        let docs = retriever.retrieve("What is the capital of France?").unwrap();
        let sources: Vec<&str> = docs.iter().map(|d| d.source.as_str()).collect();
        assert_eq!(sources, vec!["paris.txt", "lyon.txt"]);
    }

    #[test]
    fn test_respects_max_documents() {
        let retriever = DirectoryRetriever::from_documents(corpus(), 1);
        let docs = retriever.retrieve("Lyon France capital").unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_no_overlap_returns_nothing() {
        let retriever = DirectoryRetriever::from_documents(corpus(), 10);
        assert!(retriever.retrieve("Who painted Guernica?").unwrap().is_empty());
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("paris.txt"), "Paris is the capital of France.").unwrap();

        let retriever = DirectoryRetriever::load(dir.path(), 5).unwrap();
        assert_eq!(retriever.corpus_size(), 1);
        assert_eq!(retriever.retrieve("capital of France").unwrap().len(), 1);
    }
}
