// ============================================================
// Layer 3 - Collaborator Traits
// ============================================================
// The answer pipeline only ever talks to these traits. Concrete
// implementations live in the classification, retrieval,
// extraction and infra layers; tests swap in in-memory fakes.
//
// Each trait is Send + Sync so one pipeline can serve questions
// from several threads at once.
//
// Failures returned from classify / retrieve / extract are
// collaborator faults: the pipeline does not recover from them
// and passes them straight back to its caller.

use anyhow::Result;

use crate::domain::answer::{AnswerCandidate, CachedAnswers};
use crate::domain::document::Document;
use crate::domain::question::TypeLabel;

// ─── QuestionClassifier ───────────────────────────────────────────────────────
/// Predicts the expected answer type of a question.
///
/// Implementations:
///   - RuleClassifier → ordered regex rule table
pub trait QuestionClassifier: Send + Sync {
    /// Must be deterministic for a given loaded model / rule table.
    fn classify(&self, question: &str) -> Result<TypeLabel>;
}

// ─── DocumentRetriever ────────────────────────────────────────────────────────
/// Fetches candidate source documents for a question.
///
/// Implementations:
///   - DirectoryRetriever → .txt / .docx files ranked by keyword overlap
///   - MockRetriever      → fixed fixture documents
pub trait DocumentRetriever: Send + Sync {
    /// Documents in relevance order. The order is passed through
    /// to the extractor unchanged.
    fn retrieve(&self, question: &str) -> Result<Vec<Document>>;
}

// ─── AnswerExtractor ──────────────────────────────────────────────────────────
/// A type-specific strategy for locating and scoring answer spans.
///
/// Implementations:
///   - PatternExtractor → regex spans weighted by sentence relevance
pub trait AnswerExtractor: Send + Sync {
    /// Candidates sorted best first. An empty Vec means "no answer".
    fn extract(&self, question: &str, documents: &[Document]) -> Result<Vec<AnswerCandidate>>;
}

// ─── AnswerCache ──────────────────────────────────────────────────────────────
/// Best-effort sink for question/answer records.
///
/// Implementations:
///   - CacheWriter → appends JSON lines to a file
pub trait AnswerCache: Send + Sync {
    /// Record one outcome. Never fails from the caller's point of view:
    /// write errors are logged and dropped by the implementation.
    fn record(&self, question: &str, answers: &CachedAnswers);
}
