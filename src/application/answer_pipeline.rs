// ============================================================
// Layer 2 - Answer Pipeline
// ============================================================
// The orchestrator. One call to `answer` walks:
//
//   START
//     │  classify(question)
//     ▼
//   CLASSIFIED
//     │  registry.resolve(coarse, fine)
//     ▼
//   STRATEGY_RESOLVED ──── no extractor ───▶ UNSUPPORTED  (cache: null)
//     │  retrieve(question)
//     ▼
//   DOCS_RETRIEVED
//     │  strategy.extract(question, documents)
//     ▼
//   EXTRACTED ──── no candidates ─────────▶ NO_ANSWER    (cache: [])
//     │
//     ▼
//   ANSWERED                                               (cache: ranked list)
//
// Rules:
//   - Retrieval only happens once a strategy exists, so an
//     unsupported question costs one classifier call.
//   - Exactly one cache record per question, whichever terminal
//     state is reached. Cache failures never reach the caller.
//   - Classifier, retriever and extractor errors are not
//     recovered: they propagate and nothing is cached.
//   - `want_confidence` only changes the shape of the result.
//   - The full ranked list is only surfaced (as log output) in
//     debug mode; callers get the top candidate.
//
// Why are the collaborators trait objects?
//   - Tests swap in fixed classifiers and recording caches
//   - The CLI picks directory or mock retrieval at startup
//     without the pipeline knowing which one it got
//
// Reference: Rust Book §17 (Using Trait Objects)

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::domain::answer::{AnswerCandidate, AnswerResult, CachedAnswers};
use crate::domain::question::Question;
use crate::domain::traits::{AnswerCache, DocumentRetriever, QuestionClassifier};
use crate::extraction::registry::ExtractorRegistry;
use crate::infra::config::PipelineConfig;

pub struct AnswerPipeline {
    classifier: Arc<dyn QuestionClassifier>,
    registry:   ExtractorRegistry,
    retriever:  Arc<dyn DocumentRetriever>,
    cache:      Arc<dyn AnswerCache>,
    config:     PipelineConfig,
}

impl AnswerPipeline {
    pub fn new(
        classifier: Arc<dyn QuestionClassifier>,
        registry:   ExtractorRegistry,
        retriever:  Arc<dyn DocumentRetriever>,
        cache:      Arc<dyn AnswerCache>,
        config:     PipelineConfig,
    ) -> Self {
        Self { classifier, registry, retriever, cache, config }
    }

    /// Answer one question.
    ///
    /// Returns the top answer text, or with `want_confidence` the
    /// `(text, score)` pair. When no answer can be given the result is
    /// the fixed no-answer message, or `(None, 1.0)`.
    pub fn answer(&self, question: &str, want_confidence: bool) -> Result<AnswerResult> {
        let question = Question::new(question);
        let outcome  = self.run(&question)?;
        Ok(AnswerResult::from_outcome(&outcome, want_confidence))
    }

    fn run(&self, question: &Question) -> Result<CachedAnswers> {
        tracing::info!("answering question: {question}");
        if question.is_empty() {
            tracing::debug!("question is empty after trimming; classifying it anyway");
        }

        // ── Classify ──────────────────────────────────────────────────────────
        tracing::debug!("classifying question...");
        let label = self
            .classifier
            .classify(question.as_str())
            .context("question classification failed")?;
        tracing::info!("question classified as: {label}");

        // ── Resolve strategy ──────────────────────────────────────────────────
        let extractor = match self.registry.resolve(&label.coarse, &label.fine) {
            Ok(extractor) => extractor,
            Err(e) => {
                tracing::info!("unsupported question type: {e}");
                return Ok(self.finish(question, CachedAnswers::Unsupported));
            }
        };

        // ── Retrieve ──────────────────────────────────────────────────────────
        tracing::debug!("retrieving documents...");
        let documents = self
            .retriever
            .retrieve(question.as_str())
            .context("document retrieval failed")?;
        tracing::debug!("retrieved {} documents", documents.len());

        // ── Extract & rank ────────────────────────────────────────────────────
        let candidates = extractor
            .extract(question.as_str(), &documents)
            .with_context(|| format!("answer extraction failed for {label}"))?;

        let outcome = CachedAnswers::from_ranked(candidates);
        match &outcome {
            CachedAnswers::Answered(candidates) => {
                tracing::info!("best answer: {}", candidates[0].text);
                if self.config.debug {
                    log_ranked(candidates);
                }
            }
            CachedAnswers::NoAnswer | CachedAnswers::Unsupported => {
                tracing::info!("No answers found!");
            }
        }

        Ok(self.finish(question, outcome))
    }

    /// Record the terminal outcome, then hand it back.
    fn finish(&self, question: &Question, outcome: CachedAnswers) -> CachedAnswers {
        self.cache.record(question.as_str(), &outcome);
        outcome
    }
}

/// The debug listing: a header, a rule, then one `score\ttext` line per
/// candidate in extractor order.
fn ranked_lines(candidates: &[AnswerCandidate]) -> Vec<String> {
    let mut lines = Vec::with_capacity(candidates.len() + 2);
    lines.push("Possible answers:".to_string());
    lines.push("-".repeat(40));
    lines.extend(candidates.iter().map(|c| format!("{:.2}\t{}", c.score, c.text)));
    lines
}

fn log_ranked(candidates: &[AnswerCandidate]) {
    for line in ranked_lines(candidates) {
        tracing::info!("{line}");
    }
}
