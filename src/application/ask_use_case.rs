// ============================================================
// Layer 2 - Ask Use Case
// ============================================================
// Builds every collaborator exactly once from PipelineConfig and
// keeps them in an AnswerPipeline for the rest of the process:
//
//   classifier - RuleClassifier (custom rule file or built-ins)
//   retriever  - MockRetriever if mock_retrieval, else DirectoryRetriever
//   registry   - default_registry()
//   cache      - CacheWriter (no-op when cache_enabled is false)
//
// Any failure here (bad rule file, unreadable corpus, malformed
// fixture) is fatal and returned to the CLI.

use anyhow::Result;
use std::sync::Arc;

use crate::application::answer_pipeline::AnswerPipeline;
use crate::classification::rules::RuleClassifier;
use crate::domain::answer::AnswerResult;
use crate::domain::traits::{DocumentRetriever, QuestionClassifier};
use crate::extraction::registry::default_registry;
use crate::infra::cache_writer::CacheWriter;
use crate::infra::config::PipelineConfig;
use crate::retrieval::{directory::DirectoryRetriever, mock::MockRetriever};

pub struct AskUseCase {
    pipeline: AnswerPipeline,
}

impl AskUseCase {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let rules = match &config.classifier_rules {
            Some(path) => RuleClassifier::load(path)?,
            None       => RuleClassifier::builtin()?,
        };
        tracing::debug!("Classifier ready with {} rules", rules.rule_count());
        let classifier: Arc<dyn QuestionClassifier> = Arc::new(rules);

        let retriever: Arc<dyn DocumentRetriever> = if config.mock_retrieval {
            tracing::info!("Using mock retrieval from '{}'", config.mock_documents.display());
            Arc::new(MockRetriever::from_file(&config.mock_documents)?)
        } else {
            let directory = DirectoryRetriever::load(&config.docs_dir, config.max_documents)?;
            if directory.corpus_size() == 0 {
                tracing::warn!(
                    "No documents under '{}' - every question will go unanswered",
                    config.docs_dir.display()
                );
            }
            Arc::new(directory)
        };

        let registry = default_registry()?;
        let labels: Vec<String> = registry.labels().iter().map(ToString::to_string).collect();
        tracing::debug!("Extractors registered for: {}", labels.join(", "));

        let cache = Arc::new(CacheWriter::new(&config.cache_file, config.cache_enabled));
        if cache.is_enabled() {
            tracing::debug!("Caching questions to '{}'", cache.path().display());
        } else {
            tracing::debug!("Question cache disabled");
        }

        let pipeline = AnswerPipeline::new(classifier, registry, retriever, cache, config);
        Ok(Self { pipeline })
    }

    pub fn answer(&self, question: &str, want_confidence: bool) -> Result<AnswerResult> {
        self.pipeline.answer(question, want_confidence)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answer::{CachedAnswers, NO_ANSWER_MESSAGE};
    use crate::infra::cache_writer::read_records;
    use std::fs;
    use std::path::Path;

    fn mock_config(dir: &Path) -> PipelineConfig {
        let fixture = dir.join("mock.json");
        fs::write(
            &fixture,
            r#"[
                {"source": "france", "text": "Paris is the capital of France. Lyon is a large city in France."},
                {"source": "germany", "text": "Berlin is the capital of Germany."}
            ]"#,
        )
        .unwrap();

        PipelineConfig {
            cache_file:     dir.join("cache.jsonl"),
            mock_retrieval: true,
            mock_documents: fixture,
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn test_end_to_end_with_mock_retrieval() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = mock_config(dir.path());
        let cache_file = cfg.cache_file.clone();

        let ask = AskUseCase::new(cfg).unwrap();
        assert_eq!(
            ask.answer("What is the capital of France?", false).unwrap(),
            AnswerResult::Text("Paris".into())
        );

        let records = read_records(&cache_file).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].answers.top().unwrap().text, "Paris");
    }

    #[test]
    fn test_unclassifiable_question_is_cached_as_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = mock_config(dir.path());
        let cache_file = cfg.cache_file.clone();

        let ask = AskUseCase::new(cfg).unwrap();
        assert_eq!(
            ask.answer("Tell me a joke", false).unwrap(),
            AnswerResult::Text(NO_ANSWER_MESSAGE.into())
        );
        assert_eq!(read_records(&cache_file).unwrap()[0].answers, CachedAnswers::Unsupported);
    }

    #[test]
    fn test_directory_retrieval_and_disabled_cache() {
        let dir  = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(docs.join("mars.txt"), "Mars has 2 moons.").unwrap();

        let cfg = PipelineConfig {
            cache_enabled: false,
            cache_file:    dir.path().join("cache.jsonl"),
            docs_dir:      docs,
            ..PipelineConfig::default()
        };
        let cache_file = cfg.cache_file.clone();

        let ask = AskUseCase::new(cfg).unwrap();
        assert_eq!(
            ask.answer("How many moons does Mars have?", true).unwrap(),
            AnswerResult::Scored { text: Some("2".into()), confidence: 1.0 }
        );
        assert!(!cache_file.exists());
    }

    #[test]
    fn test_bad_rule_file_is_fatal() {
        let dir   = tempfile::tempdir().unwrap();
        let rules = dir.path().join("rules.json");
        fs::write(&rules, "{ not json").unwrap();

        let cfg = PipelineConfig {
            classifier_rules: Some(rules),
            ..mock_config(dir.path())
        };
        assert!(AskUseCase::new(cfg).is_err());
    }
}
