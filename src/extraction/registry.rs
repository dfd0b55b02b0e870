// ============================================================
// Layer 5 - Extractor Registry
// ============================================================
// Maps an exact (coarse, fine) pair to an extraction strategy.
//
//   - No partial matching and no coarse-only fallback: ("LOC",
//     "city") and ("LOC", "other") are unrelated keys.
//   - A miss is a NoExtractorError value, which the pipeline
//     treats as the "unsupported type" branch.
//   - Registration happens while building the registry at
//     start-up. The pipeline owns it immutably afterwards, so
//     nothing can be registered while questions are answered.

use anyhow::Result;
use std::{collections::HashMap, sync::Arc};

use crate::domain::errors::NoExtractorError;
use crate::domain::question::TypeLabel;
use crate::domain::traits::AnswerExtractor;
use crate::extraction::pattern::PatternExtractor;

#[derive(Default)]
pub struct ExtractorRegistry {
    strategies: HashMap<TypeLabel, Arc<dyn AnswerExtractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `extractor` for one type pair. Re-registering a pair
    /// replaces the previous strategy.
    pub fn register(
        mut self,
        coarse:    impl Into<String>,
        fine:      impl Into<String>,
        extractor: Arc<dyn AnswerExtractor>,
    ) -> Self {
        let label = TypeLabel::new(coarse, fine);
        if self.strategies.insert(label.clone(), extractor).is_some() {
            tracing::warn!("Replacing extractor registered for {label}");
        }
        self
    }

    /// Look up the strategy for an exact type pair.
    pub fn resolve(&self, coarse: &str, fine: &str) -> Result<&dyn AnswerExtractor, NoExtractorError> {
        let label = TypeLabel::new(coarse, fine);
        self.strategies
            .get(&label)
            .map(|extractor| extractor.as_ref())
            .ok_or_else(|| NoExtractorError::from(&label))
    }

    /// Registered type pairs, sorted for display.
    pub fn labels(&self) -> Vec<&TypeLabel> {
        let mut labels: Vec<&TypeLabel> = self.strategies.keys().collect();
        labels.sort_by(|a, b| (&a.coarse, &a.fine).cmp(&(&b.coarse, &b.fine)));
        labels
    }
}

/// The registry used by the `ask` command.
///
/// One PatternExtractor instance is shared by the three location types.
pub fn default_registry() -> Result<ExtractorRegistry> {
    let places: Arc<dyn AnswerExtractor> = Arc::new(PatternExtractor::places()?);

    Ok(ExtractorRegistry::new()
        .register("NUM", "date", Arc::new(PatternExtractor::dates()?))
        .register("NUM", "count", Arc::new(PatternExtractor::counts()?))
        .register("HUM", "ind", Arc::new(PatternExtractor::person_names()?))
        .register("LOC", "city", Arc::clone(&places))
        .register("LOC", "country", Arc::clone(&places))
        .register("LOC", "other", places))
}
