// ============================================================
// Layer 3 - Question and TypeLabel
// ============================================================
// A Question is the user's text with surrounding whitespace
// trimmed. Empty input is NOT rejected here; whether an empty
// question is meaningful is up to the classifier.
//
// A TypeLabel is the (coarse, fine) pair the classifier returns,
// e.g. ("LOC", "city"). It is the only key used to look up an
// extractor in the registry, so equality is exact and
// case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable, trimmed question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Normalise raw user input by trimming surrounding whitespace.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two-level answer type produced once per question by classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeLabel {
    /// Broad category, e.g. "LOC", "NUM", "HUM"
    pub coarse: String,

    /// Category within the coarse type, e.g. "city", "date"
    pub fine: String,
}

impl TypeLabel {
    pub fn new(coarse: impl Into<String>, fine: impl Into<String>) -> Self {
        Self {
            coarse: coarse.into(),
            fine:   fine.into(),
        }
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.coarse, self.fine)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_is_trimmed() {
        let q = Question::new("  What is the capital of France?\n");
        assert_eq!(q.as_str(), "What is the capital of France?");
    }

    #[test]
    fn test_whitespace_only_question_becomes_empty() {
        // Passed on to the classifier as-is, never rejected here
        let q = Question::new(" \t\n ");
        assert!(q.is_empty());
    }

    #[test]
    fn test_type_label_lookup_is_case_sensitive() {
        assert_ne!(TypeLabel::new("LOC", "city"), TypeLabel::new("LOC", "CITY"));
        assert_eq!(TypeLabel::new("LOC", "city").to_string(), "LOC: city");
    }
}
