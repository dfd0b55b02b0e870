// ============================================================
// Layer 3 - Answers and Cached Outcomes
// ============================================================
// AnswerCandidate - one extracted span and its confidence score.
// CachedAnswers   - what happened to a question, as a tagged
//                   variant rather than a nullable list:
//
//     Unsupported          → no extractor for the type  → null
//     NoAnswer             → extractor found nothing    → []
//     Answered(candidates) → ranked spans               → [[text, score], ...]
//
//   The null / [] distinction only shows up in the cache log;
//   the user sees the same "no answer" message for both.
//
// AnswerResult    - what `answer()` hands back to the caller.
// CacheRecord     - one line of the append-only cache log:
//     {"<uuid>": {"question": "...", "answers": <CachedAnswers>}}

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Fixed user-facing message for both degraded outcomes.
pub const NO_ANSWER_MESSAGE: &str = "Sorry, no answers found.";

/// Confidence reported alongside a missing answer.
pub const NO_ANSWER_CONFIDENCE: f64 = 1.0;

// ─── AnswerCandidate ──────────────────────────────────────────────────────────
/// An extracted answer span with a score in [0, 1].
///
/// Encoded on disk as a two-element array `[text, score]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct AnswerCandidate {
    pub text:  String,
    pub score: f64,
}

impl AnswerCandidate {
    /// Scores outside [0, 1] are clamped into range; NaN and
    /// infinities become 0.0, since JSON cannot encode them.
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        let score = if score.is_finite() { score.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            text: text.into(),
            score,
        }
    }
}

impl From<(String, f64)> for AnswerCandidate {
    fn from((text, score): (String, f64)) -> Self {
        Self::new(text, score)
    }
}

impl From<AnswerCandidate> for (String, f64) {
    fn from(c: AnswerCandidate) -> Self {
        (c.text, c.score)
    }
}

/// Sort candidates by descending score.
///
/// `sort_by` is stable, so candidates with equal scores keep the
/// order the extractor produced them in.
pub fn rank_candidates(mut candidates: Vec<AnswerCandidate>) -> Vec<AnswerCandidate> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

// ─── CachedAnswers ────────────────────────────────────────────────────────────
/// Terminal outcome of one question, as written to the cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "Option<Vec<AnswerCandidate>>",
    into = "Option<Vec<AnswerCandidate>>"
)]
pub enum CachedAnswers {
    /// No extractor is registered for the classified type
    Unsupported,

    /// An extractor ran but produced no candidates
    NoAnswer,

    /// Non-empty, ranked candidates (best first)
    Answered(Vec<AnswerCandidate>),
}

impl CachedAnswers {
    /// Wrap an extractor's output. An empty list is `NoAnswer`,
    /// so `Answered` is never empty.
    pub fn from_ranked(candidates: Vec<AnswerCandidate>) -> Self {
        if candidates.is_empty() {
            Self::NoAnswer
        } else {
            Self::Answered(candidates)
        }
    }

    /// The best candidate, if any.
    pub fn top(&self) -> Option<&AnswerCandidate> {
        match self {
            Self::Answered(candidates) => candidates.first(),
            Self::Unsupported | Self::NoAnswer => None,
        }
    }
}

impl From<Option<Vec<AnswerCandidate>>> for CachedAnswers {
    fn from(value: Option<Vec<AnswerCandidate>>) -> Self {
        match value {
            None             => Self::Unsupported,
            Some(candidates) => Self::from_ranked(candidates),
        }
    }
}

impl From<CachedAnswers> for Option<Vec<AnswerCandidate>> {
    fn from(value: CachedAnswers) -> Self {
        match value {
            CachedAnswers::Unsupported            => None,
            CachedAnswers::NoAnswer               => Some(Vec::new()),
            CachedAnswers::Answered(candidates)   => Some(candidates),
        }
    }
}

// ─── AnswerResult ─────────────────────────────────────────────────────────────
/// Value returned by the pipeline for one question.
///
/// The confidence flag only picks the variant; it never changes
/// which branch of the pipeline produced the value.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerResult {
    /// Top answer text, or [`NO_ANSWER_MESSAGE`]
    Text(String),

    /// Top answer and its score, or `(None, 1.0)` when there is no answer
    Scored {
        text:       Option<String>,
        confidence: f64,
    },
}

impl AnswerResult {
    /// Shape a terminal outcome for the caller.
    pub fn from_outcome(outcome: &CachedAnswers, want_confidence: bool) -> Self {
        match (outcome.top(), want_confidence) {
            (Some(best), true) => Self::Scored {
                text:       Some(best.text.clone()),
                confidence: best.score,
            },
            (Some(best), false) => Self::Text(best.text.clone()),
            (None, true) => Self::Scored {
                text:       None,
                confidence: NO_ANSWER_CONFIDENCE,
            },
            (None, false) => Self::Text(NO_ANSWER_MESSAGE.to_string()),
        }
    }
}

impl fmt::Display for AnswerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Scored { text: Some(text), confidence } => {
                write!(f, "{text} (confidence {confidence:.2})")
            }
            Self::Scored { text: None, .. } => f.write_str(NO_ANSWER_MESSAGE),
        }
    }
}

// ─── CacheRecord ──────────────────────────────────────────────────────────────
/// One self-contained line of the cache log, keyed by a fresh UUID.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheRecord {
    pub id:       Uuid,
    pub question: String,
    pub answers:  CachedAnswers,
}

#[derive(Serialize)]
struct CacheEntryRef<'a> {
    question: &'a str,
    answers:  &'a CachedAnswers,
}

#[derive(Deserialize)]
struct CacheEntry {
    question: String,
    answers:  CachedAnswers,
}

impl CacheRecord {
    /// Build a record with a freshly generated v4 identifier.
    pub fn new(question: impl Into<String>, answers: CachedAnswers) -> Self {
        Self {
            id:       Uuid::new_v4(),
            question: question.into(),
            answers,
        }
    }
}

impl Serialize for CacheRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            &self.id,
            &CacheEntryRef {
                question: &self.question,
                answers:  &self.answers,
            },
        )?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for CacheRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = HashMap::<Uuid, CacheEntry>::deserialize(deserializer)?;
        if map.len() != 1 {
            return Err(de::Error::invalid_length(map.len(), &"exactly one record id"));
        }
        let (id, entry) = map
            .into_iter()
            .next()
            .ok_or_else(|| de::Error::custom("empty cache record"))?;
        Ok(Self {
            id,
            question: entry.question,
            answers:  entry.answers,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn paris_lyon() -> Vec<AnswerCandidate> {
        vec![
            AnswerCandidate::new("Paris", 0.92),
            AnswerCandidate::new("Lyon", 0.10),
        ]
    }

    #[test]
    fn test_rank_is_descending_and_stable_on_ties() {
        let ranked = rank_candidates(vec![
            AnswerCandidate::new("a", 0.2),
            AnswerCandidate::new("b", 0.9),
            AnswerCandidate::new("c", 0.2),
        ]);
        let order: Vec<&str> = ranked.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_scores_are_clamped() {
        assert_eq!(AnswerCandidate::new("x", 1.7).score, 1.0);
        assert_eq!(AnswerCandidate::new("x", -0.3).score, 0.0);
    }

    #[test]
    fn test_non_finite_scores_become_zero() {
        assert_eq!(AnswerCandidate::new("x", f64::NAN).score, 0.0);
        assert_eq!(AnswerCandidate::new("x", f64::INFINITY).score, 0.0);
        assert_eq!(AnswerCandidate::new("x", f64::NEG_INFINITY).score, 0.0);
    }

    #[test]
    fn test_decoded_scores_are_clamped() {
        // A hand-edited cache line must not smuggle in out-of-range scores
        let answers: CachedAnswers =
            serde_json::from_str(r#"[["Paris", 5.0], ["Lyon", -1.0]]"#).unwrap();
        assert_eq!(
            answers,
            CachedAnswers::Answered(vec![
                AnswerCandidate::new("Paris", 1.0),
                AnswerCandidate::new("Lyon", 0.0),
            ])
        );
    }

    #[test]
    fn test_empty_extraction_is_no_answer() {
        assert_eq!(CachedAnswers::from_ranked(Vec::new()), CachedAnswers::NoAnswer);
    }

    #[test]
    fn test_null_and_empty_are_encoded_differently() {
        let unsupported = serde_json::to_string(&CachedAnswers::Unsupported).unwrap();
        let no_answer   = serde_json::to_string(&CachedAnswers::NoAnswer).unwrap();
        assert_eq!(unsupported, "null");
        assert_eq!(no_answer, "[]");
    }

    #[test]
    fn test_candidates_encode_as_pairs() {
        let json = serde_json::to_string(&CachedAnswers::Answered(paris_lyon())).unwrap();
        assert_eq!(json, r#"[["Paris",0.92],["Lyon",0.1]]"#);
    }

    #[test]
    fn test_cache_record_shape() {
        let record = CacheRecord::new("Who?", CachedAnswers::Unsupported);
        let value  = serde_json::to_value(&record).unwrap();
        let obj    = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);

        let entry = &obj[&record.id.to_string()];
        assert_eq!(entry["question"], "Who?");
        assert!(entry["answers"].is_null());
    }

    #[test]
    fn test_cache_record_reads_back() {
        let record = CacheRecord::new("Capital?", CachedAnswers::Answered(paris_lyon()));
        let line   = serde_json::to_string(&record).unwrap();
        let parsed: CacheRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_cache_record_rejects_multiple_ids() {
        let line = format!(
            r#"{{"{}": {{"question": "a", "answers": null}}, "{}": {{"question": "b", "answers": []}}}}"#,
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        assert!(serde_json::from_str::<CacheRecord>(&line).is_err());
    }

    #[test]
    fn test_result_shape_follows_confidence_flag() {
        let outcome = CachedAnswers::Answered(paris_lyon());
        assert_eq!(
            AnswerResult::from_outcome(&outcome, false),
            AnswerResult::Text("Paris".to_string())
        );
        assert_eq!(
            AnswerResult::from_outcome(&outcome, true),
            AnswerResult::Scored { text: Some("Paris".to_string()), confidence: 0.92 }
        );
    }

    #[test]
    fn test_degraded_outcomes_look_the_same_to_the_user() {
        for outcome in [CachedAnswers::Unsupported, CachedAnswers::NoAnswer] {
            assert_eq!(
                AnswerResult::from_outcome(&outcome, false),
                AnswerResult::Text(NO_ANSWER_MESSAGE.to_string())
            );
            assert_eq!(
                AnswerResult::from_outcome(&outcome, true),
                AnswerResult::Scored { text: None, confidence: 1.0 }
            );
        }
    }
}
