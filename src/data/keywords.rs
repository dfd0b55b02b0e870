// ============================================================
// Layer 4 - Keyword Overlap Scoring
// ============================================================
// Shared by the directory retriever (ranking documents) and the
// pattern extractor (ranking sentences).
//
// A question is reduced to its key terms: lowercase words with
// punctuation trimmed, minus stop words, keeping words longer
// than two characters and any purely numeric token ("2" in
// "Term 2"). A text scores the summed length of the key terms it
// contains as whole words, divided by the total term length + 1.
// Longer, more specific terms ("graduation") therefore count for
// more than short generic ones ("end"), and the score stays in
// [0, 1).

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "was", "were", "what", "when", "where", "which",
    "who", "whom", "whose", "why", "how", "does", "did", "will", "this", "that",
    "these", "those", "have", "has", "had", "from", "with", "many", "much", "is",
    "of", "in", "on", "at", "to", "a", "an", "it", "its", "be", "by", "or", "as",
    "name", "there", "their", "they",
];

/// True if `word` (lowercase) is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Lowercased key terms of a question, in order of appearance.
pub fn key_terms(question: &str) -> Vec<String> {
    question
        .split_whitespace()
        .map(|w| {
            w.to_lowercase()
                .trim_matches(|c: char| c.is_ascii_punctuation())
                .to_string()
        })
        .filter(|w| {
            !w.is_empty()
                && !is_stop_word(w)
                && (w.len() > 2 || w.chars().all(|c| c.is_ascii_digit()))
        })
        .collect()
}

/// Weighted share of `terms` found as whole words in `text_lower`.
///
/// `text_lower` must already be lowercased.
pub fn overlap_score(terms: &[String], text_lower: &str) -> f64 {
    let total_weight = terms.iter().map(|t| t.len() as f64).sum::<f64>() + 1.0;
    let matched = terms
        .iter()
        .filter(|t| contains_word(text_lower, t))
        .map(|t| t.len() as f64)
        .sum::<f64>();
    matched / total_weight
}

/// Whole-word substring test.
///
/// `word` only matches when surrounded by non-alphanumeric bytes or
/// string boundaries, so "how" does not match inside "showcase".
pub fn contains_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let tb = text.as_bytes();
    let wl = word.len();

    text.match_indices(word).any(|(i, _)| {
        let before_ok = i == 0 || !tb[i - 1].is_ascii_alphanumeric();
        let after_ok  = i + wl == tb.len() || !tb[i + wl].is_ascii_alphanumeric();
        before_ok && after_ok
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_terms_drop_stop_words_and_punctuation() {
        assert_eq!(
            key_terms("What is the capital of France?"),
            vec!["capital".to_string(), "france".to_string()]
        );
    }

    #[test]
    fn test_key_terms_keep_short_numbers() {
        assert_eq!(key_terms("When does Term 2 start"), vec!["term", "2", "start"]);
    }

    #[test]
    fn test_whole_word_match() {
        assert!(contains_word("how is the showcase", "how"));
        assert!(!contains_word("the showcase", "how"));
        assert!(contains_word("paris, france.", "france"));
        assert!(!contains_word("anything", ""));
    }

    #[test]
    fn test_overlap_prefers_longer_terms() {
        let terms = key_terms("capital France");
        let both  = overlap_score(&terms, "paris is the capital of france");
        let one   = overlap_score(&terms, "the capital city");
        let none  = overlap_score(&terms, "nothing relevant");
        assert!(both > one && one > none);
        assert_eq!(none, 0.0);
        assert!(both < 1.0);
    }
}
