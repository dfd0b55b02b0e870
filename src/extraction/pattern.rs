// ============================================================
// Layer 5 - Pattern Extractor
// ============================================================
// A generic answer strategy parameterised by a regex describing
// what an answer of the type looks like (a date, a number, a
// capitalised name, …).
//
// Strategy:
//  1. Reduce the question to key terms (stop words removed).
//  2. Split every retrieved document into sentences and score
//     each sentence by weighted whole-word overlap with the key
//     terms. Sentences with no overlap are ignored.
//  3. Every regex match inside a relevant sentence is a candidate
//     span; its evidence is the sum of the relevance of every
//     sentence it appears in.
//  4. Spans already present in the question ("France" in "capital
//     of France") and spans made only of stop words are dropped.
//  5. Each span's score is its share of the total evidence, so
//     scores lie in [0, 1] and sum to 1.
//  6. Candidates are stably sorted best first; ties keep the order
//     in which spans were first seen.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashMap;

use crate::data::keywords::{contains_word, is_stop_word, key_terms, overlap_score};
use crate::data::preprocessor::split_sentences;
use crate::domain::answer::{rank_candidates, AnswerCandidate};
use crate::domain::document::Document;
use crate::domain::traits::AnswerExtractor;

const MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

pub struct PatternExtractor {
    span: Regex,
}

impl PatternExtractor {
    pub fn new(pattern: &str) -> Result<Self> {
        let span = Regex::new(pattern)
            .with_context(|| format!("Invalid extractor pattern '{pattern}'"))?;
        Ok(Self { span })
    }

    /// "14 July 1789", "July 14, 1789", "July 1789" or a bare year.
    pub fn dates() -> Result<Self> {
        Self::new(&format!(
            r"\b(?:\d{{1,2}}\s+)?(?:{MONTHS})(?:\s+\d{{1,2}})?(?:,?\s+\d{{4}})?\b|\b(?:1[0-9]{{3}}|20[0-9]{{2}})\b"
        ))
    }

    /// Integers and decimals, with optional thousands separators.
    pub fn counts() -> Result<Self> {
        Self::new(r"\b\d{1,3}(?:,\d{3})+(?:\.\d+)?\b|\b\d+(?:\.\d+)?\b")
    }

    /// Two or more consecutive capitalised words.
    pub fn person_names() -> Result<Self> {
        Self::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)+\b")
    }

    /// One or more consecutive capitalised words.
    pub fn places() -> Result<Self> {
        Self::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b")
    }
}

impl AnswerExtractor for PatternExtractor {
    fn extract(&self, question: &str, documents: &[Document]) -> Result<Vec<AnswerCandidate>> {
        let terms = key_terms(question);
        if terms.is_empty() {
            return Ok(Vec::new());
        }
        let question_lower = question.to_lowercase();

        // Insertion order is kept in `spans`; `index` only dedups
        let mut spans: Vec<(String, f64)>    = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            for sentence in split_sentences(&doc.text) {
                let relevance = overlap_score(&terms, &sentence.to_lowercase());
                if relevance <= 0.0 {
                    continue;
                }

                for m in self.span.find_iter(sentence) {
                    let span  = m.as_str().trim();
                    let lower = span.to_lowercase();
                    if span.is_empty()
                        || contains_word(&question_lower, &lower)
                        || lower.split_whitespace().all(is_stop_word)
                    {
                        continue;
                    }

                    match index.get(span) {
                        Some(&i) => spans[i].1 += relevance,
                        None => {
                            index.insert(span.to_string(), spans.len());
                            spans.push((span.to_string(), relevance));
                        }
                    }
                }
            }
        }

        let total: f64 = spans.iter().map(|(_, evidence)| evidence).sum();
        if total <= 0.0 {
            return Ok(Vec::new());
        }

        let candidates = spans
            .into_iter()
            .map(|(text, evidence)| AnswerCandidate::new(text, evidence / total))
            .collect();

        Ok(rank_candidates(candidates))
    }
}
