// ============================================================
// Layer 5 - Rule Table Classifier
// ============================================================
// Maps a question to a TypeLabel with an ordered list of
// case-insensitive regex rules. The first rule that matches
// wins; if none match the fallback label is returned.
//
// Built-in rules follow the usual two-level question taxonomy:
//   "capital of …", "which city …"   → LOC:city
//   "which country …"                → LOC:country
//   "where …"                        → LOC:other
//   "when …", "what year …"          → NUM:date
//   "how many / how much …"          → NUM:count
//   "who …"                          → HUM:ind
//   anything else                    → ENTY:other
//
// A custom table can be loaded from JSON:
//   {
//     "rules": [ {"pattern": "^who\\b", "coarse": "HUM", "fine": "ind"} ],
//     "fallback": {"coarse": "DESC", "fine": "def"}
//   }

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::domain::question::TypeLabel;
use crate::domain::traits::QuestionClassifier;

/// One entry of the rule table as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierRule {
    pub pattern: String,
    pub coarse:  String,
    pub fine:    String,
}

impl ClassifierRule {
    fn new(pattern: &str, coarse: &str, fine: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            coarse:  coarse.to_string(),
            fine:    fine.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    rules: Vec<ClassifierRule>,
    #[serde(default = "default_fallback")]
    fallback: TypeLabel,
}

fn default_fallback() -> TypeLabel {
    TypeLabel::new("ENTY", "other")
}

fn builtin_rules() -> Vec<ClassifierRule> {
    vec![
        ClassifierRule::new(r"\bcapital\s+(city\s+)?of\b|\b(which|what)\s+city\b", "LOC", "city"),
        ClassifierRule::new(r"\b(which|what)\s+country\b", "LOC", "country"),
        ClassifierRule::new(r"^\s*where\b", "LOC", "other"),
        ClassifierRule::new(r"^\s*when\b|\b(what|which)\s+(year|date|day)\b", "NUM", "date"),
        ClassifierRule::new(r"\bhow\s+(many|much)\b", "NUM", "count"),
        ClassifierRule::new(r"^\s*who\b", "HUM", "ind"),
    ]
}

/// Compiled, immutable rule table.
pub struct RuleClassifier {
    rules:    Vec<(Regex, TypeLabel)>,
    fallback: TypeLabel,
}

impl RuleClassifier {
    /// Compile a rule table. Fails on the first invalid pattern.
    pub fn from_rules(rules: Vec<ClassifierRule>, fallback: TypeLabel) -> Result<Self> {
        let rules = rules
            .into_iter()
            .map(|rule| {
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| format!("Invalid classifier pattern '{}'", rule.pattern))?;
                Ok((regex, TypeLabel::new(rule.coarse, rule.fine)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules, fallback })
    }

    /// The built-in English rule table.
    pub fn builtin() -> Result<Self> {
        Self::from_rules(builtin_rules(), default_fallback())
    }

    /// Load a rule table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read classifier rules from '{}'", path.display()))?;
        let file: RuleFile = serde_json::from_str(&json)
            .with_context(|| format!("Invalid classifier rules file '{}'", path.display()))?;

        tracing::info!(
            "Loaded {} classifier rules from '{}'",
            file.rules.len(),
            path.display()
        );
        Self::from_rules(file.rules, file.fallback)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl QuestionClassifier for RuleClassifier {
    fn classify(&self, question: &str) -> Result<TypeLabel> {
        let label = self
            .rules
            .iter()
            .find(|(regex, _)| regex.is_match(question))
            .map_or(&self.fallback, |(_, label)| label);
        Ok(label.clone())
    }
}
