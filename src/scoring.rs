use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::catalog::{TraitCatalog, builtin_traits};
use crate::prompt::{ProfileInfo, render_prediction_prompt};
use crate::table::{ChoiceWeights, ConfigError, ScoringTable, load_scoring_table, validate_traits};

// Metadata-only questions; their answers never contribute to trait scores.
pub const EXCLUDED_QUESTIONS: &[&str] = &[
    "question27",
    "question30",
    "question32",
    "question46",
    "question47",
    "question48",
    "question49",
    "question50",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multi(Vec<String>),
}

pub type NormalizedScores = BTreeMap<String, f64>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

// Wire form used by the questionnaire frontend: a flat list of
// {questionId, answer} records, folded into a map before scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerSubmission {
    #[serde(rename = "questionId")]
    pub question_id: String,
    pub answer: Answer,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("malformed answer set: {0}")]
    MalformedAnswers(#[source] serde_json::Error),
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, answer: Answer) {
        self.answers.insert(question_id.into(), answer);
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ScoringError> {
        serde_json::from_str(raw).map_err(ScoringError::MalformedAnswers)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ScoringError> {
        serde_json::from_value(value).map_err(ScoringError::MalformedAnswers)
    }

    // Later records win on a duplicate question id, matching the frontend's
    // reduce over the submission list.
    pub fn from_submissions(submissions: impl IntoIterator<Item = AnswerSubmission>) -> Self {
        let mut set = Self::new();
        for submission in submissions {
            set.answers.insert(submission.question_id, submission.answer);
        }
        set
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Answer)> {
        self.answers.iter()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    catalog: TraitCatalog,
    table: ScoringTable,
    max_possible: BTreeMap<String, i64>,
}

impl ScoreCalculator {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let catalog = builtin_traits();
        let table = load_scoring_table(path, &catalog)?;
        Ok(Self::assemble(catalog, table))
    }

    pub fn from_table(table: ScoringTable) -> Result<Self, ConfigError> {
        let catalog = builtin_traits();
        validate_traits(&table, &catalog)?;
        Ok(Self::assemble(catalog, table))
    }

    fn assemble(catalog: TraitCatalog, table: ScoringTable) -> Self {
        let max_possible = table.max_possible(&catalog);
        Self {
            catalog,
            table,
            max_possible,
        }
    }

    pub fn catalog(&self) -> &TraitCatalog {
        &self.catalog
    }

    pub fn table(&self) -> &ScoringTable {
        &self.table
    }

    // Pure function of (answers, table). Accumulation starts from a fresh
    // zeroed map on every call; no state survives between calls.
    pub fn calculate_scores(&self, answers: &AnswerSet) -> NormalizedScores {
        let mut raw: BTreeMap<&'static str, i64> = self
            .catalog
            .names()
            .iter()
            .map(|&name| (name, 0))
            .collect();

        for (question_id, answer) in answers.iter() {
            if EXCLUDED_QUESTIONS.contains(&question_id.as_str()) {
                continue;
            }
            let Some(choices) = self.table.question(question_id) else {
                continue;
            };
            match answer {
                Answer::Single(choice) => {
                    if let Some(weights) = choices.get(choice) {
                        self.add_trait_scores(&mut raw, weights);
                    }
                }
                Answer::Multi(selected) => {
                    for choice in selected {
                        if let Some(weights) = choices.get(choice) {
                            self.add_trait_scores(&mut raw, weights);
                        }
                    }
                }
            }
        }

        self.normalize(&raw)
    }

    fn add_trait_scores(&self, raw: &mut BTreeMap<&'static str, i64>, weights: &ChoiceWeights) {
        for (trait_name, &weight) in weights {
            if let Some(slot) = raw.get_mut(trait_name.as_str()) {
                *slot += weight;
            } else {
                // Unreachable with a validated table; guards against data
                // added behind the loader's back.
                warn!("ignoring unknown trait: {}", trait_name);
            }
        }
    }

    // Scores are scaled against the best single choice for each trait.
    // Multi-select answers that stack the same trait can exceed 100; the
    // result is deliberately not clamped.
    fn normalize(&self, raw: &BTreeMap<&'static str, i64>) -> NormalizedScores {
        let mut normalized = NormalizedScores::new();
        for (&trait_name, &score) in raw {
            let max = self.max_possible.get(trait_name).copied().unwrap_or(0);
            let value = if max > 0 {
                round2(score as f64 * 100.0 / max as f64)
            } else {
                0.0
            };
            normalized.insert(trait_name.to_string(), value);
        }
        normalized
    }

    pub fn render_prediction_prompt(
        &self,
        scores: &NormalizedScores,
        profile: &ProfileInfo,
    ) -> String {
        render_prediction_prompt(scores, profile)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "../tests/src_inline/scoring.rs"]
mod tests;
