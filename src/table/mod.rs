use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::TraitCatalog;

pub mod loader;

pub use loader::{load_scoring_table, validate_traits};

pub type ChoiceWeights = BTreeMap<String, i64>;
pub type QuestionChoices = BTreeMap<String, ChoiceWeights>;

// question id -> choice id -> trait name -> weight. Loaded once, read-only
// for the process lifetime.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ScoringTable {
    questions: BTreeMap<String, QuestionChoices>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing scoring table: {0}")]
    Missing(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("scoring table references undefined traits: {}", .0.join(", "))]
    UndefinedTraits(Vec<String>),
}

impl ScoringTable {
    pub fn question(&self, question_id: &str) -> Option<&QuestionChoices> {
        self.questions.get(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &QuestionChoices)> {
        self.questions.iter()
    }

    pub fn n_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn n_choices(&self) -> usize {
        self.questions.values().map(|choices| choices.len()).sum()
    }

    // Highest single-choice weight per catalog trait across the whole table.
    // Traits the table never mentions stay at 0, which normalization treats
    // as "always 0.0" to avoid dividing by zero.
    pub fn max_possible(&self, catalog: &TraitCatalog) -> BTreeMap<String, i64> {
        let mut max: BTreeMap<String, i64> = catalog
            .names()
            .iter()
            .map(|&name| (name.to_string(), 0))
            .collect();

        for choices in self.questions.values() {
            for weights in choices.values() {
                for (trait_name, &weight) in weights {
                    if let Some(slot) = max.get_mut(trait_name) {
                        if weight > *slot {
                            *slot = weight;
                        }
                    }
                }
            }
        }

        max
    }
}
