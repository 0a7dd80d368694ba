pub mod catalog;
pub mod prompt;
pub mod scoring;
pub mod table;

pub use catalog::{TraitCatalog, builtin_traits};
pub use prompt::{ProfileInfo, render_prediction_prompt};
pub use scoring::{
    Answer, AnswerSet, AnswerSubmission, EXCLUDED_QUESTIONS, NormalizedScores, ScoreCalculator,
    ScoringError,
};
pub use table::{ConfigError, ScoringTable, load_scoring_table};
