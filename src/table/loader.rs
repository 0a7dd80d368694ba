use std::collections::BTreeSet;
use std::path::Path;

use tracing::{info, warn};

use crate::catalog::TraitCatalog;
use crate::table::{ConfigError, ScoringTable};

pub fn load_scoring_table(
    path: &Path,
    catalog: &TraitCatalog,
) -> Result<ScoringTable, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Missing(path.display().to_string()));
    }

    let raw = std::fs::read_to_string(path)?;
    let table: ScoringTable =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    validate_traits(&table, catalog)?;

    info!(
        "loaded scoring table: path={}, questions={}, choices={}",
        path.display(),
        table.n_questions(),
        table.n_choices()
    );

    Ok(table)
}

// Every trait a choice references must be a catalog member. All offenders
// are collected before failing, not just the first.
pub fn validate_traits(table: &ScoringTable, catalog: &TraitCatalog) -> Result<(), ConfigError> {
    let mut undefined = BTreeSet::new();

    for (_, choices) in table.iter() {
        for weights in choices.values() {
            for trait_name in weights.keys() {
                if !catalog.contains(trait_name) {
                    undefined.insert(trait_name.clone());
                }
            }
        }
    }

    if undefined.is_empty() {
        return Ok(());
    }

    let undefined: Vec<String> = undefined.into_iter().collect();
    warn!(
        "scoring table references undefined traits: {}",
        undefined.join(", ")
    );
    Err(ConfigError::UndefinedTraits(undefined))
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/loader.rs"]
mod tests;
