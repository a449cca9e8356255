//! Loads the hard-coded vault seed data, treated as a data file loaded at
//! startup, from `data/vault_seed.json`.

use super::types::{ConceptArea, Difficulty, Freshness, ResourceCategory, ResourceRecord};
use crate::error::{GatewayError, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SeedRecord {
    id: String,
    title: String,
    description: String,
    url: String,
    #[serde(rename = "type")]
    resource_type: String,
    difficulty: String,
    freshness: String,
    #[serde(default)]
    language_scope: String,
    #[serde(default)]
    official: bool,
    #[serde(default = "default_true")]
    free: bool,
    #[serde(default)]
    author: String,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    concepts: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl SeedRecord {
    fn into_record(self) -> ResourceRecord {
        let difficulty = Difficulty::parse(&self.difficulty).unwrap_or_else(|| {
            tracing::warn!(id = %self.id, raw = %self.difficulty, "unrecognized difficulty, defaulting to Intermediate");
            Difficulty::Intermediate
        });
        let freshness = Freshness::parse(&self.freshness).unwrap_or_else(|| {
            tracing::warn!(id = %self.id, raw = %self.freshness, "unrecognized freshness, defaulting to PeriodicallyUpdated");
            Freshness::PeriodicallyUpdated
        });
        let categories: BTreeSet<ResourceCategory> = self
            .categories
            .iter()
            .filter_map(|c| ResourceCategory::parse(c))
            .collect();
        let concepts: BTreeSet<ConceptArea> = self
            .concepts
            .iter()
            .filter_map(|c| ConceptArea::parse(c))
            .collect();

        ResourceRecord {
            id: self.id,
            title: self.title,
            description: self.description,
            url: self.url,
            resource_type: self.resource_type,
            difficulty,
            freshness,
            language_scope: self.language_scope,
            official: self.official,
            free: self.free,
            author: self.author,
            categories,
            concepts,
            tags: self.tags,
        }
    }
}

/// Reads and parses the seed file. A missing seed file is a startup
/// ConfigLoadError-shaped failure: the vault cannot be hydrated without it.
pub fn load_seed(path: &Path) -> Result<Vec<ResourceRecord>> {
    let text = std::fs::read_to_string(path).map_err(|e| GatewayError::ConfigLoadError {
        message: format!("failed to read vault seed file {}: {e}", path.display()),
    })?;
    let raw: Vec<SeedRecord> =
        serde_json::from_str(&text).map_err(GatewayError::SerializationError)?;
    Ok(raw.into_iter().map(SeedRecord::into_record).collect())
}
