//! Step 3 of the discovery engine: seven weighted scoring dimensions,
//! each in [0, 1].

use super::classify::SearchMode;
use super::keywords::Inferences;
use crate::vault::{Difficulty, ResourceRecord};

const WEIGHT_TITLE: f64 = 0.25;
const WEIGHT_CONCEPT: f64 = 0.20;
const WEIGHT_CATEGORY: f64 = 0.15;
const WEIGHT_TAG: f64 = 0.10;
const WEIGHT_DIFFICULTY: f64 = 0.10;
const WEIGHT_OFFICIAL: f64 = 0.10;
const WEIGHT_FRESHNESS: f64 = 0.10;

fn title_score(query: &str, tokens: &[String], record: &ResourceRecord) -> f64 {
    let title_lower = record.title.to_ascii_lowercase();
    let query_lower = query.trim().trim_matches(|c| c == '"' || c == '\'').to_ascii_lowercase();
    if !query_lower.is_empty() && title_lower.contains(&query_lower) {
        return 1.0;
    }
    if tokens.iter().any(|t| title_lower.contains(t.as_str())) {
        return 0.6;
    }
    0.0
}

fn concept_score(inferences: &Inferences, record: &ResourceRecord) -> f64 {
    if inferences.concepts.is_empty() {
        return 0.0;
    }
    let overlap = inferences.concepts.intersection(&record.concepts).count();
    overlap as f64 / inferences.concepts.len().max(1) as f64
}

fn category_score(inferences: &Inferences, record: &ResourceRecord) -> f64 {
    if inferences.categories.is_empty() {
        return 0.0;
    }
    let overlap = inferences
        .categories
        .intersection(&record.categories)
        .count();
    overlap as f64 / inferences.categories.len().max(1) as f64
}

fn tag_score(tokens: &[String], record: &ResourceRecord) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let tags_lower: Vec<String> = record.tags.iter().map(|t| t.to_ascii_lowercase()).collect();
    let matched = tokens.iter().filter(|t| tags_lower.contains(t)).count();
    matched as f64 / tokens.len() as f64
}

fn difficulty_score(mode: SearchMode, record: &ResourceRecord) -> f64 {
    match mode {
        SearchMode::Exploratory => {
            if record.difficulty == Difficulty::Beginner {
                1.0
            } else {
                0.5
            }
        }
        SearchMode::Specific => 1.0,
        SearchMode::Vague => {
            if record.difficulty == Difficulty::Intermediate {
                1.0
            } else {
                0.7
            }
        }
    }
}

fn official_score(mode: SearchMode, record: &ResourceRecord) -> f64 {
    if record.official && matches!(mode, SearchMode::Specific | SearchMode::Exploratory) {
        1.0
    } else {
        0.5
    }
}

/// Overall score = round(100 * sum(weight_i * dimension_i)), clamped into
/// [0, 100].
#[must_use]
pub fn score_record(
    query: &str,
    tokens: &[String],
    inferences: &Inferences,
    mode: SearchMode,
    record: &ResourceRecord,
) -> u32 {
    let weighted = WEIGHT_TITLE * title_score(query, tokens, record)
        + WEIGHT_CONCEPT * concept_score(inferences, record)
        + WEIGHT_CATEGORY * category_score(inferences, record)
        + WEIGHT_TAG * tag_score(tokens, record)
        + WEIGHT_DIFFICULTY * difficulty_score(mode, record)
        + WEIGHT_OFFICIAL * official_score(mode, record)
        + WEIGHT_FRESHNESS * record.freshness.score();

    let raw = (weighted * 100.0).round();
    raw.clamp(0.0, 100.0) as u32
}
