//! Orchestrates classification, inference, scoring, ordering and
//! suggestion generation.

use super::classify::{classify, SearchMode};
use super::keywords::{infer, tokenize};
use super::scoring::score_record;
use crate::vault::{ScoredResource, VaultStore};

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 50;

fn drop_threshold(mode: SearchMode) -> u32 {
    match mode {
        SearchMode::Specific => 30,
        SearchMode::Vague => 20,
        SearchMode::Exploratory => 10,
    }
}

#[derive(Debug, Clone)]
pub struct DiscoveryResult {
    pub mode: SearchMode,
    pub results: Vec<ScoredResource>,
    pub summary: String,
    pub suggestions: Vec<String>,
    pub resolved_keywords: Vec<String>,
}

/// Runs the full discovery pipeline for a free-form `query` against
/// `vault`, honoring `limit` (clamped to `[1, MAX_LIMIT]`, default
/// `DEFAULT_LIMIT` when zero).
#[must_use]
pub fn discover(vault: &VaultStore, query: &str, limit: usize) -> DiscoveryResult {
    let mode = classify(query);
    let tokens = tokenize(query);
    let inferences = infer(&tokens);

    let limit = if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    };

    let all_records = vault.all();
    let mut scored: Vec<ScoredResource> = all_records
        .iter()
        .map(|record| ScoredResource {
            record: record.clone(),
            score: score_record(query, &tokens, &inferences, mode, record),
        })
        .collect();

    let threshold = drop_threshold(mode);
    scored.retain(|s| s.score >= threshold);

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.record.official.cmp(&a.record.official))
            .then_with(|| b.record.freshness.rank().cmp(&a.record.freshness.rank()))
            .then_with(|| a.record.title.cmp(&b.record.title))
    });
    scored.truncate(limit);

    let concept_labels: Vec<&str> = inferences.concepts.iter().map(|c| c.label()).collect();
    let category_labels: Vec<&str> = inferences.categories.iter().map(|c| c.label()).collect();

    let summary = format!(
        "{} matches for mode {}; resolved concepts: {}; categories: {}",
        scored.len(),
        mode.label(),
        concept_labels.join(", "),
        category_labels.join(", "),
    );

    let mut suggestions = Vec::new();
    if scored.is_empty() {
        suggestions.extend(did_you_mean(&all_records, &tokens, 5));
    }
    if mode == SearchMode::Exploratory {
        suggestions.extend(broader_concept_suggestions(&inferences, 3));
    }

    DiscoveryResult {
        mode,
        results: scored,
        summary,
        suggestions,
        resolved_keywords: tokens,
    }
}

/// "Did you mean?" fallback: up to `limit` titles
/// containing any query token.
fn did_you_mean(records: &[crate::vault::ResourceRecord], tokens: &[String], limit: usize) -> Vec<String> {
    records
        .iter()
        .filter(|r| {
            let title_lower = r.title.to_ascii_lowercase();
            tokens.iter().any(|t| title_lower.contains(t.as_str()))
        })
        .take(limit)
        .map(|r| r.title.clone())
        .collect()
}

/// Broader-concept suggestions for EXPLORATORY queries:
/// names adjacent concept areas not already inferred.
fn broader_concept_suggestions(inferences: &super::keywords::Inferences, limit: usize) -> Vec<String> {
    use crate::vault::ConceptArea;
    const ALL_CONCEPTS: &[ConceptArea] = &[
        ConceptArea::Concurrency,
        ConceptArea::DesignPatterns,
        ConceptArea::Containers,
        ConceptArea::Testing,
        ConceptArea::Databases,
        ConceptArea::WebDevelopment,
        ConceptArea::Security,
        ConceptArea::Algorithms,
        ConceptArea::SystemsProgramming,
        ConceptArea::FunctionalProgramming,
        ConceptArea::Devops,
        ConceptArea::Networking,
        ConceptArea::MachineLearning,
    ];
    ALL_CONCEPTS
        .iter()
        .filter(|c| !inferences.concepts.contains(c))
        .take(limit)
        .map(|c| format!("Explore {}", c.label()))
        .collect()
}
