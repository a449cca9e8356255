use atlassian_learning_mcp::discovery::{DiscoveryResult, SearchMode};
use atlassian_learning_mcp::export::markdown::{parse_ranked_table, render};
use atlassian_learning_mcp::vault::{ConceptArea, Difficulty, Freshness, ResourceCategory, ResourceRecord, ScoredResource};
use std::collections::BTreeSet;

fn sample_result() -> DiscoveryResult {
    let record_a = ResourceRecord {
        id: "a".to_string(),
        title: "Resource A".to_string(),
        description: "First resource".to_string(),
        url: "https://example.test/a".to_string(),
        resource_type: "doc".to_string(),
        difficulty: Difficulty::Beginner,
        freshness: Freshness::Evergreen,
        language_scope: "en".to_string(),
        official: true,
        free: true,
        author: "Author A".to_string(),
        categories: BTreeSet::from([ResourceCategory::Rust]),
        concepts: BTreeSet::from([ConceptArea::Concurrency]),
        tags: vec!["rust".to_string()],
    };
    let record_b = ResourceRecord {
        id: "b".to_string(),
        ..record_a.clone()
    };
    DiscoveryResult {
        mode: SearchMode::Vague,
        results: vec![
            ScoredResource {
                record: record_a,
                score: 90,
            },
            ScoredResource {
                record: record_b,
                score: 45,
            },
        ],
        summary: "2 matches for mode VAGUE; resolved concepts: CONCURRENCY; categories: RUST".to_string(),
        suggestions: vec![],
        resolved_keywords: vec!["rust".to_string()],
    }
}

#[test]
fn round_trips_ranked_table_triples() {
    let result = sample_result();
    let markdown = render(&result);
    let parsed = parse_ranked_table(&markdown);
    let expected: Vec<(String, u32, usize)> = result
        .results
        .iter()
        .enumerate()
        .map(|(i, s)| (s.record.id.clone(), s.score, i + 1))
        .collect();
    assert_eq!(parsed, expected);
}

#[test]
fn renders_title_and_suggestions() {
    let mut result = sample_result();
    result.suggestions.push("Explore CONTAINERS".to_string());
    let markdown = render(&result);
    assert!(markdown.starts_with("# Discovery Results"));
    assert!(markdown.contains("## Suggestions"));
    assert!(markdown.contains("Explore CONTAINERS"));
}
