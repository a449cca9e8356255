use atlassian_learning_mcp::discovery::{discover, SearchMode};
use atlassian_learning_mcp::vault::{ConceptArea, Difficulty, Freshness, ResourceCategory, ResourceRecord, VaultStore};
use std::collections::BTreeSet;

fn junit_record() -> ResourceRecord {
    ResourceRecord {
        id: "junit5".to_string(),
        title: "JUnit 5 User Guide".to_string(),
        description: "Official JUnit 5 documentation".to_string(),
        url: "https://junit.org/junit5/docs/current/user-guide/".to_string(),
        resource_type: "doc".to_string(),
        difficulty: Difficulty::Intermediate,
        freshness: Freshness::ActivelyMaintained,
        language_scope: "en".to_string(),
        official: true,
        free: true,
        author: "JUnit Team".to_string(),
        categories: BTreeSet::from([ResourceCategory::Java]),
        concepts: BTreeSet::from([ConceptArea::Testing]),
        tags: vec![
            "junit".to_string(),
            "docs".to_string(),
            "testing".to_string(),
            "java".to_string(),
        ],
    }
}

fn concurrency_record() -> ResourceRecord {
    ResourceRecord {
        id: "java-concurrency".to_string(),
        title: "Java Concurrency in Practice".to_string(),
        description: "A deep dive into Java's concurrency utilities".to_string(),
        url: "https://example.test/java-concurrency".to_string(),
        resource_type: "book".to_string(),
        difficulty: Difficulty::Advanced,
        freshness: Freshness::Evergreen,
        language_scope: "en".to_string(),
        official: false,
        free: false,
        author: "Brian Goetz".to_string(),
        categories: BTreeSet::from([ResourceCategory::Java]),
        concepts: BTreeSet::from([ConceptArea::Concurrency]),
        tags: vec!["java".to_string(), "concurrency".to_string(), "threads".to_string()],
    }
}

fn beginner_record() -> ResourceRecord {
    ResourceRecord {
        id: "intro-programming".to_string(),
        title: "Intro to Programming for Absolute Beginners".to_string(),
        description: "A friendly first course".to_string(),
        url: "https://example.test/intro".to_string(),
        resource_type: "course".to_string(),
        difficulty: Difficulty::Beginner,
        freshness: Freshness::ActivelyMaintained,
        language_scope: "en".to_string(),
        official: true,
        free: true,
        author: "Example Academy".to_string(),
        categories: BTreeSet::new(),
        concepts: BTreeSet::new(),
        tags: vec!["beginner".to_string(), "programming".to_string()],
    }
}

#[test]
fn s1_specific_query_top_result_scores_at_least_85() {
    let vault = VaultStore::new(vec![junit_record(), concurrency_record()]);
    let result = discover(&vault, "\"JUnit 5 docs\"", 10);
    assert_eq!(result.mode, SearchMode::Specific);
    assert!(!result.results.is_empty());
    assert_eq!(result.results[0].record.id, "junit5");
    assert!(
        result.results[0].score >= 85,
        "expected score >= 85, got {}",
        result.results[0].score
    );
    assert!(result.suggestions.is_empty());
}

#[test]
fn s2_vague_query_orders_by_score_and_respects_threshold() {
    let vault = VaultStore::new(vec![junit_record(), concurrency_record()]);
    let result = discover(&vault, "java concurrency", 10);
    assert_eq!(result.mode, SearchMode::Vague);
    assert!(result.results.iter().any(|r| r.record.id == "java-concurrency"));
    assert!(result.results.iter().all(|r| r.score >= 20));
    for pair in result.results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn s3_exploratory_query_prefers_beginner_and_official_with_suggestions() {
    let vault = VaultStore::new(vec![junit_record(), concurrency_record(), beginner_record()]);
    let result = discover(&vault, "I want to learn programming", 10);
    assert_eq!(result.mode, SearchMode::Exploratory);
    assert!(!result.suggestions.is_empty());
}

#[test]
fn scores_are_always_in_bounds() {
    let vault = VaultStore::new(vec![junit_record(), concurrency_record(), beginner_record()]);
    let result = discover(&vault, "anything at all", 50);
    assert!(result.results.iter().all(|r| r.score <= 100));
}

#[test]
fn discovery_is_deterministic_for_a_fixed_vault_and_query() {
    let vault = VaultStore::new(vec![junit_record(), concurrency_record(), beginner_record()]);
    let first = discover(&vault, "java concurrency", 10);
    let second = discover(&vault, "java concurrency", 10);
    let first_ids: Vec<_> = first.results.iter().map(|r| r.record.id.clone()).collect();
    let second_ids: Vec<_> = second.results.iter().map(|r| r.record.id.clone()).collect();
    assert_eq!(first_ids, second_ids);
}
