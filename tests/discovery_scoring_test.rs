use atlassian_learning_mcp::discovery::classify::SearchMode;
use atlassian_learning_mcp::discovery::keywords::{infer, tokenize};
use atlassian_learning_mcp::discovery::scoring::score_record;
use atlassian_learning_mcp::vault::{ConceptArea, Difficulty, Freshness, ResourceCategory, ResourceRecord};
use std::collections::BTreeSet;

fn junit_record() -> ResourceRecord {
    ResourceRecord {
        id: "junit5".to_string(),
        title: "JUnit 5 User Guide".to_string(),
        description: String::new(),
        url: "https://junit.org".to_string(),
        resource_type: "doc".to_string(),
        difficulty: Difficulty::Intermediate,
        freshness: Freshness::ActivelyMaintained,
        language_scope: String::new(),
        official: true,
        free: true,
        author: String::new(),
        categories: BTreeSet::from([ResourceCategory::Java]),
        concepts: BTreeSet::from([ConceptArea::Testing]),
        tags: vec!["junit".to_string(), "testing".to_string(), "java".to_string()],
    }
}

#[test]
fn specific_query_scores_high_for_matching_record() {
    let query = "\"JUnit 5 docs\"";
    let tokens = tokenize(query);
    let inferences = infer(&tokens);
    let score = score_record(query, &tokens, &inferences, SearchMode::Specific, &junit_record());
    assert!(score >= 60, "expected a high score, got {score}");
}

#[test]
fn score_never_exceeds_100() {
    let query = "junit";
    let tokens = tokenize(query);
    let inferences = infer(&tokens);
    let score = score_record(query, &tokens, &inferences, SearchMode::Specific, &junit_record());
    assert!(score <= 100);
}
