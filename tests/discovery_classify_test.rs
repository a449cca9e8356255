use atlassian_learning_mcp::discovery::classify::classify;
use atlassian_learning_mcp::discovery::SearchMode;

#[test]
fn quoted_query_is_specific() {
    assert_eq!(classify("\"JUnit 5 docs\""), SearchMode::Specific);
}

#[test]
fn url_query_is_specific() {
    assert_eq!(classify("https://junit.org/junit5/docs"), SearchMode::Specific);
}

#[test]
fn learn_trigger_is_exploratory() {
    assert_eq!(
        classify("I want to learn programming"),
        SearchMode::Exploratory
    );
}

#[test]
fn plain_query_is_vague() {
    assert_eq!(classify("java concurrency"), SearchMode::Vague);
}

#[test]
fn specific_wins_over_exploratory_when_both_present() {
    assert_eq!(classify("official docs for learning Rust"), SearchMode::Specific);
}
