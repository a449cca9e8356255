use atlassian_learning_mcp::scrape::extract::reading_time_minutes;
use atlassian_learning_mcp::scrape::ContentSummary;
use atlassian_learning_mcp::vault::Difficulty;

#[test]
fn content_summary_fields_are_internally_consistent() {
    let summary = ContentSummary {
        url: "https://example.test".to_string(),
        title: "Example".to_string(),
        summary: "Two sentences here. Done.".to_string(),
        word_count: 450,
        reading_time_minutes: reading_time_minutes(450),
        difficulty: Difficulty::Intermediate,
    };
    assert_eq!(summary.reading_time_minutes, 2);
}
