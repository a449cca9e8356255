use atlassian_learning_mcp::discovery::{DiscoveryResult, SearchMode};
use atlassian_learning_mcp::export::plain::render;

const BAR: &str = "================================================================";

#[test]
fn renders_header_and_bars_for_empty_result() {
    let result = DiscoveryResult {
        mode: SearchMode::Vague,
        results: vec![],
        summary: "0 matches for mode VAGUE; resolved concepts: ; categories: ".to_string(),
        suggestions: vec![],
        resolved_keywords: vec![],
    };
    let text = render(&result);
    assert!(text.contains("DISCOVERY RESULTS"));
    assert!(text.contains(BAR));
}
