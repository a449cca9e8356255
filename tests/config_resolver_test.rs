use atlassian_learning_mcp::config::resolver::{overlay, parse_properties};
use std::collections::HashMap;

#[test]
fn parses_flat_properties_skipping_comments_and_blanks() {
    let text = "# a comment\ninstanceName = demo\n\njira.baseUrl=https://x.atlassian.net\n=skipped\n";
    let map = parse_properties(text);
    assert_eq!(map.get("instanceName"), Some(&"demo".to_string()));
    assert_eq!(
        map.get("jira.baseUrl"),
        Some(&"https://x.atlassian.net".to_string())
    );
    assert_eq!(map.len(), 2);
}

#[test]
fn overlay_ignores_blank_values() {
    let mut base = HashMap::new();
    base.insert("k".to_string(), "base".to_string());
    let mut over = HashMap::new();
    over.insert("k".to_string(), "  ".to_string());
    overlay(&mut base, &over);
    assert_eq!(base.get("k"), Some(&"base".to_string()));
}
