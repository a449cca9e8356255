use atlassian_learning_mcp::formatters::util::{dash_if_blank, truncate, unassigned_if_blank};

#[test]
fn truncates_at_character_boundary() {
    assert_eq!(truncate("hello world", 8), "hello...");
    assert_eq!(truncate("short", 40), "short");
}

#[test]
fn blank_fields_use_sentinels() {
    assert_eq!(dash_if_blank("  "), "-");
    assert_eq!(unassigned_if_blank(""), "_Unassigned_");
    assert_eq!(dash_if_blank("value"), "value");
}
