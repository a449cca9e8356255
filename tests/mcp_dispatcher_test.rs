use atlassian_learning_mcp::mcp::dispatcher::registered_tool_names;

#[test]
fn table_contains_every_documented_tool_prefix() {
    let names = registered_tool_names();
    assert!(names.contains(&"jira_get_issue"));
    assert!(names.contains(&"confluence_get_page"));
    assert!(names.contains(&"bitbucket_get_pull_request"));
    assert!(names.contains(&"discover_resources"));
    assert!(names.contains(&"atlassian_unified_search"));
    assert_eq!(names.len(), 11 + 7 + 8 + 6 + 1);
}
