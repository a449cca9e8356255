use atlassian_learning_mcp::mcp::{ToolRequest, ToolResponse};

#[test]
fn success_response_never_carries_an_error() {
    let response = ToolResponse::success("jira", "jira_get_issue", "ok".to_string());
    assert!(response.success);
    assert!(response.error.is_none());
}

#[test]
fn failure_response_never_carries_content() {
    let response = ToolResponse::failure("jira", "jira_get_issue", "boom".to_string());
    assert!(!response.success);
    assert!(response.content.is_empty());
    assert!(response.error.is_some());
}

#[test]
fn deserializes_request_with_default_empty_arguments() {
    let request: ToolRequest = serde_json::from_str(r#"{"tool":"jira_list_projects"}"#).unwrap();
    assert_eq!(request.tool, "jira_list_projects");
    assert!(request.arguments.is_empty());
}
