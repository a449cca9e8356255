//! Jira tool handlers: parse arguments, invoke [`JiraClient`], format the
//! result.

use crate::error::Result;
use crate::formatters::jira as fmt;
use crate::mcp::args::{optional, optional_u32, require, require_u64};
use crate::mcp::types::ToolResponse;
use crate::products::jira::JiraClient;
use std::collections::HashMap;

const PRODUCT: &str = "jira";

pub async fn search(client: &JiraClient<'_>, args: &HashMap<String, String>) -> Result<String> {
    let jql = require(args, "jql")?;
    let start_at = optional_u32(args, "startAt", 0)?;
    let max_results = optional_u32(args, "maxResults", 50)?;
    let result = client.search(&jql, start_at, max_results).await?;
    Ok(fmt::format_issue_list(&result.issues))
}

pub async fn get_issue(client: &JiraClient<'_>, args: &HashMap<String, String>) -> Result<String> {
    let issue_key = require(args, "issueKey")?;
    let issue = client.get_issue(&issue_key).await?;
    Ok(fmt::format_issue_detail(&issue))
}

pub async fn create_issue(client: &JiraClient<'_>, args: &HashMap<String, String>) -> Result<String> {
    let project_key = require(args, "projectKey")?;
    let issue_type = require(args, "issueType")?;
    let summary = require(args, "summary")?;
    let description = optional(args, "description");
    let issue = client
        .create_issue(&project_key, &issue_type, &summary, &description)
        .await?;
    Ok(fmt::format_issue_detail(&issue))
}

pub async fn update_issue(client: &JiraClient<'_>, args: &HashMap<String, String>) -> Result<String> {
    let issue_key = require(args, "issueKey")?;
    let summary = optional(args, "summary");
    let description = optional(args, "description");
    let mut fields = serde_json::Map::new();
    if !summary.is_empty() {
        fields.insert("summary".to_string(), serde_json::Value::String(summary));
    }
    if !description.is_empty() {
        fields.insert(
            "description".to_string(),
            serde_json::Value::String(description),
        );
    }
    client
        .update_issue(&issue_key, serde_json::Value::Object(fields))
        .await?;
    let issue = client.get_issue(&issue_key).await?;
    Ok(fmt::format_issue_detail(&issue))
}

pub async fn transition_issue(
    client: &JiraClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let issue_key = require(args, "issueKey")?;
    let transition_id = require(args, "transitionId")?;
    client.transition_issue(&issue_key, &transition_id).await?;
    let issue = client.get_issue(&issue_key).await?;
    Ok(fmt::format_issue_detail(&issue))
}

pub async fn list_projects(client: &JiraClient<'_>, _args: &HashMap<String, String>) -> Result<String> {
    let projects = client.list_projects().await?;
    Ok(fmt::format_project_list(&projects))
}

pub async fn get_active_sprint(
    client: &JiraClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let board_id = require_u64(args, "boardId")?;
    let sprint = client.get_active_sprint(board_id).await?;
    Ok(fmt::format_sprint_detail(&sprint))
}

pub async fn list_sprint_issues(
    client: &JiraClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let sprint_id = require_u64(args, "sprintId")?;
    let issues = client.list_sprint_issues(sprint_id).await?;
    Ok(fmt::format_issue_list(&issues))
}

pub async fn add_comment(client: &JiraClient<'_>, args: &HashMap<String, String>) -> Result<String> {
    let issue_key = require(args, "issueKey")?;
    let body = require(args, "body")?;
    let comment = client.add_comment(&issue_key, &body).await?;
    Ok(fmt::format_comment_list(std::slice::from_ref(&comment)))
}

pub async fn get_comments(client: &JiraClient<'_>, args: &HashMap<String, String>) -> Result<String> {
    let issue_key = require(args, "issueKey")?;
    let comments = client.get_comments(&issue_key).await?;
    Ok(fmt::format_comment_list(&comments))
}

pub async fn assign(client: &JiraClient<'_>, args: &HashMap<String, String>) -> Result<String> {
    let issue_key = require(args, "issueKey")?;
    let account_id = require(args, "accountId")?;
    client.assign(&issue_key, &account_id).await?;
    let issue = client.get_issue(&issue_key).await?;
    Ok(fmt::format_issue_detail(&issue))
}

/// Maps a result into a [`ToolResponse`], naming the tool and product tag.
pub fn respond(tool: &str, outcome: Result<String>) -> ToolResponse {
    match outcome {
        Ok(content) => ToolResponse::success(PRODUCT, tool, content),
        Err(e) => ToolResponse::failure(PRODUCT, tool, e.as_tool_message(PRODUCT)),
    }
}
