//! Bitbucket tool handlers.

use crate::error::Result;
use crate::formatters::bitbucket as fmt;
use crate::mcp::args::{optional, require, require_u64};
use crate::mcp::types::ToolResponse;
use crate::products::bitbucket::BitbucketClient;
use std::collections::HashMap;

const PRODUCT: &str = "bitbucket";

pub async fn list_repos(
    client: &BitbucketClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let workspace = require(args, "workspace")?;
    let repos = client.list_repos(&workspace).await?;
    Ok(fmt::format_repo_list(&repos))
}

pub async fn get_repo(client: &BitbucketClient<'_>, args: &HashMap<String, String>) -> Result<String> {
    let workspace = require(args, "workspace")?;
    let repo_slug = require(args, "repoSlug")?;
    let repo = client.get_repo(&workspace, &repo_slug).await?;
    Ok(fmt::format_repo_detail(&repo))
}

pub async fn list_pull_requests(
    client: &BitbucketClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let workspace = require(args, "workspace")?;
    let repo_slug = require(args, "repoSlug")?;
    let state = optional(args, "state");
    let prs = client.list_pull_requests(&workspace, &repo_slug, &state).await?;
    Ok(fmt::format_pull_request_list(&prs))
}

pub async fn get_pull_request(
    client: &BitbucketClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let workspace = require(args, "workspace")?;
    let repo_slug = require(args, "repoSlug")?;
    let pr_id = require_u64(args, "prId")?;
    let pr = client.get_pull_request(&workspace, &repo_slug, pr_id).await?;
    Ok(fmt::format_pull_request_detail(&pr))
}

pub async fn code_search(
    client: &BitbucketClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let workspace = require(args, "workspace")?;
    let search_query = require(args, "searchQuery")?;
    let hits = client.code_search(&workspace, &search_query).await?;
    Ok(fmt::format_code_search_results(&hits))
}

pub async fn create_pull_request(
    client: &BitbucketClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let workspace = require(args, "workspace")?;
    let repo_slug = require(args, "repoSlug")?;
    let title = require(args, "title")?;
    let source_branch = require(args, "sourceBranch")?;
    let destination_branch = optional(args, "destinationBranch");
    let pr = client
        .create_pull_request(&workspace, &repo_slug, &title, &source_branch, &destination_branch)
        .await?;
    Ok(fmt::format_pull_request_detail(&pr))
}

pub async fn list_branches(
    client: &BitbucketClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let workspace = require(args, "workspace")?;
    let repo_slug = require(args, "repoSlug")?;
    let branches = client.list_branches(&workspace, &repo_slug).await?;
    Ok(fmt::format_branch_list(&branches))
}

pub async fn get_commits(
    client: &BitbucketClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let workspace = require(args, "workspace")?;
    let repo_slug = require(args, "repoSlug")?;
    let commits = client.get_commits(&workspace, &repo_slug).await?;
    Ok(fmt::format_commit_list(&commits))
}

pub fn respond(tool: &str, outcome: Result<String>) -> ToolResponse {
    match outcome {
        Ok(content) => ToolResponse::success(PRODUCT, tool, content),
        Err(e) => ToolResponse::failure(PRODUCT, tool, e.as_tool_message(PRODUCT)),
    }
}
