//! Confluence tool handlers.

use crate::error::Result;
use crate::formatters::confluence as fmt;
use crate::mcp::args::{optional, optional_u32, require};
use crate::mcp::types::ToolResponse;
use crate::products::confluence::ConfluenceClient;
use std::collections::HashMap;

const PRODUCT: &str = "confluence";

pub async fn search(client: &ConfluenceClient<'_>, args: &HashMap<String, String>) -> Result<String> {
    let query = require(args, "query")?;
    let limit = optional_u32(args, "limit", 25)?;
    let result = client.search(&query, limit).await?;
    Ok(fmt::format_page_list(&result.pages))
}

pub async fn get_page(client: &ConfluenceClient<'_>, args: &HashMap<String, String>) -> Result<String> {
    let page_id = require(args, "pageId")?;
    let page = client.get_page(&page_id).await?;
    Ok(fmt::format_page_detail(&page))
}

pub async fn create_page(
    client: &ConfluenceClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let space_key = require(args, "spaceKey")?;
    let title = require(args, "title")?;
    let body = optional(args, "body");
    let page = client.create_page(&space_key, &title, &body).await?;
    Ok(fmt::format_page_detail(&page))
}

pub async fn update_page(
    client: &ConfluenceClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let page_id = require(args, "pageId")?;
    let title = require(args, "title")?;
    let body = optional(args, "body");
    let current = client.get_page(&page_id).await?;
    let page = client
        .update_page(&page_id, &title, &body, current.version + 1)
        .await?;
    Ok(fmt::format_page_detail(&page))
}

pub async fn list_spaces(
    client: &ConfluenceClient<'_>,
    _args: &HashMap<String, String>,
) -> Result<String> {
    let spaces = client.list_spaces().await?;
    Ok(fmt::format_space_list(&spaces))
}

pub async fn get_page_children(
    client: &ConfluenceClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let page_id = require(args, "pageId")?;
    let pages = client.get_page_children(&page_id).await?;
    Ok(fmt::format_page_list(&pages))
}

pub async fn delete_page(
    client: &ConfluenceClient<'_>,
    args: &HashMap<String, String>,
) -> Result<String> {
    let page_id = require(args, "pageId")?;
    client.delete_page(&page_id).await?;
    Ok(format!("Page {page_id} deleted."))
}

pub fn respond(tool: &str, outcome: Result<String>) -> ToolResponse {
    match outcome {
        Ok(content) => ToolResponse::success(PRODUCT, tool, content),
        Err(e) => ToolResponse::failure(PRODUCT, tool, e.as_tool_message(PRODUCT)),
    }
}
