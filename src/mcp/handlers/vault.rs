//! Vault, discovery, scrape, and export tool handlers. Unlike the product clients these operate on process-local state
//! (the vault store) or pure computation (discovery, scraping, export), so
//! there is no remote-error mapping path beyond `ArgumentError`.

use crate::discovery::discover;
use crate::error::{GatewayError, Result};
use crate::export::{export, ExportFormat};
use crate::formatters::util::{dash_if_blank, render_table, truncate};
use crate::http::HttpEngine;
use crate::mcp::args::{optional, optional_u32, require};
use crate::mcp::types::ToolResponse;
use crate::scrape::scrape_and_summarize;
use crate::vault::{BrowseFilter, ConceptArea, Difficulty, Freshness, ResourceCategory, ResourceRecord, VaultStore};
use std::collections::HashMap;

pub async fn discover_resources(vault: &VaultStore, args: &HashMap<String, String>) -> Result<String> {
    let query = require(args, "query")?;
    let limit = optional_u32(args, "limit", 0)? as usize;
    let result = discover(vault, &query, limit);

    let mut out = format!("{}\n\n", result.summary);
    out.push_str(&format_scored_table(&result.results));
    if !result.suggestions.is_empty() {
        out.push_str("\nSuggestions:\n");
        for s in &result.suggestions {
            out.push_str(&format!("- {s}\n"));
        }
    }
    Ok(out)
}

fn format_scored_table(results: &[crate::vault::ScoredResource]) -> String {
    let headers = ["#", "Title", "Type", "Difficulty", "Score", "Official"];
    let rows = results
        .iter()
        .enumerate()
        .map(|(i, s)| {
            vec![
                (i + 1).to_string(),
                truncate(&s.record.title, 50),
                s.record.resource_type.clone(),
                format!("{:?}", s.record.difficulty),
                s.score.to_string(),
                if s.record.official { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

pub async fn browse_resources(vault: &VaultStore, args: &HashMap<String, String>) -> Result<String> {
    let filter = BrowseFilter {
        category: parse_filter_field(args, "category", ResourceCategory::parse)?,
        concept: parse_filter_field(args, "concept", ConceptArea::parse)?,
        min_difficulty: parse_filter_field(args, "minDifficulty", Difficulty::parse)?,
        max_difficulty: parse_filter_field(args, "maxDifficulty", Difficulty::parse)?,
        resource_type: non_blank(args, "type"),
        freshness: parse_filter_field(args, "freshness", Freshness::parse)?,
    };
    let records = vault.browse(&filter);
    Ok(format_record_table(&records))
}

/// Parses an optional enum-valued filter argument, surfacing an
/// `ArgumentError` naming the field when it is present but not one of the
/// closed enumeration's values.
fn parse_filter_field<T>(
    args: &HashMap<String, String>,
    name: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>> {
    match non_blank(args, name) {
        None => Ok(None),
        Some(raw) => parse(&raw)
            .map(Some)
            .ok_or_else(|| GatewayError::argument(format!("'{name}' has an unsupported value: '{raw}'"))),
    }
}

fn non_blank(args: &HashMap<String, String>, name: &str) -> Option<String> {
    let v = optional(args, name);
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}

fn format_record_table(records: &[ResourceRecord]) -> String {
    let headers = ["Id", "Title", "Type", "Difficulty", "Freshness", "Official"];
    let rows = records
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                truncate(&r.title, 50),
                dash_if_blank(&r.resource_type),
                format!("{:?}", r.difficulty),
                format!("{:?}", r.freshness),
                if r.official { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

pub async fn get_resource(vault: &VaultStore, args: &HashMap<String, String>) -> Result<String> {
    let id = require(args, "id")?;
    let record = vault
        .get(&id)
        .ok_or_else(|| GatewayError::not_found(format!("resource '{id}' not found")))?;
    Ok(format_record_table(std::slice::from_ref(&record)))
}

/// Adds a session-local record derived from a scraped URL.
pub async fn add_resource_from_url(
    engine: &HttpEngine,
    vault: &VaultStore,
    args: &HashMap<String, String>,
) -> Result<String> {
    let url = require(args, "url")?;
    let id = optional(args, "id");
    let id = if id.is_empty() {
        format!("session-{}", uuid::Uuid::new_v4())
    } else {
        id
    };
    let summary = scrape_and_summarize(engine, &url).await?;
    let record = ResourceRecord {
        id: id.clone(),
        title: if summary.title.is_empty() {
            url.clone()
        } else {
            summary.title
        },
        description: summary.summary,
        url: url.clone(),
        resource_type: optional(args, "type").pipe_default("article"),
        difficulty: summary.difficulty,
        freshness: Freshness::PeriodicallyUpdated,
        language_scope: String::new(),
        official: false,
        free: true,
        author: String::new(),
        categories: Default::default(),
        concepts: Default::default(),
        tags: Vec::new(),
    };
    vault.add_session_record(record);
    Ok(format!("Added session resource '{id}' from {url}."))
}

trait PipeDefault {
    fn pipe_default(self, default: &str) -> String;
}

impl PipeDefault for String {
    fn pipe_default(self, default: &str) -> String {
        if self.is_empty() {
            default.to_string()
        } else {
            self
        }
    }
}

pub async fn scrape_url(engine: &HttpEngine, args: &HashMap<String, String>) -> Result<String> {
    let url = require(args, "url")?;
    let summary = scrape_and_summarize(engine, &url).await?;
    Ok(format!(
        "## {}\nURL: {}\nWords: {}\nReading time: {} min\nDifficulty: {:?}\n\n{}",
        dash_if_blank(&summary.title),
        summary.url,
        summary.word_count,
        summary.reading_time_minutes,
        summary.difficulty,
        summary.summary,
    ))
}

pub async fn export_results(vault: &VaultStore, args: &HashMap<String, String>) -> Result<String> {
    let query = require(args, "query")?;
    let limit = optional_u32(args, "limit", 0)? as usize;
    let format_raw = optional(args, "format").pipe_default("markdown");
    let format = ExportFormat::parse(&format_raw)
        .ok_or_else(|| GatewayError::argument(format!("'format' has an unsupported value: '{format_raw}'")))?;

    let result = discover(vault, &query, limit);
    let outcome = export(&result, format);
    Ok(outcome.content)
}

pub fn respond(product: &str, tool: &str, outcome: Result<String>) -> ToolResponse {
    match outcome {
        Ok(content) => ToolResponse::success(product, tool, content),
        Err(e) => ToolResponse::failure(product, tool, e.as_tool_message(product)),
    }
}
