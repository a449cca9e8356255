//! Flat tool-name dispatch table: a map from
//! tool name to a boxed-future handler, replacing the inheritance-tree
//! handler registration the source pattern would otherwise suggest. Every
//! handler receives an owned [`CallContext`] (no borrow of the Dispatcher
//! itself survives past the call), so dispatch is free to run handlers
//! concurrently from a worker pool.

use crate::config::{ConfigManager, Product};
use crate::error::GatewayError;
use crate::http::HttpEngine;
use crate::mcp::args;
use crate::mcp::handlers::{bitbucket as h_bitbucket, confluence as h_confluence, jira as h_jira, vault as h_vault};
use crate::mcp::types::ToolResponse;
use crate::products::bitbucket::BitbucketClient;
use crate::products::confluence::ConfluenceClient;
use crate::products::jira::JiraClient;
use crate::vault::VaultStore;
use crate::{config::RuntimeConfig, formatters};
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const UNKNOWN_TOOL_HINT: &str = "use --list-tools to see available tools";

/// Everything a handler needs, fully owned so its future has no lifetime
/// tied back to the [`Dispatcher`].
#[derive(Clone)]
struct CallContext {
    engine: HttpEngine,
    config: RuntimeConfig,
    vault: Arc<VaultStore>,
}

type HandlerFn = fn(CallContext, HashMap<String, String>) -> BoxFuture<'static, ToolResponse>;

/// Binds the stdio driver to the product clients, the vault, and the
/// registered tool table.
pub struct Dispatcher {
    engine: HttpEngine,
    config_manager: ConfigManager,
    vault: Arc<VaultStore>,
    table: HashMap<&'static str, HandlerFn>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(engine: HttpEngine, config_manager: ConfigManager, vault: Arc<VaultStore>) -> Self {
        Self {
            engine,
            config_manager,
            vault,
            table: build_table(),
        }
    }

    /// Registered tool names, sorted, for `--list-tools`.
    #[must_use]
    pub fn list_tools(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.table.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Looks up and invokes `tool`, enforcing the shared per-call deadline
    /// from `preferences.timeoutSeconds`. Never panics and never
    /// lets an error escape as anything but a [`ToolResponse`].
    pub async fn dispatch(&self, tool: &str, arguments: HashMap<String, String>) -> ToolResponse {
        let (_cancel_tx, cancel_rx) = tokio::sync::watch::channel(false);
        self.dispatch_cancellable(tool, arguments, cancel_rx).await
    }

    /// As [`Self::dispatch`], but also races the call against `cancel`:
    /// end-of-input cancels in-flight workers, each surfacing a single
    /// "cancelled" `TransportError` response.
    pub async fn dispatch_cancellable(
        &self,
        tool: &str,
        arguments: HashMap<String, String>,
        mut cancel: tokio::sync::watch::Receiver<bool>,
    ) -> ToolResponse {
        let config = self.config_manager.current().await;

        let Some(handler) = self.table.get(tool).copied() else {
            return ToolResponse::failure(
                "gateway",
                tool,
                format!("unknown tool '{tool}'; {UNKNOWN_TOOL_HINT}"),
            );
        };

        let ctx = CallContext {
            engine: self.engine.clone(),
            config: config.clone(),
            vault: Arc::clone(&self.vault),
        };
        let deadline = Duration::from_secs(config.preferences.timeout_seconds.max(1));

        tokio::select! {
            result = tokio::time::timeout(deadline, handler(ctx, arguments)) => match result {
                Ok(response) => response,
                Err(_) => ToolResponse::failure("gateway", tool, GatewayError::cancelled().as_tool_message("gateway")),
            },
            _ = cancel.changed() => {
                ToolResponse::failure("gateway", tool, GatewayError::cancelled().as_tool_message("gateway"))
            }
        }
    }
}

/// Registered tool names without constructing a full [`Dispatcher`].
#[must_use]
pub fn registered_tool_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = build_table().keys().copied().collect();
    names.sort_unstable();
    names
}

/// Wraps the constant (product, parse, client, format) call into the
/// `HandlerFn` shape the table stores. Each macro invocation is one row of
/// the flat dispatcher table.
macro_rules! jira_handler {
    ($name:expr, $op:ident) => {
        |ctx: CallContext, args: HashMap<String, String>| -> BoxFuture<'static, ToolResponse> {
            Box::pin(async move {
                let client = JiraClient::new(&ctx.engine, &ctx.config);
                h_jira::respond($name, h_jira::$op(&client, &args).await)
            })
        }
    };
}

macro_rules! confluence_handler {
    ($name:expr, $op:ident) => {
        |ctx: CallContext, args: HashMap<String, String>| -> BoxFuture<'static, ToolResponse> {
            Box::pin(async move {
                let client = ConfluenceClient::new(&ctx.engine, &ctx.config);
                h_confluence::respond($name, h_confluence::$op(&client, &args).await)
            })
        }
    };
}

macro_rules! bitbucket_handler {
    ($name:expr, $op:ident) => {
        |ctx: CallContext, args: HashMap<String, String>| -> BoxFuture<'static, ToolResponse> {
            Box::pin(async move {
                let client = BitbucketClient::new(&ctx.engine, &ctx.config);
                h_bitbucket::respond($name, h_bitbucket::$op(&client, &args).await)
            })
        }
    };
}

fn build_table() -> HashMap<&'static str, HandlerFn> {
    let mut table: HashMap<&'static str, HandlerFn> = HashMap::new();

    table.insert("jira_search", jira_handler!("jira_search", search));
    table.insert("jira_get_issue", jira_handler!("jira_get_issue", get_issue));
    table.insert("jira_create_issue", jira_handler!("jira_create_issue", create_issue));
    table.insert("jira_update_issue", jira_handler!("jira_update_issue", update_issue));
    table.insert(
        "jira_transition_issue",
        jira_handler!("jira_transition_issue", transition_issue),
    );
    table.insert("jira_list_projects", jira_handler!("jira_list_projects", list_projects));
    table.insert(
        "jira_get_active_sprint",
        jira_handler!("jira_get_active_sprint", get_active_sprint),
    );
    table.insert(
        "jira_list_sprint_issues",
        jira_handler!("jira_list_sprint_issues", list_sprint_issues),
    );
    table.insert("jira_add_comment", jira_handler!("jira_add_comment", add_comment));
    table.insert("jira_get_comments", jira_handler!("jira_get_comments", get_comments));
    table.insert("jira_assign", jira_handler!("jira_assign", assign));

    table.insert("confluence_search", confluence_handler!("confluence_search", search));
    table.insert("confluence_get_page", confluence_handler!("confluence_get_page", get_page));
    table.insert(
        "confluence_create_page",
        confluence_handler!("confluence_create_page", create_page),
    );
    table.insert(
        "confluence_update_page",
        confluence_handler!("confluence_update_page", update_page),
    );
    table.insert(
        "confluence_list_spaces",
        confluence_handler!("confluence_list_spaces", list_spaces),
    );
    table.insert(
        "confluence_get_page_children",
        confluence_handler!("confluence_get_page_children", get_page_children),
    );
    table.insert(
        "confluence_delete_page",
        confluence_handler!("confluence_delete_page", delete_page),
    );

    table.insert("bitbucket_list_repos", bitbucket_handler!("bitbucket_list_repos", list_repos));
    table.insert("bitbucket_get_repo", bitbucket_handler!("bitbucket_get_repo", get_repo));
    table.insert(
        "bitbucket_list_pull_requests",
        bitbucket_handler!("bitbucket_list_pull_requests", list_pull_requests),
    );
    table.insert(
        "bitbucket_get_pull_request",
        bitbucket_handler!("bitbucket_get_pull_request", get_pull_request),
    );
    table.insert("bitbucket_code_search", bitbucket_handler!("bitbucket_code_search", code_search));
    table.insert(
        "bitbucket_create_pull_request",
        bitbucket_handler!("bitbucket_create_pull_request", create_pull_request),
    );
    table.insert(
        "bitbucket_list_branches",
        bitbucket_handler!("bitbucket_list_branches", list_branches),
    );
    table.insert("bitbucket_get_commits", bitbucket_handler!("bitbucket_get_commits", get_commits));

    table.insert("discover_resources", |ctx, args| {
        Box::pin(async move {
            h_vault::respond("vault", "discover_resources", h_vault::discover_resources(&ctx.vault, &args).await)
        })
    });
    table.insert("browse_resources", |ctx, args| {
        Box::pin(async move {
            h_vault::respond("vault", "browse_resources", h_vault::browse_resources(&ctx.vault, &args).await)
        })
    });
    table.insert("get_resource", |ctx, args| {
        Box::pin(async move { h_vault::respond("vault", "get_resource", h_vault::get_resource(&ctx.vault, &args).await) })
    });
    table.insert("add_resource_from_url", |ctx, args| {
        Box::pin(async move {
            h_vault::respond(
                "vault",
                "add_resource_from_url",
                h_vault::add_resource_from_url(&ctx.engine, &ctx.vault, &args).await,
            )
        })
    });
    table.insert("scrape_url", |ctx, args| {
        Box::pin(async move { h_vault::respond("scrape", "scrape_url", h_vault::scrape_url(&ctx.engine, &args).await) })
    });
    table.insert("export_results", |ctx, args| {
        Box::pin(async move {
            h_vault::respond("export", "export_results", h_vault::export_results(&ctx.vault, &args).await)
        })
    });

    table.insert("atlassian_unified_search", unified_search_handler);

    table
}

/// Fans out a free-form query to every live remote product concurrently. A
/// product that errors or is inactive contributes a note instead of
/// aborting the others; the aggregated response is always `success=true`
/// unless the `query` argument itself is missing.
fn unified_search_handler(ctx: CallContext, arguments: HashMap<String, String>) -> BoxFuture<'static, ToolResponse> {
    Box::pin(async move {
        let query = match args::require(&arguments, "query") {
            Ok(q) => q,
            Err(e) => return ToolResponse::failure("gateway", "atlassian_unified_search", e.as_tool_message("gateway")),
        };
        let workspace = args::optional(&arguments, "workspace");

        let mut legs: Vec<BoxFuture<'static, String>> = Vec::new();

        if ctx.config.is_live(Product::Jira) {
            let engine = ctx.engine.clone();
            let config = ctx.config.clone();
            let jql = format!("text ~ \"{}\"", query.replace('"', "\\\""));
            legs.push(Box::pin(async move {
                let client = JiraClient::new(&engine, &config);
                match client.search(&jql, 0, 25).await {
                    Ok(result) => format!("## Jira\n{}", formatters::jira::format_issue_list(&result.issues)),
                    Err(e) => format!("## Jira\n{}", e.as_tool_message("jira")),
                }
            }));
        } else {
            legs.push(Box::pin(async { "## Jira\n(inactive)".to_string() }));
        }

        if ctx.config.is_live(Product::Confluence) {
            let engine = ctx.engine.clone();
            let config = ctx.config.clone();
            let query = query.clone();
            legs.push(Box::pin(async move {
                let client = ConfluenceClient::new(&engine, &config);
                match client.search(&query, 25).await {
                    Ok(result) => format!("## Confluence\n{}", formatters::confluence::format_page_list(&result.pages)),
                    Err(e) => format!("## Confluence\n{}", e.as_tool_message("confluence")),
                }
            }));
        } else {
            legs.push(Box::pin(async { "## Confluence\n(inactive)".to_string() }));
        }

        if ctx.config.is_live(Product::Bitbucket) && !workspace.is_empty() {
            let engine = ctx.engine.clone();
            let config = ctx.config.clone();
            let query = query.clone();
            legs.push(Box::pin(async move {
                let client = BitbucketClient::new(&engine, &config);
                match client.code_search(&workspace, &query).await {
                    Ok(hits) => format!("## Bitbucket\n{}", formatters::bitbucket::format_code_search_results(&hits)),
                    Err(e) => format!("## Bitbucket\n{}", e.as_tool_message("bitbucket")),
                }
            }));
        } else {
            legs.push(Box::pin(async { "## Bitbucket\n(inactive or no workspace given)".to_string() }));
        }

        let sections = futures::future::join_all(legs).await;
        ToolResponse::success("gateway", "atlassian_unified_search", sections.join("\n\n"))
    })
}
