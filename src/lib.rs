//! Library surface for the Atlassian Learning MCP gateway: a stdio Model
//! Context Protocol server unifying Jira, Confluence, and Bitbucket REST
//! clients with a local learning-resource vault (discovery, scraping, and
//! export).

pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod formatters;
pub mod http;
pub mod logging;
pub mod mcp;
pub mod products;
pub mod scrape;
pub mod vault;
