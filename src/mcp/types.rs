//! Wire types for the MCP stdio protocol: a request carries a
//! tool name and a string-keyed argument map; a response carries a
//! product tag, the tool name, a success flag, content text, and an
//! optional error message.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct ToolRequest {
    pub tool: String,
    #[serde(default)]
    pub arguments: HashMap<String, String>,
}

/// An error response never carries partial content; a success response
/// never carries an error message.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResponse {
    pub product: String,
    pub tool: String,
    pub success: bool,
    pub content: String,
    pub error: Option<String>,
}

impl ToolResponse {
    #[must_use]
    pub fn success(product: impl Into<String>, tool: impl Into<String>, content: String) -> Self {
        Self {
            product: product.into(),
            tool: tool.into(),
            success: true,
            content,
            error: None,
        }
    }

    #[must_use]
    pub fn failure(product: impl Into<String>, tool: impl Into<String>, message: String) -> Self {
        Self {
            product: product.into(),
            tool: tool.into(),
            success: false,
            content: String::new(),
            error: Some(message),
        }
    }
}
