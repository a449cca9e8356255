//! MCP stdio protocol surface: wire types, argument validation, the
//! per-tool handlers, the flat dispatch table, and the stdio frame pump.

pub mod args;
pub mod dispatcher;
pub mod handlers;
pub mod stdio;
pub mod types;

pub use dispatcher::Dispatcher;
pub use types::{ToolRequest, ToolResponse};
