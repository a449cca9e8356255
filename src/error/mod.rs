//! Crate-wide error type.
//!
//! Every fallible operation in this crate returns [`Result`], an alias over
//! [`GatewayError`]. The Dispatcher is responsible for turning a
//! `GatewayError` into the product-prefixed message string the wire format
//! requires (`GatewayError::as_tool_message`); nothing below `mcp::dispatcher`
//! should format a user-facing string itself.

mod types;

pub use types::GatewayError;

pub type Result<T> = std::result::Result<T, GatewayError>;
