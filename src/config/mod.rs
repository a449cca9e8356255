//! Layered configuration resolution.
//!
//! Three sources merge in increasing precedence: a committed defaults file,
//! an optional developer-local overrides file, and `MCP_*`/`ATLASSIAN_*`
//! environment variables. An optional named profile overlays preference and
//! per-server fields on top. The result is an immutable [`model::RuntimeConfig`]
//! shared read-only by every subsystem for the life of the process.

pub mod manager;
pub mod model;
pub mod profile;
pub mod resolver;
pub mod validation;

pub use manager::{ConfigManager, ConfigOptions, ConfigPaths};
pub use model::{AuthType, Credentials, DeploymentVariant, Product, ProductConfig, RuntimeConfig};
