//! One module per tool family: parse arguments, invoke the domain layer,
//! format the result, and map outcomes into [`super::types::ToolResponse`].

pub mod bitbucket;
pub mod confluence;
pub mod jira;
pub mod vault;
