//! REST-API clients, one per remote product, sharing the single HTTP
//! engine.

pub mod bitbucket;
pub mod confluence;
pub mod jira;
