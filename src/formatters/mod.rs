//! Converts typed product records into readable text blocks and tabular
//! summaries. Two shapes per product: a detail block and a
//! fixed-header list table. Pure string formatting, no external library.

pub mod bitbucket;
pub mod confluence;
pub mod jira;
pub mod util;
