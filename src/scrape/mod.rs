//! Content-scrape and summarization pipeline: fetch a URL,
//! extract readable text, derive a difficulty rating, and return a summary
//! envelope.

pub mod extract;
pub mod readability;
pub mod summary;

pub use summary::{scrape_and_summarize, ContentSummary};
