//! Orchestrates the scrape-and-summarize pipeline: fetch a URL,
//! extract readable text, derive a difficulty rating, and build a
//! [`ContentSummary`] envelope.

use super::extract::{derive_title, reading_time_minutes, strip_markup, summarize, word_count};
use super::readability::{count_code_blocks, score, to_difficulty};
use crate::error::Result;
use crate::http::HttpEngine;
use crate::vault::Difficulty;

#[derive(Debug, Clone)]
pub struct ContentSummary {
    pub url: String,
    pub title: String,
    pub summary: String,
    pub word_count: usize,
    pub reading_time_minutes: u32,
    pub difficulty: Difficulty,
}

/// Fetches `url` with no authentication, strips markup, and
/// builds a [`ContentSummary`]. Never panics on malformed HTML: every
/// extraction step degrades to an empty/default value rather than failing.
pub async fn scrape_and_summarize(engine: &HttpEngine, url: &str) -> Result<ContentSummary> {
    let html = engine.get_raw(url).await?;
    let title = derive_title(&html);
    let code_blocks = count_code_blocks(&html);
    let text = strip_markup(&html);
    let words = word_count(&text);
    let raw_score = score(&text, code_blocks);

    Ok(ContentSummary {
        url: url.to_string(),
        title,
        summary: summarize(&text),
        word_count: words,
        reading_time_minutes: reading_time_minutes(words),
        difficulty: to_difficulty(raw_score),
    })
}
