//! Readability scorer: maps a fetched document's surface
//! features to a [`Difficulty`] rating.
//!
//! Boundary values are not specified in source;
//! the constants below are this crate's explicit decision, recorded in
//! DESIGN.md.

use crate::vault::Difficulty;

const ADVANCED_KEYWORDS: &[&str] = &[
    "asynchronous",
    "concurrency",
    "polymorphism",
    "monad",
    "kernel",
    "bytecode",
    "homomorphic",
    "distributed consensus",
    "zero-copy",
    "lock-free",
];

/// Score boundaries:
/// `< 30` Beginner, `< 55` Intermediate, `< 80` Advanced, else Expert.
const BEGINNER_CEILING: f64 = 30.0;
const INTERMEDIATE_CEILING: f64 = 55.0;
const ADVANCED_CEILING: f64 = 80.0;

/// Raw readability score, 0..100+, from average sentence length, advanced
/// keyword density, and code-block density.
#[must_use]
pub fn score(text: &str, code_block_count: usize) -> f64 {
    let sentence_count = text.matches(['.', '!', '?']).count().max(1);
    let word_count = text.split_whitespace().count().max(1);
    let avg_sentence_len = word_count as f64 / sentence_count as f64;

    let lower = text.to_ascii_lowercase();
    let keyword_hits = ADVANCED_KEYWORDS
        .iter()
        .filter(|k| lower.contains(*k))
        .count();

    let code_density = code_block_count as f64 / (word_count as f64 / 200.0).max(1.0);

    // Weighted blend: longer sentences, more advanced vocabulary, and denser
    // code all push the score up.
    avg_sentence_len * 1.5 + (keyword_hits as f64) * 8.0 + code_density * 10.0
}

/// Maps a raw score to a difficulty rating.
#[must_use]
pub fn to_difficulty(raw_score: f64) -> Difficulty {
    if raw_score < BEGINNER_CEILING {
        Difficulty::Beginner
    } else if raw_score < INTERMEDIATE_CEILING {
        Difficulty::Intermediate
    } else if raw_score < ADVANCED_CEILING {
        Difficulty::Advanced
    } else {
        Difficulty::Expert
    }
}

/// Counts `<pre>`/`<code>` blocks in raw HTML, used as a density signal
/// before markup is stripped.
#[must_use]
pub fn count_code_blocks(html: &str) -> usize {
    let lower = html.to_ascii_lowercase();
    lower.matches("<pre").count() + lower.matches("<code").count()
}
