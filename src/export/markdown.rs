//! Markdown serialization of a [`DiscoveryResult`]: a `#`
//! title, a metadata blockquote, a ranked table, per-resource detail
//! sections, and an optional suggestions list.
//!
//! The ranked table embeds each resource's id in an HTML comment
//! (`<!-- id:... -->`) so [`parse_ranked_table`] can recover the exact
//! `(id, score, rank)` triples the table was built from.

use crate::discovery::DiscoveryResult;
use crate::formatters::util::truncate;
use crate::vault::ScoredResource;

#[must_use]
pub fn render(result: &DiscoveryResult) -> String {
    let mut out = String::new();
    out.push_str("# Discovery Results\n\n");
    out.push_str(&format!("> Mode: {}\n", result.mode.label()));
    out.push_str(&format!("> {}\n", result.summary));
    out.push('\n');

    out.push_str(&render_ranked_table(&result.results));
    out.push('\n');

    for (rank, scored) in result.results.iter().enumerate() {
        out.push_str(&render_detail_section(rank + 1, scored));
        out.push('\n');
    }

    if !result.suggestions.is_empty() {
        out.push_str("## Suggestions\n\n");
        for suggestion in &result.suggestions {
            out.push_str(&format!("- {suggestion}\n"));
        }
        out.push('\n');
    }

    out
}

fn render_ranked_table(results: &[ScoredResource]) -> String {
    let mut out = String::new();
    out.push_str("| # | Resource | Type | Difficulty | Score | Official |\n");
    out.push_str("| --- | --- | --- | --- | --- | --- |\n");
    for (i, scored) in results.iter().enumerate() {
        let record = &scored.record;
        out.push_str(&format!(
            "| {} | [{}]({}) <!-- id:{} --> | {} | {:?} | {} | {} |\n",
            i + 1,
            truncate(&record.title, 50),
            record.url,
            record.id,
            record.resource_type,
            record.difficulty,
            scored.score,
            if record.official { "yes" } else { "no" },
        ));
    }
    out
}

fn render_detail_section(rank: usize, scored: &ScoredResource) -> String {
    let record = &scored.record;
    format!(
        "## {}. {}\n\nScore: {}\nURL: {}\nAuthor: {}\n\n{}\n",
        rank,
        record.title,
        scored.score,
        record.url,
        if record.author.trim().is_empty() {
            "-"
        } else {
            &record.author
        },
        record.description,
    )
}

/// Re-parses a rendered ranked table back into `(id, score, rank)` triples,
/// in table order.
#[must_use]
pub fn parse_ranked_table(markdown: &str) -> Vec<(String, u32, usize)> {
    let mut out = Vec::new();
    for line in markdown.lines() {
        let trimmed = line.trim();
        if !trimmed.starts_with('|') || !trimmed.contains("<!-- id:") {
            continue;
        }
        let cells: Vec<&str> = trimmed.trim_matches('|').split('|').collect();
        if cells.len() < 5 {
            continue;
        }
        let Ok(rank) = cells[0].trim().parse::<usize>() else {
            continue;
        };
        let Some(id_start) = trimmed.find("<!-- id:") else {
            continue;
        };
        let id_rest = &trimmed[id_start + "<!-- id:".len()..];
        let Some(id_end) = id_rest.find(" -->") else {
            continue;
        };
        let id = id_rest[..id_end].to_string();
        let Ok(score) = cells[4].trim().parse::<u32>() else {
            continue;
        };
        out.push((id, score, rank));
    }
    out
}
