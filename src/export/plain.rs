//! Plain-text serialization of a [`DiscoveryResult`]: separator
//! bars, two-column key-value lines, and ranked sections. Used directly for
//! the plain-text export format and as the fallback rendering when pandoc
//! is unavailable for PDF/DOCX.

use crate::discovery::DiscoveryResult;

const BAR: &str = "================================================================";

#[must_use]
pub fn render(result: &DiscoveryResult) -> String {
    let mut out = String::new();
    out.push_str(BAR);
    out.push('\n');
    out.push_str("DISCOVERY RESULTS\n");
    out.push_str(BAR);
    out.push('\n');
    out.push_str(&kv_line("Mode", result.mode.label()));
    out.push_str(&kv_line("Summary", &result.summary));
    out.push('\n');

    for (rank, scored) in result.results.iter().enumerate() {
        let record = &scored.record;
        out.push_str(BAR);
        out.push('\n');
        out.push_str(&format!("#{} {}\n", rank + 1, record.title));
        out.push_str(&kv_line("Score", &scored.score.to_string()));
        out.push_str(&kv_line("Type", &record.resource_type));
        out.push_str(&kv_line("URL", &record.url));
        out.push_str(&kv_line(
            "Official",
            if record.official { "yes" } else { "no" },
        ));
        out.push_str(&record.description);
        out.push('\n');
    }

    if !result.suggestions.is_empty() {
        out.push_str(BAR);
        out.push('\n');
        out.push_str("SUGGESTIONS\n");
        for suggestion in &result.suggestions {
            out.push_str(&format!("- {suggestion}\n"));
        }
    }

    out
}

fn kv_line(key: &str, value: &str) -> String {
    format!("{key:<12}: {value}\n")
}
