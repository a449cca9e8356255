//! Markup stripping, title derivation, word counting. No
//! external library assumed: tag removal and entity decoding are hand
//! rolled string scans.

/// Strips HTML tags and decodes the common named entities
/// (`&amp; &lt; &gt; &quot; &#39; &nbsp;`).
#[must_use]
pub fn strip_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    decode_entities(&out)
}

#[must_use]
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// Title from the first `<h1>`..`<h6>` heading, falling back to `<title>`.
#[must_use]
pub fn derive_title(html: &str) -> String {
    if let Some(title) = extract_tag_content(html, "title") {
        if let Some(heading) = first_heading(html) {
            return heading;
        }
        return title;
    }
    first_heading(html).unwrap_or_default()
}

fn first_heading(html: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    for level in 1..=6 {
        let open = format!("<h{level}");
        if let Some(start) = lower.find(&open) {
            let after_open = html[start..].find('>')? + start + 1;
            let close_tag = format!("</h{level}>");
            let close_lower = &lower[after_open..];
            let close_rel = close_lower.find(&close_tag)?;
            let content = &html[after_open..after_open + close_rel];
            let text = strip_markup(content).trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

fn extract_tag_content(html: &str, tag: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let open = format!("<{tag}");
    let start = lower.find(&open)?;
    let after_open = html[start..].find('>')? + start + 1;
    let close_tag = format!("</{tag}>");
    let close_rel = lower[after_open..].find(&close_tag)?;
    let content = strip_markup(&html[after_open..after_open + close_rel]);
    let trimmed = content.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().filter(|w| !w.is_empty()).count()
}

/// reading-time = ceil(words / 225).
#[must_use]
pub fn reading_time_minutes(words: usize) -> u32 {
    ((words as f64) / 225.0).ceil() as u32
}

/// First two sentences, or a heuristic lead-paragraph extract when the
/// text has fewer than two sentence terminators.
#[must_use]
pub fn summarize(text: &str) -> String {
    let trimmed = text.trim();
    let mut sentences = Vec::new();
    let mut current = String::new();
    for c in trimmed.chars() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            sentences.push(current.trim().to_string());
            current.clear();
            if sentences.len() == 2 {
                break;
            }
        }
    }
    if sentences.is_empty() {
        let words: Vec<&str> = trimmed.split_whitespace().take(60).collect();
        return words.join(" ");
    }
    sentences.join(" ")
}
