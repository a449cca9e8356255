//! Shared text-formatting helpers. No external library assumed;
//! everything here is plain UTF-8 string manipulation.

/// `if len(s) > n then s[0..n-3] + "..."`. Operates on chars, not bytes, so
/// multi-byte UTF-8 text truncates on a character boundary.
#[must_use]
pub fn truncate(s: &str, n: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= n {
        return s.to_string();
    }
    if n <= 3 {
        return chars.into_iter().take(n).collect();
    }
    let head: String = chars.into_iter().take(n - 3).collect();
    format!("{head}...")
}

/// Empty metadata fields render as `-`.
#[must_use]
pub fn dash_if_blank(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Empty assignee-style fields render as `_Unassigned_`.
#[must_use]
pub fn unassigned_if_blank(value: &str) -> String {
    if value.trim().is_empty() {
        "_Unassigned_".to_string()
    } else {
        value.to_string()
    }
}

/// Renders a fixed-header summary table. `rows` are already-formatted cell
/// strings, one `Vec<String>` per row, matching `headers.len()`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push('|');
    for h in headers {
        out.push_str(&format!(" {h} |"));
    }
    out.push('\n');
    out.push('|');
    for _ in headers {
        out.push_str(" --- |");
    }
    out.push('\n');
    for row in rows {
        out.push('|');
        for cell in row {
            out.push_str(&format!(" {cell} |"));
        }
        out.push('\n');
    }
    out
}
