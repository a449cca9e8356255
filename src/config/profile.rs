//! Profile overlay resolution.
//!
//! A profile is a named properties file under `user-config/profiles/<name>.properties`
//! applied additively after the three base sources. It may only set
//! preferences, location, browser hints, and per-server field overrides.
//! Per the decision in DESIGN.md, a profile's
//! `serverOverrides` may only modify a server already declared by the base
//! layers; it cannot introduce a new one.

use crate::config::model::{Product, RuntimeConfig};
use crate::config::resolver::parse_properties;
use std::collections::HashMap;

/// Applies profile overrides on top of an already-built `RuntimeConfig`.
/// Keys outside the documented profile surface are ignored.
pub fn apply_profile_overlay(config: &mut RuntimeConfig, profile_text: &str) {
    let map = parse_properties(profile_text);
    apply_profile_map(config, &map);
}

fn apply_profile_map(config: &mut RuntimeConfig, map: &HashMap<String, String>) {
    if let Some(theme) = map.get("preferences.theme") {
        if !theme.trim().is_empty() {
            config.preferences.theme = theme.trim().to_string();
        }
    }
    if let Some(level) = map.get("preferences.logLevel") {
        if !level.trim().is_empty() {
            config.preferences.log_level = level.trim().to_string();
        }
    }
    if let Some(retries) = map.get("preferences.maxRetries") {
        if let Ok(v) = retries.trim().parse() {
            config.preferences.max_retries = v;
        }
    }
    if let Some(timeout) = map.get("preferences.timeoutSeconds") {
        if let Ok(v) = timeout.trim().parse() {
            config.preferences.timeout_seconds = v;
        }
    }

    // serverOverrides.<product>.<field> — only modifies servers already
    // declared by the base layers (products map already populated).
    for (product, prefix) in [
        (Product::Jira, "serverOverrides.jira"),
        (Product::Confluence, "serverOverrides.confluence"),
        (Product::Bitbucket, "serverOverrides.bitbucket"),
    ] {
        let Some(existing) = config.products.get(&product).cloned() else {
            continue;
        };
        let mut updated = existing;
        if let Some(url) = map.get(&format!("{prefix}.baseUrl")) {
            if !url.trim().is_empty() {
                updated.base_url =
                    Some(crate::config::model::ProductConfig::normalize_url(url.trim()));
            }
        }
        if let Some(enabled) = map.get(&format!("{prefix}.enabled")) {
            updated.enabled = matches!(enabled.to_ascii_lowercase().as_str(), "true" | "1");
        }
        config.products.insert(product, updated);
    }
}
