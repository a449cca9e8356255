//! Layered config resolution: base file → local file → environment.
//! The merge is a flat dotted-key map; [`build_runtime_config`]
//! turns that map into a typed [`RuntimeConfig`].

use super::model::{
    AuthType, Credentials, DeploymentVariant, HttpTimeouts, Preferences, Product, ProductConfig,
    RuntimeConfig,
};
use std::collections::HashMap;

/// Explicit env-suffix → dotted-key mapping table. Generic
/// SCREAMING_SNAKE → camelCase conversion is ambiguous (word boundaries
/// aren't recoverable from underscores alone), so the mapping is spelled out
/// rather than algorithmically derived.
const MCP_KEY_TABLE: &[(&str, &str)] = &[
    ("INSTANCE_NAME", "instanceName"),
    ("DEPLOYMENT_VARIANT", "deploymentVariant"),
    ("ACTIVE_PROFILE", "activeProfile"),
    ("TIMEOUTS_CONNECT_MS", "timeouts.connectMs"),
    ("TIMEOUTS_READ_MS", "timeouts.readMs"),
    ("PREFERENCES_THEME", "preferences.theme"),
    ("PREFERENCES_LOG_LEVEL", "preferences.logLevel"),
    ("PREFERENCES_MAX_RETRIES", "preferences.maxRetries"),
    ("PREFERENCES_TIMEOUT_SECONDS", "preferences.timeoutSeconds"),
    ("LIST_TOOLS_ONLY", "listToolsOnly"),
];

const ATLASSIAN_KEY_TABLE: &[(&str, &str)] = &[
    ("CREDENTIALS_EMAIL", "credentials.email"),
    ("CREDENTIALS_SECRET", "credentials.secret"),
    ("CREDENTIALS_AUTH_TYPE", "credentials.authType"),
    ("JIRA_BASE_URL", "jira.baseUrl"),
    ("JIRA_ENABLED", "jira.enabled"),
    ("CONFLUENCE_BASE_URL", "confluence.baseUrl"),
    ("CONFLUENCE_ENABLED", "confluence.enabled"),
    ("BITBUCKET_BASE_URL", "bitbucket.baseUrl"),
    ("BITBUCKET_ENABLED", "bitbucket.enabled"),
];

/// Parses a flat `key=value` properties file: `#` comments, trimmed
/// whitespace around `=`, blank/empty keys skipped.
#[must_use]
pub fn parse_properties(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        map.insert(key.to_string(), value.trim().to_string());
    }
    map
}

/// Overlays `b` onto `a`, keeping `a`'s value where `b` is absent or blank
/// after trim.
pub fn overlay(a: &mut HashMap<String, String>, b: &HashMap<String, String>) {
    for (k, v) in b {
        if !v.trim().is_empty() {
            a.insert(k.clone(), v.clone());
        }
    }
}

/// Reads `MCP_*`/`ATLASSIAN_*` environment variables into dotted keys via
/// the explicit mapping tables above.
#[must_use]
pub fn env_overlay_map() -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (suffix, dotted) in MCP_KEY_TABLE {
        if let Ok(value) = std::env::var(format!("MCP_{suffix}")) {
            if !value.trim().is_empty() {
                map.insert((*dotted).to_string(), value);
            }
        }
    }
    for (suffix, dotted) in ATLASSIAN_KEY_TABLE {
        if let Ok(value) = std::env::var(format!("ATLASSIAN_{suffix}")) {
            if !value.trim().is_empty() {
                map.insert((*dotted).to_string(), value);
            }
        }
    }
    map
}

fn get_str(map: &HashMap<String, String>, key: &str) -> Option<String> {
    map.get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn get_bool(map: &HashMap<String, String>, key: &str, default: bool) -> bool {
    match get_str(map, key) {
        Some(v) => matches!(v.to_ascii_lowercase().as_str(), "true" | "1"),
        None => default,
    }
}

fn get_u64(map: &HashMap<String, String>, key: &str, default: u64) -> u64 {
    match get_str(map, key) {
        Some(v) => v.parse().unwrap_or_else(|_| {
            tracing::warn!(key, raw = %v, "failed to parse numeric config value, using default");
            default
        }),
        None => default,
    }
}

fn get_u32(map: &HashMap<String, String>, key: &str, default: u32) -> u32 {
    match get_str(map, key) {
        Some(v) => v.parse().unwrap_or_else(|_| {
            tracing::warn!(key, raw = %v, "failed to parse numeric config value, using default");
            default
        }),
        None => default,
    }
}

/// Builds a typed [`RuntimeConfig`] from a fully-merged dotted-key map.
#[must_use]
pub fn build_runtime_config(map: &HashMap<String, String>) -> RuntimeConfig {
    let instance_name =
        get_str(map, "instanceName").unwrap_or_else(|| "unconfigured-instance".to_string());

    let variant = get_str(map, "deploymentVariant")
        .map(|v| DeploymentVariant::parse(&v))
        .unwrap_or_default();

    let mut products = HashMap::new();
    for (product, prefix) in [
        (Product::Jira, "jira"),
        (Product::Confluence, "confluence"),
        (Product::Bitbucket, "bitbucket"),
    ] {
        let base_url = get_str(map, &format!("{prefix}.baseUrl"))
            .map(|u| ProductConfig::normalize_url(&u));
        let enabled = get_bool(map, &format!("{prefix}.enabled"), false);
        products.insert(product, ProductConfig { base_url, enabled });
    }

    let credentials = Credentials {
        email: get_str(map, "credentials.email").unwrap_or_default(),
        secret: get_str(map, "credentials.secret").unwrap_or_default(),
        auth_type: get_str(map, "credentials.authType").and_then(|v| AuthType::parse(&v)),
    };

    let timeouts = HttpTimeouts {
        connect_ms: get_u64(map, "timeouts.connectMs", 10_000),
        read_ms: get_u64(map, "timeouts.readMs", 30_000),
    };

    let preferences = Preferences {
        theme: get_str(map, "preferences.theme").unwrap_or_default(),
        log_level: get_str(map, "preferences.logLevel").unwrap_or_else(|| "info".to_string()),
        max_retries: get_u32(map, "preferences.maxRetries", 3),
        timeout_seconds: get_u64(map, "preferences.timeoutSeconds", 30),
    };

    RuntimeConfig {
        instance_name,
        variant,
        products,
        credentials,
        timeouts,
        preferences,
        active_profile: get_str(map, "activeProfile"),
        list_tools_only: get_bool(map, "listToolsOnly", false),
    }
}
