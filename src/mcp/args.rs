//! Argument validation helpers shared by every tool handler:
//! required-argument presence, numeric parsing, and the error shapes the
//! dispatcher surfaces for each.

use crate::error::{GatewayError, Result};
use std::collections::HashMap;

/// Returns the named argument, or an `ArgumentError` naming it when absent
/// or blank.
pub fn require(args: &HashMap<String, String>, name: &str) -> Result<String> {
    match args.get(name).map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(GatewayError::argument(format!(
            "Missing required argument: '{name}'"
        ))),
    }
}

/// Returns the named argument if present and non-blank, else `""`.
#[must_use]
pub fn optional(args: &HashMap<String, String>, name: &str) -> String {
    args.get(name)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Parses a required numeric argument, surfacing the argument's name on a
/// parse failure.
pub fn require_u64(args: &HashMap<String, String>, name: &str) -> Result<u64> {
    let raw = require(args, name)?;
    raw.parse::<u64>()
        .map_err(|_| GatewayError::argument(format!("'{name}' must be a positive integer, got '{raw}'")))
}

/// Parses an optional numeric argument, returning `default` when absent,
/// and an argument error naming the field when present but unparseable.
pub fn optional_u32(args: &HashMap<String, String>, name: &str, default: u32) -> Result<u32> {
    match args.get(name).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| GatewayError::argument(format!("'{name}' must be a non-negative integer, got '{raw}'"))),
    }
}
