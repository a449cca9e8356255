use crate::config::model::RuntimeConfig;
use std::fmt;

/// Structured config validation failures. Collected into a
/// `Vec` and surfaced as a single `ConfigValidationError` with the joined
/// list, following a `ConfigValidationError` enum shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationIssue {
    UnknownActiveProfile { name: String },
    NoLiveProductAndNotListToolsOnly,
    MissingCredentialsWithLiveProduct,
    EmptyLiveProductUrl { product: String },
}

impl fmt::Display for ConfigValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownActiveProfile { name } => {
                write!(f, "active profile '{name}' does not exist")
            }
            Self::NoLiveProductAndNotListToolsOnly => write!(
                f,
                "no product is live and listToolsOnly is not set"
            ),
            Self::MissingCredentialsWithLiveProduct => write!(
                f,
                "credentials are required when at least one product is live"
            ),
            Self::EmptyLiveProductUrl { product } => {
                write!(f, "product '{product}' is enabled but has an empty URL")
            }
        }
    }
}

/// Validates a built [`RuntimeConfig`] against its liveness and credential
/// invariants.
/// `known_profiles` is the set of profile names that were actually found on
/// disk (see `config::profile`).
#[must_use]
pub fn validate(config: &RuntimeConfig, known_profiles: &[String]) -> Vec<ConfigValidationIssue> {
    let mut issues = Vec::new();

    if let Some(active) = &config.active_profile {
        if !known_profiles.iter().any(|p| p == active) {
            issues.push(ConfigValidationIssue::UnknownActiveProfile {
                name: active.clone(),
            });
        }
    }

    for (product, cfg) in &config.products {
        if cfg.enabled {
            let blank_url = cfg
                .base_url
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .is_empty();
            if blank_url {
                issues.push(ConfigValidationIssue::EmptyLiveProductUrl {
                    product: product.tag().to_string(),
                });
            }
        }
    }

    if !config.any_live() && !config.list_tools_only {
        issues.push(ConfigValidationIssue::NoLiveProductAndNotListToolsOnly);
    }

    if config.any_live() && config.credentials.is_blank() {
        issues.push(ConfigValidationIssue::MissingCredentialsWithLiveProduct);
    }

    issues
}
