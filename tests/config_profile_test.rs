use atlassian_learning_mcp::config::model::{Product, ProductConfig, RuntimeConfig};
use atlassian_learning_mcp::config::profile::apply_profile_overlay;

#[test]
fn overlay_modifies_declared_server_only() {
    let mut config = RuntimeConfig::default();
    config.products.insert(
        Product::Jira,
        ProductConfig {
            base_url: Some("https://base.atlassian.net".to_string()),
            enabled: true,
        },
    );
    apply_profile_overlay(
        &mut config,
        "serverOverrides.jira.baseUrl=https://override.atlassian.net\n\
         serverOverrides.bitbucket.baseUrl=https://should-not-appear\n",
    );
    assert_eq!(
        config.products.get(&Product::Jira).unwrap().base_url,
        Some("https://override.atlassian.net".to_string())
    );
    assert!(!config.products.contains_key(&Product::Bitbucket));
}

#[test]
fn overlay_applies_preference_fields() {
    let mut config = RuntimeConfig::default();
    apply_profile_overlay(&mut config, "preferences.theme=dark\npreferences.maxRetries=5\n");
    assert_eq!(config.preferences.theme, "dark");
    assert_eq!(config.preferences.max_retries, 5);
}
