use atlassian_learning_mcp::config::model::{Product, ProductConfig, RuntimeConfig};
use atlassian_learning_mcp::config::validation::{validate, ConfigValidationIssue};

#[test]
fn flags_no_live_product_when_not_list_tools_only() {
    let config = RuntimeConfig::default();
    let issues = validate(&config, &[]);
    assert!(issues.contains(&ConfigValidationIssue::NoLiveProductAndNotListToolsOnly));
}

#[test]
fn list_tools_only_suppresses_no_live_product_issue() {
    let mut config = RuntimeConfig::default();
    config.list_tools_only = true;
    let issues = validate(&config, &[]);
    assert!(!issues.contains(&ConfigValidationIssue::NoLiveProductAndNotListToolsOnly));
}

#[test]
fn live_product_without_credentials_is_flagged() {
    let mut config = RuntimeConfig::default();
    config.products.insert(
        Product::Jira,
        ProductConfig {
            base_url: Some("https://x.atlassian.net".to_string()),
            enabled: true,
        },
    );
    let issues = validate(&config, &[]);
    assert!(issues.contains(&ConfigValidationIssue::MissingCredentialsWithLiveProduct));
}
