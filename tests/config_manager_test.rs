use atlassian_learning_mcp::config::manager::{load_config_from_sources, ConfigPaths};
use std::path::PathBuf;

#[test]
fn missing_base_and_local_files_yield_defaults() {
    let paths = ConfigPaths {
        root: PathBuf::from("/nonexistent-config-root-for-tests"),
    };
    let config = load_config_from_sources(&paths);
    // No products live and not list-tools-only -> validation error, which
    // is the expected behavior for an empty environment.
    assert!(config.is_err());
}
