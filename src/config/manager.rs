//! `ConfigManager` owns the resolved [`RuntimeConfig`] behind an
//! `Arc<RwLock<_>>` and optionally watches the config files for changes,
//! following a `ConfigManager` hot-reload architecture (notify + debounced
//! reload) with flat properties parsing and a dual `MCP_`/`ATLASSIAN_`
//! environment-variable prefix.

use crate::config::model::{Product, RuntimeConfig};
use crate::config::profile;
use crate::config::resolver::{build_runtime_config, env_overlay_map, overlay, parse_properties};
use crate::config::validation::{validate, ConfigValidationIssue};
use crate::error::{GatewayError, Result};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

/// Where config files are read from.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub root: PathBuf,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self {
            root: PathBuf::from("user-config"),
        }
    }
}

impl ConfigPaths {
    fn base_file(&self) -> PathBuf {
        self.root.join("mcp-config.properties")
    }

    fn local_file(&self) -> PathBuf {
        self.root.join("mcp-config.local.properties")
    }

    fn product_file(&self, product: Product) -> PathBuf {
        self.root
            .join("servers")
            .join(product.tag())
            .join(format!("{}-config.properties", product.tag()))
    }

    fn product_local_file(&self, product: Product) -> PathBuf {
        self.root
            .join("servers")
            .join(product.tag())
            .join(format!("{}-config.local.properties", product.tag()))
    }

    fn profile_file(&self, name: &str) -> PathBuf {
        self.root.join("profiles").join(format!("{name}.properties"))
    }
}

#[derive(Debug, Clone)]
pub struct ConfigOptions {
    pub paths: ConfigPaths,
    pub hot_reload: bool,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            paths: ConfigPaths::default(),
            hot_reload: false,
        }
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GatewayError::ConfigLoadError {
            message: format!("failed to read {}: {e}", path.display()),
        }),
    }
}

/// Loads and merges base → local → env, then builds and validates a
/// [`RuntimeConfig`]. Missing local file is not an error; a missing base
/// file is tolerated too (an empty base yields defaults, validated below).
pub fn load_config_from_sources(paths: &ConfigPaths) -> Result<RuntimeConfig> {
    let mut merged: HashMap<String, String> = HashMap::new();

    if let Some(base) = read_optional(&paths.base_file())? {
        overlay(&mut merged, &parse_properties(&base));
    }
    if let Some(local) = read_optional(&paths.local_file())? {
        overlay(&mut merged, &parse_properties(&local));
    }
    for product in Product::all() {
        if let Some(text) = read_optional(&paths.product_file(product))? {
            overlay(&mut merged, &parse_properties(&text));
        }
        if let Some(text) = read_optional(&paths.product_local_file(product))? {
            overlay(&mut merged, &parse_properties(&text));
        }
    }
    overlay(&mut merged, &env_overlay_map());

    let mut config = build_runtime_config(&merged);

    let mut known_profiles = Vec::new();
    if let Some(name) = config.active_profile.clone() {
        if let Some(profile_text) = read_optional(&paths.profile_file(&name))? {
            known_profiles.push(name);
            profile::apply_profile_overlay(&mut config, &profile_text);
        }
    }

    let issues = validate(&config, &known_profiles);
    if !issues.is_empty() && !config.list_tools_only {
        return Err(GatewayError::ConfigValidationError {
            errors: issues.iter().map(ConfigValidationIssue::to_string).collect(),
        });
    }
    if !issues.is_empty() {
        tracing::warn!(?issues, "config validation issues present in list-tools-only mode");
    }

    Ok(config)
}

/// Owns the live `RuntimeConfig`, optionally refreshed on file change.
pub struct ConfigManager {
    config: Arc<RwLock<RuntimeConfig>>,
    paths: ConfigPaths,
    _watcher: Option<RecommendedWatcher>,
}

impl ConfigManager {
    /// Loads once and, if `options.hot_reload`, starts a background watcher
    /// that reloads the merged config whenever a tracked file changes.
    pub async fn new(options: ConfigOptions) -> Result<Self> {
        let initial = load_config_from_sources(&options.paths)?;
        let config = Arc::new(RwLock::new(initial));

        let watcher = if options.hot_reload {
            Some(Self::spawn_watcher(options.paths.clone(), Arc::clone(&config))?)
        } else {
            None
        };

        Ok(Self {
            config,
            paths: options.paths,
            _watcher: watcher,
        })
    }

    fn spawn_watcher(
        paths: ConfigPaths,
        shared: Arc<RwLock<RuntimeConfig>>,
    ) -> Result<RecommendedWatcher> {
        let (tx, mut rx) = mpsc::channel(16);

        let mut watcher: RecommendedWatcher =
            notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
                if res.is_ok() {
                    let _ = tx.try_send(());
                }
            })
            .map_err(|e| GatewayError::ConfigLoadError {
                message: format!("failed to start config watcher: {e}"),
            })?;

        if paths.root.exists() {
            watcher
                .watch(&paths.root, RecursiveMode::Recursive)
                .map_err(|e| GatewayError::ConfigLoadError {
                    message: format!("failed to watch {}: {e}", paths.root.display()),
                })?;
        }

        tokio::spawn(async move {
            while rx.recv().await.is_some() {
                match load_config_from_sources(&paths) {
                    Ok(fresh) => {
                        *shared.write().await = fresh;
                        tracing::info!("config reloaded from disk");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "config reload failed, keeping previous config");
                    }
                }
            }
        });

        Ok(watcher)
    }

    pub async fn current(&self) -> RuntimeConfig {
        self.config.read().await.clone()
    }

    pub fn handle(&self) -> Arc<RwLock<RuntimeConfig>> {
        Arc::clone(&self.config)
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }
}
