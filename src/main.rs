//! Process entry point and CLI surface. Follows a standard startup order —
//! logging, then config, then the transport — but the transport is the
//! stdio frame pump rather than an HTTP listener, and config/validation
//! failures map to distinct process exit codes rather than bubbling up as
//! an opaque `anyhow::Error`.

use atlassian_learning_mcp::config::{ConfigManager, ConfigOptions};
use atlassian_learning_mcp::discovery::discover;
use atlassian_learning_mcp::error::GatewayError;
use atlassian_learning_mcp::export::{export, ExportFormat};
use atlassian_learning_mcp::http::HttpEngine;
use atlassian_learning_mcp::logging::{setup_logging, LoggingConfig};
use atlassian_learning_mcp::mcp::dispatcher::{self, Dispatcher};
use atlassian_learning_mcp::mcp::stdio;
use atlassian_learning_mcp::vault::{seed, VaultStore};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

const VAULT_SEED_PATH: &str = "data/vault_seed.json";

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging(&LoggingConfig::from_env());

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--list-tools") {
        for name in dispatcher::registered_tool_names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    if args.iter().any(|a| a == "--demo") {
        return match run_demo() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "demo run failed");
                ExitCode::FAILURE
            }
        };
    }

    match run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(StartupFailure::Config(e)) => {
            error!(error = %e, "config error at startup");
            ExitCode::from(2)
        }
        Err(StartupFailure::Fatal(e)) => {
            error!(error = %e, "fatal internal error");
            ExitCode::from(3)
        }
    }
}

enum StartupFailure {
    Config(GatewayError),
    Fatal(GatewayError),
}

async fn run_server() -> Result<(), StartupFailure> {
    info!("starting atlassian learning mcp gateway");

    let config_manager = ConfigManager::new(ConfigOptions::default())
        .await
        .map_err(StartupFailure::Config)?;
    let config = config_manager.current().await;

    let engine = HttpEngine::new(&config.timeouts).map_err(StartupFailure::Fatal)?;

    let records = seed::load_seed(Path::new(VAULT_SEED_PATH)).map_err(StartupFailure::Config)?;
    let vault = Arc::new(VaultStore::new(records));

    info!(
        instance = %config.instance_name,
        live_products = config.any_live(),
        "configuration loaded, handing off to stdio driver"
    );

    let dispatcher = Arc::new(Dispatcher::new(engine, config_manager, vault));

    stdio::run(dispatcher)
        .await
        .map_err(|e| StartupFailure::Fatal(GatewayError::IoError(e)))?;

    info!("clean shutdown on stdin EOF");
    Ok(())
}

/// A self-contained walkthrough of the vault/discovery/export path with no
/// live HTTP calls, for `--demo`.
fn run_demo() -> Result<(), GatewayError> {
    let records = seed::load_seed(Path::new(VAULT_SEED_PATH))?;
    if records.is_empty() {
        return Err(GatewayError::ConfigLoadError {
            message: "vault seed is empty, nothing to demonstrate".to_string(),
        });
    }
    let vault = VaultStore::new(records);

    println!("Loaded {} seed resources.\n", vault.len());

    let result = discover(&vault, "unit testing best practices", 5);
    println!("{}\n", result.summary);
    for scored in &result.results {
        println!("- [{:>3}] {} ({})", scored.score, scored.record.title, scored.record.url);
    }
    if !result.suggestions.is_empty() {
        println!("\nSuggestions:");
        for s in &result.suggestions {
            println!("- {s}");
        }
    }

    let outcome = export(&result, ExportFormat::Markdown);
    println!("\n--- Markdown export ({} bytes) ---", outcome.content.len());

    Ok(())
}
