use crate::logging::config::{LogFormat, LogLevel, LoggingConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Set up the tracing subscriber. All layers write to stderr: stdout is
/// reserved for MCP response frames and must never carry a log line.
pub fn setup_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match config.level {
        LogLevel::Trace => EnvFilter::new("trace"),
        LogLevel::Debug => EnvFilter::new("debug"),
        LogLevel::Info => EnvFilter::new("info"),
        LogLevel::Warn => EnvFilter::new("warn"),
        LogLevel::Error => EnvFilter::new("error"),
    });

    let console_layer = if config.console_enabled {
        match config.format {
            LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
            LogFormat::Pretty => fmt::layer().pretty().with_writer(std::io::stderr).boxed(),
            LogFormat::Compact => fmt::layer().compact().with_writer(std::io::stderr).boxed(),
        }
    } else {
        fmt::layer().with_writer(std::io::sink).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
