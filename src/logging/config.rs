use serde::{Deserialize, Serialize};

/// Log level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Info
    }
}

/// Log format configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::Pretty
    }
}

/// Logging configuration, selected at startup from `RUST_LOG`/`MCP_ENV`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub console_enabled: bool,
    pub file_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            console_enabled: true,
            file_enabled: false,
        }
    }
}

impl LoggingConfig {
    /// Warn/Json, console only. stdout is reserved for MCP frames, so file
    /// logging would be the right place for production output, but without
    /// a log directory configured we keep console+stderr.
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Json,
            console_enabled: true,
            file_enabled: false,
        }
    }

    #[must_use]
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            console_enabled: true,
            file_enabled: false,
        }
    }

    /// Picks development() unless `MCP_ENV=production`, an environment-
    /// driven selection made once at process startup.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var("MCP_ENV").as_deref() {
            Ok("production") => Self::production(),
            _ => Self::development(),
        }
    }
}
