//! Structured logging facade. `tracing` does the actual emission; this
//! module picks the subscriber configuration and tracks lightweight
//! per-operation counters for startup and tool-call logging.

pub mod config;
pub mod metrics;
pub mod tracing_setup;

pub use config::LoggingConfig;
pub use metrics::MetricsCollector;
pub use tracing_setup::setup_logging;

use std::collections::HashMap;
use std::time::Duration;

pub struct Logger {
    metrics_collector: MetricsCollector,
}

impl Logger {
    #[must_use]
    pub fn new(metrics_collector: MetricsCollector) -> Self {
        Self { metrics_collector }
    }

    pub async fn log_operation_success(
        &self,
        operation: &str,
        duration: Duration,
        metadata: &HashMap<String, String>,
    ) {
        tracing::debug!(
            operation = %operation,
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            ?metadata,
            "operation completed successfully"
        );
        self.metrics_collector
            .record_operation_success(operation, duration, metadata)
            .await;
    }

    pub async fn log_operation_failure(&self, operation: &str, duration: Duration, error: &str) {
        tracing::warn!(
            operation = %operation,
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            error = %error,
            "operation failed"
        );
        self.metrics_collector
            .record_operation_failure(operation, duration)
            .await;
    }
}
