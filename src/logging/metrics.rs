use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
struct Metrics {
    success_counts: HashMap<String, u64>,
    failure_counts: HashMap<String, u64>,
}

/// Operation success/failure counters, shared across tool calls.
#[derive(Debug, Clone)]
pub struct MetricsCollector {
    metrics: Arc<RwLock<Metrics>>,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            metrics: Arc::new(RwLock::new(Metrics::default())),
        }
    }

    pub async fn record_operation_success(
        &self,
        operation: &str,
        _duration: Duration,
        _metadata: &HashMap<String, String>,
    ) {
        let mut metrics = self.metrics.write().await;
        *metrics
            .success_counts
            .entry(operation.to_string())
            .or_insert(0) += 1;
    }

    pub async fn record_operation_failure(&self, operation: &str, _duration: Duration) {
        let mut metrics = self.metrics.write().await;
        *metrics
            .failure_counts
            .entry(operation.to_string())
            .or_insert(0) += 1;
    }

    pub async fn success_count(&self, operation: &str) -> u64 {
        let metrics = self.metrics.read().await;
        metrics.success_counts.get(operation).copied().unwrap_or(0)
    }

    pub async fn failure_count(&self, operation: &str) -> u64 {
        let metrics = self.metrics.read().await;
        metrics.failure_counts.get(operation).copied().unwrap_or(0)
    }
}
