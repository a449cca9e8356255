//! Single shared HTTP engine used by every product client.
//!
//! Connection pooling follows an `OptimizedJiraClient`-style builder
//! (`pool_max_idle_per_host`/`pool_idle_timeout`); the retry/backoff
//! algorithm is grounded in the Atlassian connector's `send_with_backoff`
//! helper, generalized to explicit exponential-backoff-with-jitter
//! parameters.

use crate::config::RuntimeConfig;
use crate::error::{GatewayError, Result};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Whether a call is safe to retry on `ServerError`:
/// GET-style reads may be retried on 5xx; mutating calls may only be
/// retried on `TransportError`, never `ServerError`, to avoid double-writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idempotency {
    Safe,
    Mutating,
}

#[derive(Clone)]
pub struct HttpEngine {
    client: Client,
}

impl HttpEngine {
    pub fn new(timeouts: &crate::config::model::HttpTimeouts) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(timeouts.connect_ms))
            .timeout(Duration::from_millis(timeouts.read_ms))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(GatewayError::HttpClientError)?;
        Ok(Self { client })
    }

    fn auth_request(&self, method: Method, url: &str, config: &RuntimeConfig) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("Authorization", config.auth_header())
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
    }

    /// Sends a JSON request with retry/backoff and decodes the response
    /// body into `T`.
    pub async fn send_json<T, B>(
        &self,
        method: Method,
        url: &str,
        config: &RuntimeConfig,
        body: Option<&B>,
        idempotency: Idempotency,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let max_retries = config.preferences.max_retries;
        let mut attempt = 0u32;

        loop {
            let mut request = self.auth_request(method.clone(), url, config);
            if let Some(body) = body {
                request = request.json(body);
            }

            let outcome = request.send().await;

            match outcome {
                Ok(response) => {
                    let status = response.status().as_u16();
                    if response.status().is_success() {
                        let bytes = response
                            .bytes()
                            .await
                            .map_err(GatewayError::HttpClientError)?;
                        if bytes.is_empty() {
                            return serde_json::from_value(Value::Null)
                                .map_err(GatewayError::SerializationError);
                        }
                        return serde_json::from_slice(&bytes)
                            .map_err(GatewayError::SerializationError);
                    }

                    let body_value: Value = response
                        .json()
                        .await
                        .unwrap_or_else(|_| Value::String(format!("HTTP {status}")));
                    let mapped = GatewayError::from_status(status, &body_value);

                    let should_retry = mapped.is_server_error()
                        && idempotency == Idempotency::Safe
                        && attempt < max_retries;

                    if should_retry {
                        attempt += 1;
                        tracing::warn!(attempt, status, "server error, retrying");
                        tokio::time::sleep(backoff_delay(attempt)).await;
                        continue;
                    }

                    return Err(mapped);
                }
                Err(e) => {
                    let transport = if e.is_timeout() || e.is_connect() || e.is_request() {
                        GatewayError::transport(e.to_string())
                    } else {
                        GatewayError::HttpClientError(e)
                    };

                    let retriable = transport.is_retriable_transport() && attempt < max_retries;
                    if retriable {
                        attempt += 1;
                        tracing::warn!(attempt, "transport error, retrying");
                        tokio::time::sleep(backoff_delay(attempt)).await;
                        continue;
                    }
                    return Err(transport);
                }
            }
        }
    }

    /// Dedicated GET helper with no authentication header, for scraping
    /// arbitrary URLs.
    pub async fn get_raw(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,*/*")
            .send()
            .await
            .map_err(|e| GatewayError::transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GatewayError::ClientError {
                status: response.status().as_u16(),
                message: format!("failed to fetch {url}"),
            });
        }

        response
            .text()
            .await
            .map_err(|e| GatewayError::transport(e.to_string()))
    }
}

/// Exponential backoff, base 100ms, factor 2, jitter +-25%.
#[must_use]
pub fn backoff_delay(attempt: u32) -> Duration {
    let base_ms = 100f64 * 2f64.powi(attempt as i32 - 1);
    let jitter_fraction = pseudo_jitter(attempt);
    let jittered = base_ms * (1.0 + jitter_fraction);
    Duration::from_millis(jittered.max(0.0) as u64)
}

/// Deterministic pseudo-jitter in [-0.25, 0.25], avoiding a `rand`
/// dependency for one call site.
#[must_use]
pub fn pseudo_jitter(attempt: u32) -> f64 {
    let bucket = attempt.wrapping_mul(2_654_435_761) % 1000;
    (bucket as f64 / 1000.0 - 0.5) * 0.5
}
