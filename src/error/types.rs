use serde_json::Value;
use thiserror::Error;

/// Error taxonomy for the gateway. Every kind named in the design's error
/// handling section has a variant here; the Dispatcher is the sole place
/// that turns these into `ToolResponse` envelopes (see `mcp::dispatcher`).
#[derive(Error, Debug)]
pub enum GatewayError {
    /// A required config artifact could not be read. Fatal at startup.
    #[error("config load error: {message}")]
    ConfigLoadError { message: String },

    /// Config loaded but failed semantic validation.
    #[error("config validation error: {} issue(s): {}", .errors.len(), .errors.join("; "))]
    ConfigValidationError { errors: Vec<String> },

    /// Network, DNS, TLS, connect/read timeout, or cancellation. Retriable.
    #[error("transport error: {message}")]
    TransportError { message: String, retriable: bool },

    /// Remote returned 4xx. Non-retriable; message is operator-facing.
    #[error("client error ({status}): {message}")]
    ClientError { status: u16, message: String },

    /// Remote returned 5xx. Retriable with backoff up to maxRetries.
    #[error("server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body failed to parse against the expected shape.
    #[error("protocol error: {message}")]
    ProtocolError { message: String },

    /// Dispatcher-level: missing or unparseable tool argument.
    #[error("argument error: {message}")]
    ArgumentError { message: String },

    /// Resource id / page id / issue key unknown. ClientError subtype.
    #[error("not found: {message}")]
    NotFoundError { message: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("http client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl GatewayError {
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportError {
            message: message.into(),
            retriable: true,
        }
    }

    #[must_use]
    pub fn cancelled() -> Self {
        Self::TransportError {
            message: "cancelled".to_string(),
            retriable: false,
        }
    }

    #[must_use]
    pub fn argument(message: impl Into<String>) -> Self {
        Self::ArgumentError {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFoundError {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Build a `ClientError`/`ServerError`/`NotFoundError` from an HTTP status
    /// and a JSON error body, extracting the server's own message where
    /// possible.
    #[must_use]
    pub fn from_status(status: u16, body: &Value) -> Self {
        let message = Self::extract_message(body).unwrap_or_else(|| format!("HTTP {status}"));

        if status == 404 {
            return Self::NotFoundError { message };
        }
        if (400..500).contains(&status) {
            return Self::ClientError { status, message };
        }
        if (500..600).contains(&status) {
            return Self::ServerError { status, message };
        }
        Self::ProtocolError {
            message: format!("unexpected status {status}: {message}"),
        }
    }

    fn extract_message(body: &Value) -> Option<String> {
        if let Some(messages) = body.get("errorMessages").and_then(Value::as_array) {
            let joined = messages
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if !joined.is_empty() {
                return Some(joined);
            }
        }
        if let Some(errors) = body.get("errors").and_then(Value::as_object) {
            let joined = errors
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join(", ");
            if !joined.is_empty() {
                return Some(joined);
            }
        }
        if let Some(message) = body.get("message").and_then(Value::as_str) {
            return Some(message.to_string());
        }
        None
    }

    /// Whether this error kind should be retried:
    /// transport errors always; server errors only for idempotent (GET)
    /// calls, decided by the caller via `retry_on_server_error`.
    #[must_use]
    pub fn is_retriable_transport(&self) -> bool {
        matches!(self, Self::TransportError { retriable: true, .. })
            || matches!(self, Self::HttpClientError(e) if e.is_timeout() || e.is_connect())
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ServerError { .. })
    }

    /// Product-prefixed message shape: `<product>: <kind>: <detail>`.
    #[must_use]
    pub fn as_tool_message(&self, product: &str) -> String {
        let kind = match self {
            Self::ConfigLoadError { .. } => "ConfigLoadError",
            Self::ConfigValidationError { .. } => "ConfigValidationError",
            Self::TransportError { .. } => "TransportError",
            Self::ClientError { .. } => "ClientError",
            Self::ServerError { .. } => "ServerError",
            Self::ProtocolError { .. } => "ProtocolError",
            Self::ArgumentError { .. } => "ArgumentError",
            Self::NotFoundError { .. } => "NotFoundError",
            Self::SerializationError(_) => "ProtocolError",
            Self::HttpClientError(_) => "TransportError",
            Self::IoError(_) => "TransportError",
            Self::Other(_) => "Unknown",
        };
        format!("{product}: {kind}: {self}")
    }
}
