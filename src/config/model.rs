use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Deployment flavor of a remote Atlassian product instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentVariant {
    Cloud,
    DataCenter,
    Server,
    Custom,
}

impl DeploymentVariant {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "datacenter" | "data_center" | "data-center" => Self::DataCenter,
            "server" => Self::Server,
            "custom" => Self::Custom,
            _ => Self::Cloud,
        }
    }

    /// Self-managed variants default to PAT auth; cloud defaults to API token.
    #[must_use]
    pub fn default_auth_type(self) -> AuthType {
        match self {
            Self::DataCenter | Self::Server | Self::Custom => AuthType::PersonalAccessToken,
            Self::Cloud => AuthType::ApiToken,
        }
    }
}

impl Default for DeploymentVariant {
    fn default() -> Self {
        Self::Cloud
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthType {
    ApiToken,
    PersonalAccessToken,
}

impl AuthType {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "api_token" | "api-token" | "apitoken" => Some(Self::ApiToken),
            "personal_access_token" | "pat" => Some(Self::PersonalAccessToken),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub secret: String,
    pub auth_type: Option<AuthType>,
}

impl Credentials {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.email.trim().is_empty() && self.secret.trim().is_empty()
    }

    #[must_use]
    pub fn resolved_auth_type(&self, variant: DeploymentVariant) -> AuthType {
        self.auth_type.unwrap_or_else(|| variant.default_auth_type())
    }

    /// Basic `email:secret` for `ApiToken`, Bearer `secret` for PAT.
    #[must_use]
    pub fn auth_header(&self, variant: DeploymentVariant) -> String {
        match self.resolved_auth_type(variant) {
            AuthType::ApiToken => {
                let encoded =
                    base64::Engine::encode(&base64::engine::general_purpose::STANDARD, format!("{}:{}", self.email, self.secret));
                format!("Basic {encoded}")
            }
            AuthType::PersonalAccessToken => format!("Bearer {}", self.secret),
        }
    }
}

/// Named Atlassian product this gateway talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    Jira,
    Confluence,
    Bitbucket,
}

impl Product {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Jira => "jira",
            Self::Confluence => "confluence",
            Self::Bitbucket => "bitbucket",
        }
    }

    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Jira, Self::Confluence, Self::Bitbucket]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductConfig {
    pub base_url: Option<String>,
    pub enabled: bool,
}

impl ProductConfig {
    /// Strips at most one trailing slash; idempotent under repeated calls.
    #[must_use]
    pub fn normalize_url(raw: &str) -> String {
        raw.strip_suffix('/').unwrap_or(raw).to_string()
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.enabled
            && self
                .base_url
                .as_deref()
                .is_some_and(|u| !u.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpTimeouts {
    pub connect_ms: u64,
    pub read_ms: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect_ms: 10_000,
            read_ms: 30_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: String,
    pub log_level: String,
    pub max_retries: u32,
    pub timeout_seconds: u64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: String::new(),
            log_level: "info".to_string(),
            max_retries: 3,
            timeout_seconds: 30,
        }
    }
}

/// Immutable, validated runtime profile, built once at startup and shared
/// read-only by every subsystem thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub instance_name: String,
    pub variant: DeploymentVariant,
    pub products: HashMap<Product, ProductConfig>,
    pub credentials: Credentials,
    pub timeouts: HttpTimeouts,
    pub preferences: Preferences,
    pub active_profile: Option<String>,
    pub list_tools_only: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            instance_name: "unconfigured-instance".to_string(),
            variant: DeploymentVariant::default(),
            products: HashMap::new(),
            credentials: Credentials::default(),
            timeouts: HttpTimeouts::default(),
            preferences: Preferences::default(),
            active_profile: None,
            list_tools_only: false,
        }
    }
}

impl RuntimeConfig {
    #[must_use]
    pub fn product(&self, product: Product) -> ProductConfig {
        self.products.get(&product).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn is_live(&self, product: Product) -> bool {
        self.product(product).is_live()
    }

    #[must_use]
    pub fn any_live(&self) -> bool {
        Product::all().iter().any(|p| self.is_live(*p))
    }

    #[must_use]
    pub fn auth_header(&self) -> String {
        self.credentials.auth_header(self.variant)
    }
}
