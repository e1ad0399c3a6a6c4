//! Client configuration, read from the environment.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base endpoint every request path is joined onto.
    pub base_url: String,
    /// Upper bound on a single request, connect to last body byte.
    pub timeout: Duration,
    /// Optional bearer token. The backend does not enforce it.
    pub auth_token: Option<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base url '{0}': {1}")]
    InvalidBaseUrl(String, String),
    #[error("invalid timeout '{0}': expected milliseconds")]
    InvalidTimeout(String),
    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            auth_token: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Build from `LARDER_API_URL`, `LARDER_API_TIMEOUT_MS` and
    /// `LARDER_AUTH_TOKEN`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup("LARDER_API_URL") {
            config.base_url = url;
        }

        if let Some(raw) = lookup("LARDER_API_TIMEOUT_MS") {
            let millis = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Duration::from_millis(millis);
        }

        config.auth_token = lookup("LARDER_AUTH_TOKEN").filter(|t| !t.trim().is_empty());

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(self.base_url.clone(), e.to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidBaseUrl(
                self.base_url.clone(),
                format!("unsupported scheme '{other}'"),
            )),
        }
    }

    /// Join a request path onto the base url.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
