// Service endpoint configuration

use std::time::Duration;

/// Public Kroki service
pub const DEFAULT_ENDPOINT: &str = "https://kroki.io";

/// Environment variable overriding the service endpoint
pub const ENDPOINT_ENV: &str = "KROKI_ENDPOINT";

/// Environment variable overriding the HTTP timeout, in seconds
pub const TIMEOUT_ENV: &str = "KROKI_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("endpoint must be an absolute http(s) URI: {0:?}")]
    InvalidEndpoint(String),
}

/// Kroki client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KrokiConfig {
    endpoint: String,
    timeout: Duration,
}

impl Default for KrokiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl KrokiConfig {
    /// Read configuration from the process environment
    ///
    /// `KROKI_ENDPOINT` replaces the public endpoint when set and non-empty.
    /// `KROKI_TIMEOUT_SECS` replaces the default 30 second timeout.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            let endpoint = endpoint.trim();
            if !endpoint.is_empty() {
                config.endpoint = normalize_endpoint(endpoint);
            }
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(
                    "Ignoring invalid {}={:?}, using {}s",
                    TIMEOUT_ENV,
                    raw,
                    config.timeout.as_secs()
                ),
            }
        }

        config
    }

    /// Replace the endpoint
    ///
    /// Unlike the environment lookup, an explicit endpoint is checked.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        let endpoint = endpoint.trim();
        let has_scheme = endpoint.starts_with("http://") || endpoint.starts_with("https://");
        let has_host = endpoint
            .split_once("://")
            .map(|(_, rest)| !rest.trim_matches('/').is_empty())
            .unwrap_or(false);
        if !has_scheme || !has_host {
            return Err(ConfigError::InvalidEndpoint(endpoint.to_string()));
        }

        self.endpoint = normalize_endpoint(endpoint);
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Service base URI, without trailing slash
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim_end_matches('/').to_string()
}
