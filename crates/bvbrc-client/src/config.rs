//! Client configuration
//!
//! Settings come from code, from environment variables (with `.env`
//! support) or from the process-wide [`crate::settings`] store.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Configuration Constants
// ============================================================================

/// BV-BRC data API root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.bv-brc.org/api";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "BVBRC_API_URL";

/// Environment variable holding an auth token.
pub const ENV_TOKEN: &str = "BVBRC_TOKEN";

/// Environment variable setting a request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "BVBRC_TIMEOUT_SECS";

/// Connection settings for a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root, e.g. `https://www.bv-brc.org/api`
    pub base_url: String,

    /// Sent as the `Authorization` header when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Transport timeout; none by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Extra headers merged over the defaults
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: None,
            headers: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable timeouts are ignored.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        config.token = lookup(ENV_TOKEN)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        config.timeout_secs = lookup(ENV_TIMEOUT_SECS).and_then(|s| s.trim().parse().ok());

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::config("Base URL cannot be empty"));
        }
        if self.timeout_secs == Some(0) {
            return Err(ClientError::config("Timeout must be greater than 0 seconds"));
        }
        Ok(())
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}
