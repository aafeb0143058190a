//! Execution context: base URL, headers and the pooled HTTP client
//!
//! A context is built once and shared read-only by any number of concurrent
//! queries.

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

/// Body encoding understood by the data API.
pub const RQL_CONTENT_TYPE: &str = "application/rqlquery+x-www-form-urlencoded";

/// Immutable connection settings for query execution
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    base_url: String,
    headers: HeaderMap,
    http: Client,
}

impl ExecutionContext {
    /// Context for `base_url` with default headers only
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    /// Context from a [`ClientConfig`]; the token becomes the `Authorization` header.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Self::builder()
            .base_url(config.base_url.clone())
            .headers(config.headers.clone());

        if let Some(ref token) = config.token {
            builder = builder.token(token.clone());
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

/// Builder for [`ExecutionContext`]
#[derive(Debug, Default)]
pub struct ContextBuilder {
    base_url: Option<String>,
    headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl ContextBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Add a header; later values for the same name win.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Auth token, sent verbatim as `Authorization`
    pub fn token(self, token: impl Into<String>) -> Self {
        self.header(AUTHORIZATION.as_str(), token)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ExecutionContext> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(ClientError::config("Base URL cannot be empty"));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(RQL_CONTENT_TYPE));

        // HeaderName normalises case, so caller values replace defaults field by field.
        for (name, value) in self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ClientError::InvalidHeader(format!("bad name '{}'", name)))?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|_| ClientError::InvalidHeader(format!("bad value for '{}'", name)))?;
            headers.insert(header_name, header_value);
        }

        let mut client = Client::builder();
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }

        let http = client.build().map_err(client_setup_error)?;

        Ok(ExecutionContext {
            base_url,
            headers,
            http,
        })
    }
}

/// Client construction fails before any I/O (TLS backend, proxy setup).
fn client_setup_error(err: reqwest::Error) -> ClientError {
    ClientError::config(format!("Failed to build HTTP client: {}", err))
}
