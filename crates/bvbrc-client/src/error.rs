//! Error types for the BV-BRC client
//!
//! Every failure is surfaced to the caller as-is. Nothing here is retried or
//! translated into a fallback value.

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Error type for query construction and execution
#[derive(Error, Debug)]
pub enum ClientError {
    /// Query options violate an invariant; raised before any request is sent
    #[error("Invalid query options: {0}")]
    InvalidOptions(String),

    /// The service answered with a non-success status
    #[error("HTTP {status} {status_text} from {url}")]
    Http {
        status: u16,
        status_text: String,
        url: String,
    },

    /// Lower-level network failure (DNS, refused connection, timeout)
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("Failed to decode response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Lookup name not defined for the core
    #[error("Unknown lookup '{name}' on {core}; available: {available}")]
    UnknownLookup {
        name: String,
        core: String,
        available: String,
    },

    /// Caller-supplied header name or value is not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the token file failed
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Create an invalid options error
    pub fn invalid_options(msg: impl Into<String>) -> Self {
        Self::InvalidOptions(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an HTTP status error
    pub fn http(status: reqwest::StatusCode, url: impl Into<String>) -> Self {
        Self::Http {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            url: url.into(),
        }
    }

    /// Whether this is a non-success HTTP response
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Status code of an HTTP error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_contains_status() {
        let err = ClientError::http(reqwest::StatusCode::NOT_FOUND, "https://example.org/genome/");
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Not Found"));
        assert!(err.is_http());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_unknown_lookup_message() {
        let err = ClientError::UnknownLookup {
            name: "gene".to_string(),
            core: "taxonomy".to_string(),
            available: "id, name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown lookup 'gene' on taxonomy; available: id, name"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_invalid_options_is_not_http() {
        let err = ClientError::invalid_options("http_download requires sort");
        assert!(!err.is_http());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("http_download requires sort"));
    }
}
