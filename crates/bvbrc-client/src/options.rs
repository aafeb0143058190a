//! Per-call query modifiers

use crate::error::{ClientError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Row cap applied when the caller gives none.
pub const DEFAULT_LIMIT: u64 = 1000;

/// Modifiers for a single query.
///
/// All fields are optional. `http_download` requires a non-empty `sort`;
/// [`QueryOptions::validate`] enforces this before anything is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Projected fields, in output order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<Vec<String>>,

    /// RQL sort expression, e.g. `-genome_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Row cap.
    ///
    /// In JSON input, anything that is not a non-negative integer (a
    /// fraction, a string, or a negative number such as `-3`) reads as
    /// absent, so [`DEFAULT_LIMIT`] is sent instead.
    #[serde(default, deserialize_with = "lenient_limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,

    /// Request bulk delivery
    #[serde(default)]
    pub http_download: bool,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn sort(mut self, expr: impl Into<String>) -> Self {
        self.sort = Some(expr.into());
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn http_download(mut self, enabled: bool) -> Self {
        self.http_download = enabled;
        self
    }

    /// The limit that will be sent
    pub fn effective_limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    fn has_sort(&self) -> bool {
        self.sort.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Check the cross-field invariant.
    pub fn validate(&self) -> Result<()> {
        if self.http_download && !self.has_sort() {
            return Err(ClientError::invalid_options(
                "http_download requires a non-empty sort expression",
            ));
        }
        Ok(())
    }
}

fn lenient_limit<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_u64().or_else(|| {
            v.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
    }))
}
