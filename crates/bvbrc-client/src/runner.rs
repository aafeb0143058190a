//! Query runner: validate, assemble, send, decode
//!
//! The runner keeps no state between calls. Option validation happens before
//! any network I/O, and no failure is retried.

use crate::context::ExecutionContext;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::options::QueryOptions;
use crate::rql::{self, Fragment};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Build the request body for `filter` and `options`.
///
/// Non-empty clauses are joined with `&` in a fixed order: filter, select,
/// sort, limit, `http_download=true`. A missing limit becomes
/// [`crate::options::DEFAULT_LIMIT`].
pub fn assemble_body(filter: &str, options: &QueryOptions) -> Result<String> {
    options.validate()?;

    let clauses = [
        Fragment::raw(filter.trim()),
        options
            .select
            .as_ref()
            .map(|fields| rql::select(fields))
            .unwrap_or_default(),
        options
            .sort
            .as_deref()
            .map(rql::sort)
            .unwrap_or_default(),
        rql::limit(options.effective_limit()),
        rql::http_download(options.http_download),
    ];

    Ok(clauses
        .iter()
        .filter(|clause| !clause.is_empty())
        .map(Fragment::as_str)
        .collect::<Vec<_>>()
        .join("&"))
}

/// Run a query against `core` and return the raw JSON response.
pub async fn run(
    core: &str,
    filter: impl AsRef<str>,
    options: &QueryOptions,
    ctx: &ExecutionContext,
) -> Result<Value> {
    run_as(core, filter, options, ctx).await
}

/// Run a query and decode the response into `T`.
pub async fn run_as<T: DeserializeOwned>(
    core: &str,
    filter: impl AsRef<str>,
    options: &QueryOptions,
    ctx: &ExecutionContext,
) -> Result<T> {
    let body = assemble_body(filter.as_ref(), options)?;
    let url = endpoints::core_url(ctx.base_url(), core);

    debug!(core = %core, url = %url, body = %body, "Sending RQL query");

    let response = ctx
        .http()
        .post(&url)
        .headers(ctx.headers().clone())
        .body(body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        warn!(core = %core, status = %status, "Query rejected by server");
        return Err(ClientError::http(status, url));
    }

    let bytes = response.bytes().await?;
    debug!(core = %core, status = %status, bytes = bytes.len(), "Received response");

    Ok(serde_json::from_slice(&bytes)?)
}
