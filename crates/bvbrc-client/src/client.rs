//! Client bound to one execution context

use crate::config::ClientConfig;
use crate::context::ExecutionContext;
use crate::error::Result;
use crate::options::QueryOptions;
use crate::resources::{Core, Resource};
use crate::{runner, settings};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Entry point for querying the data API
///
/// Cloning is cheap; clones share the same context and connection pool.
#[derive(Debug, Clone)]
pub struct BvbrcClient {
    ctx: Arc<ExecutionContext>,
}

impl BvbrcClient {
    pub fn new(ctx: ExecutionContext) -> Self {
        Self { ctx: Arc::new(ctx) }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(ExecutionContext::from_config(config)?))
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::from_env()?)
    }

    /// Client over the shared context of the process-wide [`settings`]
    pub fn from_settings() -> Result<Self> {
        Ok(Self {
            ctx: settings::context()?,
        })
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.ctx
    }

    /// Query handle for `core`
    pub fn resource(&self, core: Core) -> Resource {
        Resource::new(core, Arc::clone(&self.ctx))
    }

    /// Ad-hoc query; `core` is passed to the service unchecked
    pub async fn query(
        &self,
        core: &str,
        filter: impl AsRef<str>,
        options: &QueryOptions,
    ) -> Result<Value> {
        runner::run(core, filter, options, &self.ctx).await
    }

    pub async fn query_as<T: DeserializeOwned>(
        &self,
        core: &str,
        filter: impl AsRef<str>,
        options: &QueryOptions,
    ) -> Result<T> {
        runner::run_as(core, filter, options, &self.ctx).await
    }
}

/// One-off query using the process-wide [`settings`]
pub async fn query(core: &str, filter: impl AsRef<str>, options: &QueryOptions) -> Result<Value> {
    BvbrcClient::from_settings()?.query(core, filter, options).await
}
