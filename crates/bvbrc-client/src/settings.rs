//! Process-wide default configuration
//!
//! A single lock-guarded [`ClientConfig`] used by [`crate::query`] and
//! [`crate::BvbrcClient::from_settings`], together with the
//! [`ExecutionContext`] built from it. The context is built on first use and
//! reused until the settings change. Nothing here touches the filesystem
//! except [`load_token_from_file`].

use crate::config::ClientConfig;
use crate::context::ExecutionContext;
use crate::error::{ClientError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Token file written by the BV-BRC command-line tools.
pub const TOKEN_FILE_NAME: &str = ".patric_token";

struct State {
    config: Option<ClientConfig>,
    context: Option<Arc<ExecutionContext>>,
}

static STATE: RwLock<State> = RwLock::new(State {
    config: None,
    context: None,
});

fn read_state() -> RwLockReadGuard<'static, State> {
    STATE.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_state() -> RwLockWriteGuard<'static, State> {
    STATE.write().unwrap_or_else(PoisonError::into_inner)
}

/// Partial update for [`merge`]; only present fields are applied.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
    pub headers: BTreeMap<String, String>,
}

/// Current settings, or defaults if none were set
pub fn get() -> ClientConfig {
    read_state().config.clone().unwrap_or_default()
}

/// Shared context for the current settings, built on first use
pub fn context() -> Result<Arc<ExecutionContext>> {
    if let Some(ctx) = read_state().context.as_ref() {
        return Ok(Arc::clone(ctx));
    }

    let mut state = write_state();
    // Another caller may have built it between the two locks.
    if let Some(ctx) = state.context.as_ref() {
        return Ok(Arc::clone(ctx));
    }

    let config = state.config.clone().unwrap_or_default();
    let ctx = Arc::new(ExecutionContext::from_config(&config)?);
    debug!(base_url = %ctx.base_url(), "Built shared execution context");
    state.context = Some(Arc::clone(&ctx));
    Ok(ctx)
}

/// Replace the settings
pub fn set(config: ClientConfig) {
    let mut state = write_state();
    state.config = Some(config);
    state.context = None;
}

/// Apply `patch` over the current settings and return the result
pub fn merge(patch: SettingsPatch) -> ClientConfig {
    let mut state = write_state();
    let mut config = state.config.take().unwrap_or_default();

    if let Some(url) = patch.base_url {
        config.base_url = url;
    }
    if let Some(token) = patch.token {
        config.token = Some(token);
    }
    if let Some(secs) = patch.timeout_secs {
        config.timeout_secs = Some(secs);
    }
    config.headers.extend(patch.headers);

    state.config = Some(config.clone());
    state.context = None;
    config
}

/// Back to defaults
pub fn reset() {
    let mut state = write_state();
    state.config = None;
    state.context = None;
}

pub fn token() -> Option<String> {
    get().token
}

pub fn set_token(token: impl Into<String>) {
    merge(SettingsPatch {
        token: Some(token.into()),
        ..SettingsPatch::default()
    });
}

/// `~/.patric_token`, if a home directory is known
pub fn default_token_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(TOKEN_FILE_NAME))
}

/// Read a token from `path`, store it, and return it.
pub fn load_token_from_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let token = std::fs::read_to_string(path)?.trim().to_string();
    if token.is_empty() {
        return Err(ClientError::config(format!(
            "Token file '{}' is empty",
            path.display()
        )));
    }

    set_token(token.clone());
    info!(path = %path.display(), "Loaded auth token");
    Ok(token)
}
