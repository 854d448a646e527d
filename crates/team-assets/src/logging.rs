//! Log output for the command-line tool
//!
//! Events go to stderr so the run summary on stdout stays clean.

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Configuration for tracing initialization
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// Explicit filter; falls back to `RUST_LOG`, then `default_filter`
    pub env_filter: Option<String>,
    pub default_filter: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_filter: "info",
        }
    }
}

impl LogConfig {
    /// Filter directive that will be applied
    #[must_use]
    pub fn resolve_filter(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| self.default_filter.to_string())
    }
}

/// Install the fmt subscriber; later calls are no-ops
///
/// # Errors
/// Fails on an unparsable filter directive or if another global subscriber
/// was installed first.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_new(config.resolve_filter())?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    INIT.set(()).map_err(|()| anyhow!("tracing already initialized"))?;
    Ok(())
}
