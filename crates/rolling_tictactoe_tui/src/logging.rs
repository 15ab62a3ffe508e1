//! File-backed tracing setup.

use crate::config::TuiConfig;
use std::fs::File;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` if set, else the configured directive.
pub fn filter(config: &TuiConfig) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(config.log_filter())?),
    }
}

/// Installs a global subscriber writing to the configured log file.
///
/// Installing twice is not an error; the first subscriber stays and the
/// attempt is logged through it.
pub fn init(config: &TuiConfig) -> anyhow::Result<()> {
    let log_file = File::create(config.log_file())?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(config)?)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    if let Err(e) = installed {
        debug!(error = %e, "Subscriber already installed; keeping it");
    }
    Ok(())
}
