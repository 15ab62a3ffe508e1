//! Command-line interface for the terminal game.

use crate::config::{ConfigError, TuiConfig};
use clap::Parser;
use rolling_tictactoe::Variant;
use std::path::PathBuf;
use tracing::instrument;

/// Rolling Tic-Tac-Toe - classic and rolling-window rules in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe where only your last three marks count", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rule variant: classic, rolling or rolling-history
    #[arg(short, long)]
    pub variant: Option<Variant>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file (if any) and applies command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<TuiConfig, ConfigError> {
        let mut config = TuiConfig::load(self.config.as_deref())?;
        if let Some(variant) = self.variant {
            config = config.with_variant(variant);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        Ok(config)
    }
}
