//! TOML configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use ratatui::style::Color;
use rolling_tictactoe::Variant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Smallest cell that still fits a border around a mark.
pub const MIN_CELL_SIZE: u16 = 3;

/// Largest cell accepted, keeping a 3x3 board far inside `u16` coordinates.
pub const MAX_CELL_SIZE: u16 = 64;

/// Front-end configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct TuiConfig {
    /// Rule variant to play.
    variant: Variant,

    /// File receiving log output (the terminal is owned by the UI).
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,

    /// Board dimensions.
    board: BoardConfig,

    /// Mark colors.
    theme: Theme,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
            board: BoardConfig::default(),
            theme: Theme::default(),
        }
    }
}

/// Size of one board cell in terminal columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Columns per cell.
    cell_width: u16,
    /// Rows per cell.
    cell_height: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_width: 9,
            cell_height: 5,
        }
    }
}

/// Colors for marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Color of X marks.
    x_color: ThemeColor,
    /// Color of O marks.
    o_color: ThemeColor,
    /// Color of marks about to leave a rolling window.
    faded_color: ThemeColor,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x_color: ThemeColor::Blue,
            o_color: ThemeColor::Red,
            faded_color: ThemeColor::DarkGray,
        }
    }
}

/// Named terminal colors accepted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
#[allow(missing_docs)]
pub enum ThemeColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
}

impl From<ThemeColor> for Color {
    fn from(color: ThemeColor) -> Self {
        match color {
            ThemeColor::Black => Color::Black,
            ThemeColor::Red => Color::Red,
            ThemeColor::Green => Color::Green,
            ThemeColor::Yellow => Color::Yellow,
            ThemeColor::Blue => Color::Blue,
            ThemeColor::Magenta => Color::Magenta,
            ThemeColor::Cyan => Color::Cyan,
            ThemeColor::Gray => Color::Gray,
            ThemeColor::DarkGray => Color::DarkGray,
            ThemeColor::LightRed => Color::LightRed,
            ThemeColor::LightGreen => Color::LightGreen,
            ThemeColor::LightYellow => Color::LightYellow,
            ThemeColor::LightBlue => Color::LightBlue,
            ThemeColor::LightMagenta => Color::LightMagenta,
            ThemeColor::LightCyan => Color::LightCyan,
            ThemeColor::White => Color::White,
        }
    }
}

impl TuiConfig {
    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(variant = %config.variant, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Rejects cells too small to draw or too large to lay out.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let BoardConfig {
            cell_width,
            cell_height,
        } = self.board;
        if cell_width < MIN_CELL_SIZE || cell_height < MIN_CELL_SIZE {
            return Err(ConfigError::new(format!(
                "Cell size {}x{} is below the minimum {}x{}",
                cell_width, cell_height, MIN_CELL_SIZE, MIN_CELL_SIZE
            )));
        }
        if cell_width > MAX_CELL_SIZE || cell_height > MAX_CELL_SIZE {
            return Err(ConfigError::new(format!(
                "Cell size {}x{} is above the maximum {}x{}",
                cell_width, cell_height, MAX_CELL_SIZE, MAX_CELL_SIZE
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
