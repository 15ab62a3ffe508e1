//! Terminal front end for rolling tic-tac-toe.
//!
//! Two humans share one terminal: click a cell or move the cursor with the
//! arrow keys and press Enter. Logs go to a file since the UI owns the screen.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
