//! Loading configuration from disk.

use clap::Parser;
use rolling_tictactoe::Variant;
use rolling_tictactoe_tui::config::{MAX_CELL_SIZE, ThemeColor};
use rolling_tictactoe_tui::{Cli, TuiConfig};
use std::io::Write;
use std::path::PathBuf;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
variant = "classic"
log_file = "game.log"
log_filter = "rolling_tictactoe=debug"

[board]
cell_width = 7
cell_height = 3

[theme]
x_color = "green"
o_color = "magenta"
faded_color = "gray"
"#,
    );
    let config = TuiConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.variant(), Variant::Classic);
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "rolling_tictactoe=debug");
    assert_eq!(*config.board().cell_width(), 7);
    assert_eq!(*config.board().cell_height(), 3);
    assert_eq!(*config.theme().x_color(), ThemeColor::Green);
    assert_eq!(*config.theme().faded_color(), ThemeColor::Gray);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let file = write_config("[theme]\no_color = \"yellow\"\n");
    let config = TuiConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.theme().o_color(), ThemeColor::Yellow);
    assert_eq!(*config.theme().x_color(), ThemeColor::Blue);
    assert_eq!(*config.variant(), Variant::Rolling);
}

#[test]
fn test_unknown_color_rejected() {
    let file = write_config("[theme]\nx_color = \"chartreuse\"\n");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_oversized_cell_rejected() {
    let file = write_config("[board]\ncell_width = 30000\ncell_height = 5\n");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("above the maximum"));

    let too_tall = format!("[board]\ncell_height = {}\n", MAX_CELL_SIZE + 1);
    let file = write_config(&too_tall);
    assert!(TuiConfig::from_file(file.path()).is_err());
}

#[test]
fn test_unknown_key_rejected() {
    let file = write_config("colour = \"red\"\n");
    assert!(TuiConfig::from_file(file.path()).is_err());
}

#[test]
fn test_cli_flags_override_file() {
    let file = write_config("variant = \"classic\"\nlog_file = \"from_file.log\"\n");
    let path = file.path().to_str().unwrap();
    let cli = Cli::try_parse_from([
        "tictactoe",
        "--config",
        path,
        "--variant",
        "rolling-history",
        "--log-file",
        "from_cli.log",
    ])
    .unwrap();
    let config = cli.resolve_config().unwrap();

    assert_eq!(*config.variant(), Variant::RollingHistory);
    assert_eq!(config.log_file(), &PathBuf::from("from_cli.log"));
}
