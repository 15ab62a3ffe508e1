//! Rolling tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};
use rolling_tictactoe_tui::terminal::{TerminalGuard, install_panic_hook};
use rolling_tictactoe_tui::{App, Cli, TuiConfig, logging, ui};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    logging::init(&config)?;

    info!(variant = %config.variant(), "Starting tic-tac-toe");

    install_panic_hook();
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(*config.variant()), &config);
    drop(guard);

    if let Err(e) = &res {
        error!(error = %e, "Game loop failed");
    }
    info!("Exiting");
    res
}

#[instrument(skip_all)]
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    config: &TuiConfig,
) -> Result<()> {
    loop {
        let mut geometry = None;
        terminal.draw(|f| geometry = Some(ui::draw(f, &app, config)))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if let Some(geometry) = &geometry {
                app.handle_event(&event, geometry);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
