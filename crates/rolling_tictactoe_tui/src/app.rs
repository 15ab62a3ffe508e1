//! Application state and logic.

use crate::input::{Action, event_action};
use crossterm::event::Event;
use rolling_tictactoe::{BoardGeometry, Command, Game, Position, Variant};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application playing `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            game: Game::new(variant),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell highlighted for keyboard play.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a terminal event against the board drawn last frame.
    #[instrument(skip(self, event, geometry))]
    pub fn handle_event(&mut self, event: &Event, geometry: &BoardGeometry) {
        match event_action(event, self.cursor, geometry) {
            Some(Action::Command(command)) => self.apply(command),
            Some(Action::MoveCursor(pos)) => self.cursor = pos,
            Some(Action::PlaceAtCursor) => self.apply(Command::Place(self.cursor)),
            None => {}
        }
    }

    /// Applies a player command. Rejected moves leave the game untouched.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Place(pos) => match self.game.play(pos) {
                Ok(transition) => {
                    self.cursor = pos;
                    if let Some(evicted) = transition.evicted {
                        debug!(%evicted, "Oldest mark removed");
                    }
                }
                Err(e) => debug!(error = %e, %pos, "Move ignored"),
            },
            Command::Restart => {
                info!(variant = %self.game.variant(), "Restarting game");
                self.game.restart();
                self.cursor = Position::Center;
            }
            Command::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }
}
