//! Render instructions derived from game state.
//!
//! A [`Scene`] is everything a front end needs to draw one frame: what sits
//! on each cell, which marks are about to fall out of a rolling window, and
//! which line (if any) won the game. Building one never mutates the game.

use crate::board::BoardState;
use crate::rules::WinningLine;
use crate::{Game, Phase, Player, Position, Variant};
use tracing::instrument;

/// How to draw a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellView {
    /// The active mark on the cell.
    pub mark: Option<Player>,
    /// Drawn dimmed: an older mark in a full rolling window.
    pub faded: bool,
    /// Part of the winning line.
    pub winning: bool,
}

/// Render instructions for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    /// Cells in row-major order.
    pub cells: [CellView; 9],
    /// The completed line, once someone has won.
    pub winning_line: Option<WinningLine>,
    /// Phase the game was in.
    pub phase: Phase,
    /// Rules in play.
    pub variant: Variant,
}

impl Scene {
    /// Captures the current state of `game`.
    ///
    /// When a player's rolling window is full, every mark except their newest
    /// is faded. Fading is cosmetic only: faded cells are still occupied.
    #[instrument(skip(game))]
    pub fn capture(game: &Game) -> Self {
        let board = game.board();
        let winning_line = game.outcome().and_then(|outcome| outcome.line());

        let mut cells = [CellView::default(); 9];
        for pos in Position::ALL {
            let mark = board.owner(pos);
            let faded = match (mark, board.history()) {
                (Some(player), Some(history)) => {
                    let window = history.window(player);
                    window.is_full() && window.newest() != Some(pos)
                }
                _ => false,
            };
            cells[pos.to_index()] = CellView {
                mark,
                faded,
                winning: winning_line.is_some_and(|line| line.contains(pos)),
            };
        }

        Self {
            cells,
            winning_line,
            phase: game.phase(),
            variant: game.variant(),
        }
    }

    /// The view for `pos`.
    pub fn cell(&self, pos: Position) -> CellView {
        self.cells[pos.to_index()]
    }

    /// One-line status for the player.
    pub fn status(&self) -> String {
        match self.phase {
            Phase::AwaitingMove(player) => format!("Player {}'s turn", player),
            Phase::GameOver(outcome) => outcome.to_string(),
        }
    }
}
