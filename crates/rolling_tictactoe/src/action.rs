//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A placement either succeeds
//! and yields a [`Transition`] describing what changed, or is rejected with
//! a [`MoveError`] and leaves the game untouched.

use crate::{Phase, Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// What an accepted placement changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Transition {
    /// The placement that was applied.
    pub action: Move,
    /// The mover's oldest mark, if the placement pushed it out of the window.
    pub evicted: Option<Position>,
    /// Phase after the placement.
    pub phase: Phase,
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The coordinates are outside the 3x3 board.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
