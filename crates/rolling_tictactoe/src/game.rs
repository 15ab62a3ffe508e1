//! Turn state machine shared by every variant.
//!
//! ```text
//! AwaitingMove(X) --place--> AwaitingMove(O) --place--> ... --place--> GameOver(outcome)
//!        ^                                                                   |
//!        +------------------------------ restart ---------------------------+
//! ```
//!
//! Rejected placements leave the phase, the player to move and the board
//! untouched.

use crate::action::{Move, MoveError, Transition};
use crate::board::{AnyBoard, BoardState};
use crate::invariants::assert_invariants;
use crate::rules::WinningLine;
use crate::scene::Scene;
use crate::{Player, Position, Variant};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner {
        /// The player who won.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Classic board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, line } => write!(f, "Player {} wins on {}", player, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the given player to place a mark.
    AwaitingMove(Player),
    /// No further placements are accepted until restart.
    GameOver(Outcome),
}

/// A game of tic-tac-toe under one variant's rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: AnyBoard,
    pub(crate) phase: Phase,
    pub(crate) moves_played: usize,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        Self {
            board: AnyBoard::new(variant),
            phase: Phase::AwaitingMove(Player::X),
            moves_played: 0,
        }
    }

    /// The rule variant in play.
    pub fn variant(&self) -> Variant {
        self.board.variant()
    }

    /// The board.
    pub fn board(&self) -> &AnyBoard {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.phase {
            Phase::AwaitingMove(player) => Some(player),
            Phase::GameOver(_) => None,
        }
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::AwaitingMove(_) => None,
            Phase::GameOver(outcome) => Some(outcome),
        }
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Placements accepted since the last restart.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Whether `pos` holds an active mark.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.board.is_occupied(pos)
    }

    /// Whether `(row, col)` holds an active mark; off-board coordinates never do.
    pub fn is_occupied_at(&self, row: usize, col: usize) -> bool {
        Position::at(row, col).is_some_and(|pos| self.is_occupied(pos))
    }

    /// Places the current player's mark on `pos`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once a winner or draw has been reached.
    /// - [`MoveError::Occupied`] if `pos` holds an active mark.
    ///
    /// Neither error changes the game.
    #[instrument(skip(self), fields(variant = %self.variant(), phase = ?self.phase))]
    pub fn play(&mut self, pos: Position) -> Result<Transition, MoveError> {
        let Phase::AwaitingMove(player) = self.phase else {
            debug!("Placement after game over ignored");
            return Err(MoveError::GameOver);
        };

        let evicted = self.board.place(pos, player).inspect_err(|e| {
            debug!(error = %e, "Placement rejected");
        })?;
        self.moves_played += 1;

        self.phase = if let Some(line) = self.board.check_win(player) {
            info!(%player, %line, "Game won");
            Phase::GameOver(Outcome::Winner { player, line })
        } else if self.variant() == Variant::Classic && self.board.is_full() {
            info!("Game drawn");
            Phase::GameOver(Outcome::Draw)
        } else {
            Phase::AwaitingMove(player.opponent())
        };

        assert_invariants(self);

        debug!(?evicted, next = ?self.phase, "Placement accepted");
        Ok(Transition::new(Move::new(player, pos), evicted, self.phase))
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for coordinates outside the board, otherwise
    /// as [`Game::play`].
    pub fn place_at(&mut self, row: usize, col: usize) -> Result<Transition, MoveError> {
        let pos = Position::at(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.play(pos)
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self), fields(variant = %self.variant()))]
    pub fn restart(&mut self) {
        info!(moves_played = self.moves_played, "Restarting game");
        self.board.reset();
        self.phase = Phase::AwaitingMove(Player::X);
        self.moves_played = 0;
    }

    /// Render instructions for the current state.
    pub fn scene(&self) -> Scene {
        Scene::capture(self)
    }

    /// Replays `moves` from a fresh game, stopping at the first rejected one.
    ///
    /// # Errors
    ///
    /// Returns the first rejected placement's error.
    #[instrument]
    pub fn replay(variant: Variant, moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new(variant);
        for pos in moves {
            game.play(*pos)?;
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_awaits_x() {
        let game = Game::new(Variant::Classic);
        assert_eq!(game.phase(), Phase::AwaitingMove(Player::X));
        assert_eq!(game.moves_played(), 0);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Variant::Rolling);
        game.play(Position::Center).unwrap();
        assert_eq!(game.to_move(), Some(Player::O));
        game.play(Position::TopLeft).unwrap();
        assert_eq!(game.to_move(), Some(Player::X));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = Game::new(Variant::RollingHistory);
        game.play(Position::Center).unwrap();
        let before = game.clone();
        assert_eq!(game.play(Position::Center), Err(MoveError::Occupied(Position::Center)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_place_at_out_of_bounds() {
        let mut game = Game::new(Variant::Classic);
        assert_eq!(game.place_at(3, 1), Err(MoveError::OutOfBounds { row: 3, col: 1 }));
        assert!(!game.is_occupied_at(3, 1));
        assert_eq!(game.to_move(), Some(Player::X));
    }

    #[test]
    fn test_game_over_rejects_moves() {
        // X: top row, O: middle row (incomplete)
        let mut game = Game::replay(
            Variant::Classic,
            &[
                Position::TopLeft,
                Position::MiddleLeft,
                Position::TopCenter,
                Position::Center,
                Position::TopRight,
            ],
        )
        .unwrap();
        assert_eq!(
            game.outcome(),
            Some(Outcome::Winner { player: Player::X, line: WinningLine::Row(0) })
        );
        assert_eq!(game.play(Position::BottomLeft), Err(MoveError::GameOver));
        assert_eq!(game.moves_played(), 5);
    }

    #[test]
    fn test_transition_reports_eviction() {
        let mut game = Game::replay(
            Variant::Rolling,
            &[
                Position::TopLeft,
                Position::BottomLeft,
                Position::Center,
                Position::BottomCenter,
                Position::MiddleRight,
                Position::TopCenter,
            ],
        )
        .unwrap();
        let transition = game.play(Position::TopRight).unwrap();
        assert_eq!(transition.action, Move::new(Player::X, Position::TopRight));
        assert_eq!(transition.evicted, Some(Position::TopLeft));
        assert_eq!(transition.phase, Phase::AwaitingMove(Player::O));
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut game = Game::replay(
            Variant::Classic,
            &[
                Position::TopLeft,
                Position::MiddleLeft,
                Position::TopCenter,
                Position::Center,
                Position::TopRight,
            ],
        )
        .unwrap();
        game.restart();
        assert_eq!(game, Game::new(Variant::Classic));
    }
}
