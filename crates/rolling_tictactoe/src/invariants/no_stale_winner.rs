//! A game still awaiting moves has no completed line on the board.

use super::Invariant;
use crate::board::BoardState;
use crate::rules::check_winner;
use crate::{Game, Phase};

/// Invariant: while awaiting a move, neither player has three in a row.
pub struct NoStaleWinnerInvariant;

impl Invariant<Game> for NoStaleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        match game.phase() {
            Phase::AwaitingMove(_) => check_winner(&game.board().grid()).is_none(),
            Phase::GameOver(_) => true,
        }
    }

    fn description() -> &'static str {
        "No completed line while the game is in progress"
    }
}
