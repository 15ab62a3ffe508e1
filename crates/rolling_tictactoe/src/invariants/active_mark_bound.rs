//! Rolling variants keep at most three active marks per player.

use super::Invariant;
use crate::board::BoardState;
use crate::variant::WINDOW;
use crate::{Game, Player};

/// Invariant: in rolling variants no player has more than three active marks.
pub struct ActiveMarkBoundInvariant;

impl Invariant<Game> for ActiveMarkBoundInvariant {
    fn holds(game: &Game) -> bool {
        if !game.variant().is_rolling() {
            return true;
        }
        [Player::X, Player::O]
            .into_iter()
            .all(|player| game.board().active_cells(player).len() <= WINDOW)
    }

    fn description() -> &'static str {
        "Each player has at most three active marks"
    }
}
