//! No square is active for both players.

use super::Invariant;
use crate::board::BoardState;
use crate::{Game, Player};

/// Invariant: the two players' active cells never overlap.
pub struct DisjointOwnershipInvariant;

impl Invariant<Game> for DisjointOwnershipInvariant {
    fn holds(game: &Game) -> bool {
        let x_cells = game.board().active_cells(Player::X);
        game.board()
            .active_cells(Player::O)
            .iter()
            .all(|pos| !x_cells.contains(pos))
    }

    fn description() -> &'static str {
        "No square is held by both players"
    }
}
