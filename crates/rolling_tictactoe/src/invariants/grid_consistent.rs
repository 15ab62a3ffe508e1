//! The grid agrees with the move record.

use super::Invariant;
use crate::board::{AnyBoard, BoardState};
use crate::{Game, Player, Position, Square};

/// Invariant: the materialized grid matches what the moves imply.
///
/// - Classic: mark counts differ by at most one and add up to the number
///   of accepted placements.
/// - Rolling: every grid square is occupied exactly when its owner's window
///   contains it.
/// - Rolling history has no separate grid and always holds.
pub struct GridConsistentInvariant;

impl Invariant<Game> for GridConsistentInvariant {
    fn holds(game: &Game) -> bool {
        match game.board() {
            AnyBoard::Classic(board) => {
                let grid = board.grid();
                let (x, o) = (grid.count(Player::X), grid.count(Player::O));
                x.abs_diff(o) <= 1 && x + o == game.moves_played()
            }
            AnyBoard::Rolling(board) => Position::ALL.into_iter().all(|pos| {
                let expected = board
                    .history
                    .owner(pos)
                    .map_or(Square::Empty, Square::Occupied);
                board.board.get(pos) == expected
            }),
            AnyBoard::RollingHistory(_) => true,
        }
    }

    fn description() -> &'static str {
        "Grid squares match the move record"
    }
}
