//! Board exhaustion for the classic variant.
//!
//! Only a classic game can end in a draw: nine marks and no line. The
//! rolling variants call a board full once both windows hold three marks
//! (see `RollingBoard::is_full` in `board.rs`); play continues there
//! because the next placement evicts first.

use crate::{Board, Square};
use tracing::instrument;

/// Whether all nine squares hold a mark.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
