//! Board state for each rule variant.
//!
//! Every variant answers the same questions (is a square taken, who holds it,
//! has a player completed a line) but keeps its marks differently:
//!
//! - [`ClassicBoard`] stores a grid and never removes marks.
//! - [`RollingBoard`] stores a grid plus both players' rolling windows and
//!   clears a square whenever its mark is evicted from a window.
//! - [`HistoryBoard`] stores only the rolling windows; occupancy is derived
//!   from window membership.
//!
//! [`AnyBoard`] wraps whichever of the three a [`Variant`] calls for.

use crate::action::MoveError;
use crate::history::MoveHistory;
use crate::rules::{self, MatchMode, ScanOrder, WinningLine};
use crate::variant::WINDOW;
use crate::{Board, Player, Position, Square, Variant};
use tracing::{debug, instrument, trace};

/// Operations every variant's board supports.
pub trait BoardState {
    /// The rule variant this board implements.
    fn variant(&self) -> Variant;

    /// Whether `pos` currently holds an active mark.
    fn is_occupied(&self, pos: Position) -> bool;

    /// The player whose active mark sits on `pos`.
    fn owner(&self, pos: Position) -> Option<Player>;

    /// Places `player`'s mark on `pos`.
    ///
    /// Returns the position of the mark evicted by this placement, if any.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if `pos` is taken. The board is not
    /// modified in that case.
    fn place(&mut self, pos: Position, player: Player) -> Result<Option<Position>, MoveError>;

    /// Classic: all 9 squares taken. Rolling: both windows hold 3 marks.
    fn is_full(&self) -> bool;

    /// Clears all marks and history.
    fn reset(&mut self);

    /// The marks counted for `player` in occupancy and win checks.
    fn active_cells(&self, player: Player) -> Vec<Position>;

    /// The first line completed by `player`'s active marks.
    fn check_win(&self, player: Player) -> Option<WinningLine>;

    /// Rolling windows, for variants that keep them.
    fn history(&self) -> Option<&MoveHistory> {
        None
    }

    /// The active marks laid out as a grid.
    fn grid(&self) -> Board {
        let mut board = Board::new();
        for pos in Position::ALL {
            if let Some(player) = self.owner(pos) {
                board.set(pos, Square::Occupied(player));
            }
        }
        board
    }
}

// ─────────────────────────────────────────────────────────────
//  Classic
// ─────────────────────────────────────────────────────────────

/// Variant 1: marks stay put until the game is reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassicBoard {
    pub(crate) board: Board,
}

impl ClassicBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardState for ClassicBoard {
    fn variant(&self) -> Variant {
        Variant::Classic
    }

    fn is_occupied(&self, pos: Position) -> bool {
        !self.board.is_empty(pos)
    }

    fn owner(&self, pos: Position) -> Option<Player> {
        self.board.get(pos).owner()
    }

    #[instrument(skip(self))]
    fn place(&mut self, pos: Position, player: Player) -> Result<Option<Position>, MoveError> {
        if self.is_occupied(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.board.set(pos, Square::Occupied(player));
        Ok(None)
    }

    fn is_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        self.board.clear();
    }

    fn active_cells(&self, player: Player) -> Vec<Position> {
        self.board.cells_of(player)
    }

    #[instrument(skip(self))]
    fn check_win(&self, player: Player) -> Option<WinningLine> {
        rules::check_win(
            &self.active_cells(player),
            ScanOrder::ColumnsFirst,
            MatchMode::Subset,
        )
    }

    fn grid(&self) -> Board {
        self.board.clone()
    }
}

// ─────────────────────────────────────────────────────────────
//  Rolling, materialized grid
// ─────────────────────────────────────────────────────────────

/// Variant 2: a grid kept in sync with each player's last three moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollingBoard {
    pub(crate) board: Board,
    pub(crate) history: MoveHistory,
}

impl RollingBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardState for RollingBoard {
    fn variant(&self) -> Variant {
        Variant::Rolling
    }

    fn is_occupied(&self, pos: Position) -> bool {
        !self.board.is_empty(pos)
    }

    fn owner(&self, pos: Position) -> Option<Player> {
        self.board.get(pos).owner()
    }

    #[instrument(skip(self))]
    fn place(&mut self, pos: Position, player: Player) -> Result<Option<Position>, MoveError> {
        if self.is_occupied(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.board.set(pos, Square::Occupied(player));
        let evicted = self.history.record(pos, player);
        if let Some(old) = evicted {
            trace!(%old, "Clearing evicted square");
            self.board.set(old, Square::Empty);
        }
        Ok(evicted)
    }

    fn is_full(&self) -> bool {
        self.history.len(Player::X) == WINDOW && self.history.len(Player::O) == WINDOW
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        self.board.clear();
        self.history.clear();
    }

    fn active_cells(&self, player: Player) -> Vec<Position> {
        self.history.window(player).iter().collect()
    }

    #[instrument(skip(self))]
    fn check_win(&self, player: Player) -> Option<WinningLine> {
        rules::check_win(
            &self.active_cells(player),
            ScanOrder::RowsFirst,
            MatchMode::Exact,
        )
    }

    fn history(&self) -> Option<&MoveHistory> {
        Some(&self.history)
    }

    fn grid(&self) -> Board {
        self.board.clone()
    }
}

// ─────────────────────────────────────────────────────────────
//  Rolling, derived from history
// ─────────────────────────────────────────────────────────────

/// Variant 3: no grid at all; the windows are the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryBoard {
    pub(crate) history: MoveHistory,
}

impl HistoryBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardState for HistoryBoard {
    fn variant(&self) -> Variant {
        Variant::RollingHistory
    }

    fn is_occupied(&self, pos: Position) -> bool {
        self.history.owner(pos).is_some()
    }

    fn owner(&self, pos: Position) -> Option<Player> {
        self.history.owner(pos)
    }

    #[instrument(skip(self))]
    fn place(&mut self, pos: Position, player: Player) -> Result<Option<Position>, MoveError> {
        if self.is_occupied(pos) {
            return Err(MoveError::Occupied(pos));
        }
        Ok(self.history.record(pos, player))
    }

    fn is_full(&self) -> bool {
        self.history.len(Player::X) == WINDOW && self.history.len(Player::O) == WINDOW
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        self.history.clear();
    }

    fn active_cells(&self, player: Player) -> Vec<Position> {
        self.history.window(player).iter().collect()
    }

    #[instrument(skip(self))]
    fn check_win(&self, player: Player) -> Option<WinningLine> {
        rules::check_win_combinations(&self.active_cells(player), ScanOrder::RowsFirst)
    }

    fn history(&self) -> Option<&MoveHistory> {
        Some(&self.history)
    }
}

// ─────────────────────────────────────────────────────────────
//  Variant dispatch
// ─────────────────────────────────────────────────────────────

/// Board for any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyBoard {
    /// Variant 1.
    Classic(ClassicBoard),
    /// Variant 2.
    Rolling(RollingBoard),
    /// Variant 3.
    RollingHistory(HistoryBoard),
}

impl AnyBoard {
    /// Creates an empty board for `variant`.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        debug!("Creating board");
        match variant {
            Variant::Classic => AnyBoard::Classic(ClassicBoard::new()),
            Variant::Rolling => AnyBoard::Rolling(RollingBoard::new()),
            Variant::RollingHistory => AnyBoard::RollingHistory(HistoryBoard::new()),
        }
    }

    fn inner(&self) -> &dyn BoardState {
        match self {
            AnyBoard::Classic(b) => b,
            AnyBoard::Rolling(b) => b,
            AnyBoard::RollingHistory(b) => b,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn BoardState {
        match self {
            AnyBoard::Classic(b) => b,
            AnyBoard::Rolling(b) => b,
            AnyBoard::RollingHistory(b) => b,
        }
    }
}

impl From<Variant> for AnyBoard {
    fn from(variant: Variant) -> Self {
        Self::new(variant)
    }
}

impl BoardState for AnyBoard {
    fn variant(&self) -> Variant {
        self.inner().variant()
    }

    fn is_occupied(&self, pos: Position) -> bool {
        self.inner().is_occupied(pos)
    }

    fn owner(&self, pos: Position) -> Option<Player> {
        self.inner().owner(pos)
    }

    fn place(&mut self, pos: Position, player: Player) -> Result<Option<Position>, MoveError> {
        self.inner_mut().place(pos, player)
    }

    fn is_full(&self) -> bool {
        self.inner().is_full()
    }

    fn reset(&mut self) {
        self.inner_mut().reset()
    }

    fn active_cells(&self, player: Player) -> Vec<Position> {
        self.inner().active_cells(player)
    }

    fn check_win(&self, player: Player) -> Option<WinningLine> {
        self.inner().check_win(player)
    }

    fn history(&self) -> Option<&MoveHistory> {
        self.inner().history()
    }

    fn grid(&self) -> Board {
        self.inner().grid()
    }
}
