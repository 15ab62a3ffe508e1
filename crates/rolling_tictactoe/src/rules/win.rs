//! Win detection logic for tic-tac-toe.
//!
//! The detector works on the set of a player's active cells rather than on a
//! grid, so the same code serves the classic board (every mark ever placed)
//! and the rolling variants (at most three marks per player).

use crate::variant::WINDOW;
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 three-in-a-row lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinningLine {
    /// Horizontal line through the given row (0-2).
    Row(usize),
    /// Vertical line through the given column (0-2).
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl WinningLine {
    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        let at = |row: usize, col: usize| Position::ALL[row * 3 + col];
        match self {
            WinningLine::Row(r) => [at(r, 0), at(r, 1), at(r, 2)],
            WinningLine::Column(c) => [at(0, c), at(1, c), at(2, c)],
            WinningLine::MainDiagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            WinningLine::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }

    /// Whether `pos` lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinningLine::Row(r) => write!(f, "row {}", r + 1),
            WinningLine::Column(c) => write!(f, "column {}", c + 1),
            WinningLine::MainDiagonal => write!(f, "diagonal"),
            WinningLine::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Order in which lines are tested; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOrder {
    /// Columns, rows, main diagonal, anti diagonal.
    ColumnsFirst,
    /// Rows, columns, main diagonal, anti diagonal.
    RowsFirst,
}

impl ScanOrder {
    /// All 8 lines in scan order.
    pub fn lines(self) -> [WinningLine; 8] {
        use WinningLine::*;
        match self {
            ScanOrder::ColumnsFirst => [
                Column(0),
                Column(1),
                Column(2),
                Row(0),
                Row(1),
                Row(2),
                MainDiagonal,
                AntiDiagonal,
            ],
            ScanOrder::RowsFirst => [
                Row(0),
                Row(1),
                Row(2),
                Column(0),
                Column(1),
                Column(2),
                MainDiagonal,
                AntiDiagonal,
            ],
        }
    }
}

/// How a line is compared against a player's active cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The line must be contained in the cells.
    Subset,
    /// The cells must be exactly the line.
    Exact,
}

/// Finds the first line in `order` completed by `cells`.
#[instrument]
pub fn check_win(cells: &[Position], order: ScanOrder, mode: MatchMode) -> Option<WinningLine> {
    if cells.len() < 3 {
        return None;
    }
    if mode == MatchMode::Exact && cells.len() != 3 {
        return None;
    }

    order
        .lines()
        .into_iter()
        .find(|line| line.positions().iter().all(|pos| cells.contains(pos)))
}

/// Every 3-element combination of `cells`, preserving input order.
pub fn combinations(cells: &[Position]) -> Vec<[Position; 3]> {
    let mut combos = Vec::new();
    for i in 0..cells.len() {
        for j in i + 1..cells.len() {
            for k in j + 1..cells.len() {
                combos.push([cells[i], cells[j], cells[k]]);
            }
        }
    }
    combos
}

/// Tests each 3-element combination of a move history against every line.
///
/// With histories capped at [`WINDOW`] entries there is at most one
/// combination, the whole history.
#[instrument]
pub fn check_win_combinations(history: &[Position], order: ScanOrder) -> Option<WinningLine> {
    debug_assert!(history.len() <= WINDOW);
    combinations(history)
        .iter()
        .find_map(|combo| check_win(combo, order, MatchMode::Exact))
}

/// Checks if either player has three in a row on a materialized grid.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    [Player::X, Player::O].into_iter().find_map(|player| {
        check_win(&board.cells_of(player), ScanOrder::RowsFirst, MatchMode::Subset)
            .map(|line| (player, line))
    })
}
