//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state.
//! Rules are separated from board storage so each variant's board can
//! feed them its own notion of active cells.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{
    MatchMode, ScanOrder, WinningLine, check_win, check_win_combinations, check_winner,
    combinations,
};
