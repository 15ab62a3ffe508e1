//! Rolling tic-tac-toe game logic.
//!
//! Three rule variants share one engine:
//!
//! - **Classic**: marks stay until restart; a full board with no line is a draw.
//! - **Rolling**: each player keeps only their three most recent marks on a
//!   grid; a fourth placement evicts the oldest.
//! - **Rolling history**: the same rule, with occupancy read straight from
//!   the move history instead of a grid.
//!
//! # Architecture
//!
//! - **Board state** ([`BoardState`]): occupancy, placement, reset per variant
//! - **Move history** ([`MoveHistory`]): per-player bounded FIFO windows
//! - **Rules** ([`rules`]): the 8 winning lines and how they are matched
//! - **Game** ([`Game`]): turn state machine producing [`Scene`]s for rendering
//!
//! # Example
//!
//! ```
//! use rolling_tictactoe::{Game, Position, Variant};
//!
//! let mut game = Game::new(Variant::Rolling);
//! for pos in [Position::TopLeft, Position::Center, Position::BottomRight, Position::TopRight] {
//!     game.play(pos)?;
//! }
//! assert!(game.is_occupied(Position::TopLeft));
//! # Ok::<(), rolling_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod command;
mod game;
mod geometry;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod scene;
mod types;
mod variant;

pub use action::{Move, MoveError, Transition};
pub use board::{AnyBoard, BoardState, ClassicBoard, HistoryBoard, RollingBoard};
pub use command::Command;
pub use game::{Game, Outcome, Phase};
pub use geometry::BoardGeometry;
pub use history::{MoveHistory, RollingWindow};
pub use position::Position;
pub use rules::WinningLine;
pub use scene::{CellView, Scene};
pub use types::{Board, Player, Square};
pub use variant::{Variant, WINDOW};
