//! Mapping screen coordinates onto board cells.

use crate::Position;
use derive_new::new;
use tracing::instrument;

/// Where the board sits on screen and how big each cell is.
///
/// Units are whatever the front end uses (pixels, terminal cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct BoardGeometry {
    /// Left edge of the board.
    pub origin_x: u16,
    /// Top edge of the board.
    pub origin_y: u16,
    /// Width of one cell.
    pub cell_width: u16,
    /// Height of one cell.
    pub cell_height: u16,
}

impl BoardGeometry {
    /// The cell under `(x, y)`, by integer division of the offset from the
    /// origin. Points outside the 3x3 area yield `None`.
    #[instrument]
    pub fn position_at(&self, x: u16, y: u16) -> Option<Position> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return None;
        }
        let col = x.checked_sub(self.origin_x)? / self.cell_width;
        let row = y.checked_sub(self.origin_y)? / self.cell_height;
        Position::at(row as usize, col as usize)
    }

    /// Top-left corner of `pos`, clamped to the coordinate range.
    pub fn cell_origin(&self, pos: Position) -> (u16, u16) {
        (
            self.origin_x
                .saturating_add((pos.col() as u16).saturating_mul(self.cell_width)),
            self.origin_y
                .saturating_add((pos.row() as u16).saturating_mul(self.cell_height)),
        )
    }

    /// Total width of the board.
    pub fn width(&self) -> u16 {
        self.cell_width.saturating_mul(3)
    }

    /// Total height of the board.
    pub fn height(&self) -> u16 {
        self.cell_height.saturating_mul(3)
    }
}
