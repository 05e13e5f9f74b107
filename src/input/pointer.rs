//! Board geometry - mapping pointer coordinates to squares and menu cells
//!
//! Coordinates are board-local pixels with the origin at the top-left corner
//! of the drawn board, x growing right and y growing down. The board view
//! reports clicks in these coordinates and draws with the same mapping, so a
//! square is hit exactly where it is painted.
//!
//! All bounds are half-open: a point on the shared edge of two squares belongs
//! to the right/lower one, and a point on the far edge of the board is off it.

use crate::game::types::{BoardSquare, PromotionPiece};
use bevy::prelude::*;

/// Pixel size of one square in the default window layout
pub const DEFAULT_SQUARE_SIZE: f32 = 90.0;

/// Square size and orientation of the drawn board
///
/// With `flipped` false White sits at the bottom (a1 bottom-left); with
/// `flipped` true Black does (h8 bottom-left).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub square_size: f32,
    pub flipped: bool,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
            flipped: false,
        }
    }
}

impl BoardGeometry {
    pub fn new(square_size: f32, flipped: bool) -> Self {
        Self {
            square_size,
            flipped,
        }
    }

    /// Width and height of the whole board
    pub fn board_size(&self) -> f32 {
        self.square_size * 8.0
    }

    /// Screen cell (column, row) a square is drawn in, row 0 at the top
    pub fn cell_of(&self, square: BoardSquare) -> (u8, u8) {
        if self.flipped {
            (7 - square.file(), square.rank())
        } else {
            (square.file(), 7 - square.rank())
        }
    }

    /// Square drawn in screen cell (column, row)
    pub fn square_in_cell(&self, column: u8, row: u8) -> Option<BoardSquare> {
        if column > 7 || row > 7 {
            return None;
        }
        if self.flipped {
            BoardSquare::new(7 - column, row)
        } else {
            BoardSquare::new(column, 7 - row)
        }
    }

    /// Square under a board-local point, `None` off the board
    pub fn square_at(&self, x: f32, y: f32) -> Option<BoardSquare> {
        let (column, row) = self.cell_at(x, y)?;
        self.square_in_cell(column, row)
    }

    /// Top-left corner of a square
    pub fn square_origin(&self, square: BoardSquare) -> (f32, f32) {
        let (column, row) = self.cell_of(square);
        (
            f32::from(column) * self.square_size,
            f32::from(row) * self.square_size,
        )
    }

    /// Top-left corner of the promotion column for a pawn landing on `destination`
    ///
    /// The column starts at the destination's cell and is moved up just enough
    /// to keep all four choices on the board.
    pub fn promotion_menu_origin(&self, destination: BoardSquare) -> (f32, f32) {
        let (column, row) = self.cell_of(destination);
        let choices = PromotionPiece::ALL.len() as u8;
        let top_row = row.min(8 - choices);
        (
            f32::from(column) * self.square_size,
            f32::from(top_row) * self.square_size,
        )
    }

    /// Promotion piece whose menu cell contains the point, if any
    pub fn promotion_choice_at(
        &self,
        destination: BoardSquare,
        x: f32,
        y: f32,
    ) -> Option<PromotionPiece> {
        let (left, top) = self.promotion_menu_origin(destination);
        if !(x >= left && x < left + self.square_size && y >= top) {
            return None;
        }
        let index = ((y - top) / self.square_size).floor() as usize;
        PromotionPiece::ALL.get(index).copied()
    }

    fn cell_at(&self, x: f32, y: f32) -> Option<(u8, u8)> {
        if !(x >= 0.0 && y >= 0.0) || self.square_size <= 0.0 {
            return None;
        }
        let column = (x / self.square_size).floor();
        let row = (y / self.square_size).floor();
        if column >= 8.0 || row >= 8.0 {
            return None;
        }
        Some((column as u8, row as u8))
    }
}
