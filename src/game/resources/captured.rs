//! Captured pieces tracking
//!
//! Tracks pieces captured by each player. Entries are appended in the same
//! step as the move record of the capturing move, so the tally and the
//! history never disagree.

use crate::game::types::{Piece, PieceColor};

/// Pieces taken by each side, in capture order
///
/// - `white_captured`: Black pieces that White has captured
/// - `black_captured`: White pieces that Black has captured
#[derive(Debug, Clone, Default)]
pub struct CapturedPieces {
    pub white_captured: Vec<Piece>,
    pub black_captured: Vec<Piece>,
}

impl CapturedPieces {
    /// Credit a captured piece to the side that took it
    pub fn add_capture(&mut self, piece: Piece) {
        match piece.color {
            PieceColor::White => self.black_captured.push(piece),
            PieceColor::Black => self.white_captured.push(piece),
        }
    }

    /// Pieces captured by `color`
    pub fn captured_by(&self, color: PieceColor) -> &[Piece] {
        match color {
            PieceColor::White => &self.white_captured,
            PieceColor::Black => &self.black_captured,
        }
    }

    /// Symbols of the pieces captured by `color`, space separated
    ///
    /// White pieces print upper case, Black pieces lower case.
    pub fn symbols(&self, color: PieceColor) -> String {
        self.captured_by(color)
            .iter()
            .map(|p| p.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
