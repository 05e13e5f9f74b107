//! Pawn promotion awaiting the player's piece choice
//!
//! When a human pawn move reaches the last rank the move is held here instead
//! of being applied. The UI draws the choice column and the session applies
//! the move once a piece is picked.

use crate::game::types::{BoardSquare, ChessMove, PieceColor, PieceType, PromotionPiece};

/// A promotion move missing only its piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: BoardSquare,
    pub to: BoardSquare,
    /// Color of the promoting side
    pub color: PieceColor,
}

impl PendingPromotion {
    pub fn new(from: BoardSquare, to: BoardSquare, color: PieceColor) -> Self {
        Self { from, to, color }
    }

    /// Complete the move with the chosen piece
    pub fn to_move(self, piece: PromotionPiece) -> ChessMove {
        ChessMove::with_promotion(self.from, self.to, piece)
    }
}

/// Check if a move of `piece_type` by `color` to `target` is a promotion
pub fn is_promotion_move(piece_type: PieceType, color: PieceColor, target: BoardSquare) -> bool {
    piece_type == PieceType::Pawn && target.rank() == color.promotion_rank()
}
