//! Chess rules boundary - legality, termination and notation
//!
//! The game never implements chess rules itself. Everything rules-related goes
//! through the [`RulesEngine`] trait, so the interaction state machine only
//! ever asks questions ("which moves are legal here?", "is this position
//! over?") and never answers them.
//!
//! # Module Structure
//!
//! - [`RulesEngine`] - the contract consumed by [`crate::game::session`]
//! - [`shakmaty_rules`] - the production implementation over `shakmaty::Chess` with repetition counts
//!
//! Default methods derive the composite queries (destinations for one square,
//! the final outcome) from the primitive ones, so an implementation only has
//! to supply the primitives.

pub mod shakmaty_rules;

pub use shakmaty_rules::{ShakmatyRules, TrackedPosition};

use super::error::GameResult;
use super::types::{BoardSquare, ChessMove, DrawReason, GameOutcome, Piece, PieceColor};
use std::fmt::Debug;

/// Contract for an external chess-rules provider
///
/// `Position` is opaque to the caller: the session holds one and hands it back
/// for every query. Promotions appear in [`RulesEngine::legal_moves`] once per
/// promotion piece, castling as the king's two-square step.
pub trait RulesEngine: Send + Sync + 'static {
    type Position: Clone + Debug + Send + Sync + 'static;

    /// Standard initial position, White to move
    fn starting_position(&self) -> Self::Position;

    /// Parse a FEN string into a position
    fn position_from_fen(&self, fen: &str) -> GameResult<Self::Position>;

    /// Every legal move for the side to move
    fn legal_moves(&self, position: &Self::Position) -> Vec<ChessMove>;

    /// Apply a legal move in place; illegal moves leave the position untouched
    fn apply(&self, position: &mut Self::Position, chess_move: ChessMove) -> GameResult<()>;

    fn piece_at(&self, position: &Self::Position, square: BoardSquare) -> Option<Piece>;

    fn side_to_move(&self, position: &Self::Position) -> PieceColor;

    fn is_checkmate(&self, position: &Self::Position) -> bool;

    /// Why the position is a finished draw, if it is one
    fn draw_reason(&self, position: &Self::Position) -> Option<DrawReason>;

    /// Standard algebraic notation for a legal move, with `+`/`#` suffix
    fn to_notation(&self, position: &Self::Position, chess_move: ChessMove) -> GameResult<String>;

    /// Piece removed from the board by this move, if any
    fn captured_piece(&self, position: &Self::Position, chess_move: ChessMove) -> Option<Piece> {
        self.piece_at(position, chess_move.to)
    }

    fn is_legal(&self, position: &Self::Position, chess_move: ChessMove) -> bool {
        self.legal_moves(position).contains(&chess_move)
    }

    fn is_game_over(&self, position: &Self::Position) -> bool {
        self.is_checkmate(position) || self.draw_reason(position).is_some()
    }

    /// Final result, `None` while the game is still running
    ///
    /// On checkmate the side to move has lost.
    fn outcome(&self, position: &Self::Position) -> Option<GameOutcome> {
        if self.is_checkmate(position) {
            return Some(GameOutcome::Checkmate {
                winner: self.side_to_move(position).opposite(),
            });
        }
        self.draw_reason(position).map(GameOutcome::Draw)
    }

    /// Distinct destination squares of the legal moves starting on `from`
    fn legal_destinations(&self, position: &Self::Position, from: BoardSquare) -> Vec<BoardSquare> {
        let mut destinations: Vec<BoardSquare> = self
            .legal_moves(position)
            .into_iter()
            .filter(|m| m.from == from)
            .map(|m| m.to)
            .collect();
        destinations.sort();
        destinations.dedup();
        destinations
    }
}
