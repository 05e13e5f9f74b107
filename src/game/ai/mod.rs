//! Automated opponent
//!
//! The opponent is not an engine: it picks uniformly among the legal moves it
//! is handed. Selection sits behind [`MoveSelector`] so the interaction state
//! machine can be driven by a seeded selector in tests and by an entropy
//! seeded one in the desktop build.
//!
//! The selector never sees a position, only the move list the rules engine
//! produced, so it can never choose an illegal move.

pub mod random;

pub use random::RandomMoveSelector;

use crate::game::error::GameResult;
use crate::game::types::ChessMove;

/// Strategy for choosing the automated side's move
pub trait MoveSelector: Send + Sync + 'static {
    /// Choose one element of `legal_moves`
    ///
    /// Returns [`crate::game::error::GameError::NoLegalMoves`] for an empty slice.
    fn select(&mut self, legal_moves: &[ChessMove]) -> GameResult<ChessMove>;

    /// Short label for logs
    fn name(&self) -> &'static str;
}
