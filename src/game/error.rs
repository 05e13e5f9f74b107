//! Error types for game module
//!
//! Covers failures at the rules-engine boundary and in move selection.
//! Illegal clicks are not errors: the interaction state machine absorbs them.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// FEN text could not be parsed or describes an impossible position
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    /// A move that is not legal in the current position reached the rules engine
    #[error("Illegal move: {0}")]
    IllegalMove(String),

    /// Move selection was asked to pick from an empty move list
    #[error("No legal moves available")]
    NoLegalMoves,

    /// Square text outside a1..h8
    #[error("Invalid square: {0}")]
    InvalidSquare(String),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
