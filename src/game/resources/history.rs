//! Move history tracking
//!
//! Append-only record of every move applied in the current game, in the order
//! applied. The side panel renders the tail of it and the headless runner
//! prints all of it.
//!
//! # Turn numbering
//!
//! Index 0 and 1 are turn 1 (White's move and Black's reply), index 2 and 3
//! are turn 2, and so on. A game set up from a FEN with Black to move still
//! numbers its first record as turn 1.

use crate::game::types::{ChessMove, Piece, PieceColor, TurnOwner};

/// One applied move as shown to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Full-move number, `records_before / 2 + 1`
    pub turn: usize,
    /// Color that made the move
    pub player: PieceColor,
    /// SAN with check/mate suffix, e.g. `Nf3`, `exd8=Q#`
    pub notation: String,
    /// Piece removed from the board, if any
    pub captured: Option<Piece>,
    pub chess_move: ChessMove,
    /// Whether the human or the automated side played it
    pub owner: TurnOwner,
}

impl MoveRecord {
    /// Side panel line, e.g. `1. White: e4`
    pub fn display_line(&self) -> String {
        format!("{}. {}: {}", self.turn, self.player, self.notation)
    }
}

/// Chronological list of applied moves
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Turn number the next record will carry
    pub fn next_turn(&self) -> usize {
        self.moves.len() / 2 + 1
    }

    /// Build and append a record, returning a copy of it
    pub fn record(
        &mut self,
        player: PieceColor,
        notation: String,
        captured: Option<Piece>,
        chess_move: ChessMove,
        owner: TurnOwner,
    ) -> MoveRecord {
        let record = MoveRecord {
            turn: self.next_turn(),
            player,
            notation,
            captured,
            chess_move,
            owner,
        };
        self.moves.push(record.clone());
        record
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// The last `count` records, oldest first
    pub fn recent(&self, count: usize) -> &[MoveRecord] {
        let start = self.moves.len().saturating_sub(count);
        &self.moves[start..]
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
