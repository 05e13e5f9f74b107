//! [`RulesEngine`] implementation backed by `shakmaty`
//!
//! Translates between the crate's value types and `shakmaty`'s. All legality
//! questions are answered by looking the requested move up in
//! `Position::legal_moves`, so a move can only be applied if `shakmaty`
//! generated it.
//!
//! A bare `shakmaty::Chess` has no memory of earlier positions, so the engine
//! position is a [`TrackedPosition`] that also counts how often each position
//! has occurred since the last capture or pawn move.

use super::RulesEngine;
use crate::game::error::{GameError, GameResult};
use crate::game::types::{
    BoardSquare, ChessMove, DrawReason, Piece, PieceColor, PieceType, PromotionPiece,
};
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::zobrist::Zobrist64;
use shakmaty::{
    CastlingMode, Chess, Color, EnPassantMode, File, Move, Position, Role, Square,
};
use std::collections::HashMap;

/// Half-moves without capture or pawn move after which the game is drawn
const SEVENTY_FIVE_MOVE_HALFMOVES: u32 = 150;

/// Occurrences of one position after which the game is drawn
const FIVEFOLD_REPETITION: u32 = 5;

/// A `shakmaty` position plus its repetition counts
#[derive(Debug, Clone)]
pub struct TrackedPosition {
    chess: Chess,
    seen: HashMap<Zobrist64, u32>,
}

impl TrackedPosition {
    fn new(chess: Chess) -> Self {
        let mut position = Self {
            chess,
            seen: HashMap::new(),
        };
        position.record_current();
        position
    }

    /// How many times the current position has occurred
    pub fn repetitions(&self) -> u32 {
        self.seen.get(&self.key()).copied().unwrap_or(0)
    }

    fn key(&self) -> Zobrist64 {
        self.chess.zobrist_hash::<Zobrist64>(EnPassantMode::Legal)
    }

    fn record_current(&mut self) {
        // Nothing before a capture or pawn move can recur
        if self.chess.halfmoves() == 0 {
            self.seen.clear();
        }
        *self.seen.entry(self.key()).or_insert(0) += 1;
    }
}

/// Standard chess rules from `shakmaty`
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakmatyRules;

impl ShakmatyRules {
    pub fn new() -> Self {
        Self
    }

    /// Find the generated legal move matching an origin/destination request
    fn find_move(&self, position: &TrackedPosition, chess_move: ChessMove) -> Option<Move> {
        position
            .chess
            .legal_moves()
            .into_iter()
            .find(|m| to_chess_move(m) == Some(chess_move))
    }
}

impl RulesEngine for ShakmatyRules {
    type Position = TrackedPosition;

    fn starting_position(&self) -> TrackedPosition {
        TrackedPosition::new(Chess::default())
    }

    fn position_from_fen(&self, fen: &str) -> GameResult<TrackedPosition> {
        let parsed: Fen = fen
            .trim()
            .parse()
            .map_err(|e| GameError::InvalidFen(format!("{fen}: {e}")))?;
        parsed
            .into_position::<Chess>(CastlingMode::Standard)
            .map(TrackedPosition::new)
            .map_err(|e| GameError::InvalidFen(format!("{fen}: {e}")))
    }

    fn legal_moves(&self, position: &TrackedPosition) -> Vec<ChessMove> {
        position
            .chess
            .legal_moves()
            .iter()
            .filter_map(to_chess_move)
            .collect()
    }

    fn is_legal(&self, position: &TrackedPosition, chess_move: ChessMove) -> bool {
        self.find_move(position, chess_move).is_some()
    }

    fn apply(&self, position: &mut TrackedPosition, chess_move: ChessMove) -> GameResult<()> {
        let m = self
            .find_move(position, chess_move)
            .ok_or_else(|| GameError::IllegalMove(chess_move.to_string()))?;
        let next = position
            .chess
            .clone()
            .play(m)
            .map_err(|_| GameError::IllegalMove(chess_move.to_string()))?;
        position.chess = next;
        position.record_current();
        Ok(())
    }

    fn piece_at(&self, position: &TrackedPosition, square: BoardSquare) -> Option<Piece> {
        position
            .chess
            .board()
            .piece_at(to_shakmaty_square(square))
            .map(from_shakmaty_piece)
    }

    fn side_to_move(&self, position: &TrackedPosition) -> PieceColor {
        from_shakmaty_color(position.chess.turn())
    }

    fn is_checkmate(&self, position: &TrackedPosition) -> bool {
        position.chess.is_checkmate()
    }

    fn draw_reason(&self, position: &TrackedPosition) -> Option<DrawReason> {
        let chess = &position.chess;
        if chess.is_stalemate() {
            Some(DrawReason::Stalemate)
        } else if chess.is_insufficient_material() {
            Some(DrawReason::InsufficientMaterial)
        } else if chess.halfmoves() >= SEVENTY_FIVE_MOVE_HALFMOVES {
            Some(DrawReason::SeventyFiveMoveRule)
        } else if position.repetitions() >= FIVEFOLD_REPETITION {
            Some(DrawReason::FivefoldRepetition)
        } else {
            None
        }
    }

    fn to_notation(&self, position: &TrackedPosition, chess_move: ChessMove) -> GameResult<String> {
        let m = self
            .find_move(position, chess_move)
            .ok_or_else(|| GameError::IllegalMove(chess_move.to_string()))?;
        let mut notation = San::from_move(&position.chess, m.clone()).to_string();
        let after = position
            .chess
            .clone()
            .play(m)
            .map_err(|_| GameError::IllegalMove(chess_move.to_string()))?;
        if after.is_checkmate() {
            notation.push('#');
        } else if after.is_check() {
            notation.push('+');
        }
        Ok(notation)
    }

    fn captured_piece(&self, position: &TrackedPosition, chess_move: ChessMove) -> Option<Piece> {
        let m = self.find_move(position, chess_move)?;
        let role = m.capture()?;
        Some(Piece::new(
            from_shakmaty_role(role),
            from_shakmaty_color(position.chess.turn().other()),
        ))
    }
}

/// Convert a generated move to origin/destination form
///
/// Castling becomes the king's two-square step. Drop moves do not occur in
/// standard chess and map to `None`.
fn to_chess_move(m: &Move) -> Option<ChessMove> {
    match m {
        Move::Normal {
            from,
            to,
            promotion,
            ..
        } => Some(ChessMove {
            from: from_shakmaty_square(*from),
            to: from_shakmaty_square(*to),
            promotion: promotion
                .map(from_shakmaty_role)
                .and_then(PromotionPiece::from_piece_type),
        }),
        Move::EnPassant { from, to } => Some(ChessMove::new(
            from_shakmaty_square(*from),
            from_shakmaty_square(*to),
        )),
        Move::Castle { king, rook } => {
            let king_file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            let king_to = Square::from_coords(king_file, king.rank());
            Some(ChessMove::new(
                from_shakmaty_square(*king),
                from_shakmaty_square(king_to),
            ))
        }
        Move::Put { .. } => None,
    }
}

fn to_shakmaty_square(square: BoardSquare) -> Square {
    Square::new(u32::from(square.index()))
}

fn from_shakmaty_square(square: Square) -> BoardSquare {
    // Square discriminants are 0..64 with a1 = 0, same as BoardSquare::index
    BoardSquare::from_index(square as u8).unwrap_or_else(|| unreachable!("square index < 64"))
}

fn from_shakmaty_color(color: Color) -> PieceColor {
    match color {
        Color::White => PieceColor::White,
        Color::Black => PieceColor::Black,
    }
}

fn from_shakmaty_role(role: Role) -> PieceType {
    match role {
        Role::Pawn => PieceType::Pawn,
        Role::Knight => PieceType::Knight,
        Role::Bishop => PieceType::Bishop,
        Role::Rook => PieceType::Rook,
        Role::Queen => PieceType::Queen,
        Role::King => PieceType::King,
    }
}

fn from_shakmaty_piece(piece: shakmaty::Piece) -> Piece {
    Piece::new(from_shakmaty_role(piece.role), from_shakmaty_color(piece.color))
}
