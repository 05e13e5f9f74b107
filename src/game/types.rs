//! Type definitions for chess game logic
//!
//! Plain value types shared by the rules boundary, the interaction state
//! machine and the presentation layer. Nothing here knows about the rules
//! library; conversions to and from `shakmaty` live in
//! [`crate::game::rules::shakmaty_rules`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::GameError;

/// Side color of a piece or player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other side
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }

    /// Rank index (0-7) a pawn of this color promotes on
    pub fn promotion_rank(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of chess piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Upper-case letter used in notation and on classic piece tiles
    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

/// A colored piece standing on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: PieceColor,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: PieceColor) -> Self {
        Self { piece_type, color }
    }

    /// FEN-style symbol: upper case for White, lower case for Black
    pub fn symbol(self) -> char {
        match self.color {
            PieceColor::White => self.piece_type.letter(),
            PieceColor::Black => self.piece_type.letter().to_ascii_lowercase(),
        }
    }
}

/// A square on the board, file and rank both 0-based (a1 = 0,0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSquare {
    file: u8,
    rank: u8,
}

impl BoardSquare {
    /// Create a square from file (0-7, a-h) and rank (0-7, 1-8)
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Create a square from its 0-63 index (a1 = 0, h8 = 63)
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self {
                file: index % 8,
                rank: index / 8,
            })
        } else {
            None
        }
    }

    pub const fn file(self) -> u8 {
        self.file
    }

    pub const fn rank(self) -> u8 {
        self.rank
    }

    pub const fn index(self) -> u8 {
        self.rank * 8 + self.file
    }

    /// All 64 squares, a1 first
    pub fn all() -> impl Iterator<Item = BoardSquare> {
        (0..64u8).filter_map(BoardSquare::from_index)
    }
}

impl fmt::Display for BoardSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file) as char;
        let rank = (b'1' + self.rank) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for BoardSquare {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidSquare(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        BoardSquare::new(file, rank).ok_or_else(invalid)
    }
}

/// Pieces a pawn may promote to, in promotion-menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    /// Menu order, top to bottom
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    pub fn piece_type(self) -> PieceType {
        match self {
            PromotionPiece::Queen => PieceType::Queen,
            PromotionPiece::Rook => PieceType::Rook,
            PromotionPiece::Bishop => PieceType::Bishop,
            PromotionPiece::Knight => PieceType::Knight,
        }
    }

    pub fn from_piece_type(piece_type: PieceType) -> Option<Self> {
        match piece_type {
            PieceType::Queen => Some(PromotionPiece::Queen),
            PieceType::Rook => Some(PromotionPiece::Rook),
            PieceType::Bishop => Some(PromotionPiece::Bishop),
            PieceType::Knight => Some(PromotionPiece::Knight),
            PieceType::Pawn | PieceType::King => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PromotionPiece::Queen => "Queen",
            PromotionPiece::Rook => "Rook",
            PromotionPiece::Bishop => "Bishop",
            PromotionPiece::Knight => "Knight",
        }
    }
}

/// A move in origin/destination form
///
/// Castling is expressed as the king's two-square step (e1g1), matching
/// what a player clicks on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: BoardSquare,
    pub to: BoardSquare,
    pub promotion: Option<PromotionPiece>,
}

impl ChessMove {
    pub fn new(from: BoardSquare, to: BoardSquare) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(from: BoardSquare, to: BoardSquare, promotion: PromotionPiece) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for ChessMove {
    /// UCI form, e.g. `e2e4` or `e7e8q`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            let letter = promotion.piece_type().letter().to_ascii_lowercase();
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Who controls the side currently entitled to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnOwner {
    Human,
    Automated,
}

impl TurnOwner {
    pub fn toggled(self) -> Self {
        match self {
            TurnOwner::Human => TurnOwner::Automated,
            TurnOwner::Automated => TurnOwner::Human,
        }
    }
}

/// Why a finished game is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    /// 150 half-moves without a capture or pawn move
    SeventyFiveMoveRule,
    /// The same position occurred for the fifth time
    FivefoldRepetition,
}

impl DrawReason {
    pub fn description(self) -> &'static str {
        match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::SeventyFiveMoveRule => "seventy-five-move rule",
            DrawReason::FivefoldRepetition => "fivefold repetition",
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: PieceColor },
    Draw(DrawReason),
}

impl GameOutcome {
    pub fn winner(self) -> Option<PieceColor> {
        match self {
            GameOutcome::Checkmate { winner } => Some(winner),
            GameOutcome::Draw(_) => None,
        }
    }

    /// Banner text shown when the game ends
    pub fn message(self) -> String {
        match self {
            GameOutcome::Checkmate { winner } => format!("Checkmate! {winner} wins!"),
            GameOutcome::Draw(_) => "Game Over! It's a draw!".to_string(),
        }
    }
}
