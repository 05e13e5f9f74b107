//! Piece drawing for the two board themes
//!
//! - Classic: a rounded tile with the piece letter, white tile with a black
//!   letter for White, grey tile with a white letter for Black
//! - Modern: the Unicode chess glyph

use crate::core::BoardTheme;
use crate::game::types::{Piece, PieceColor, PieceType};
use crate::ui::styles::BoardColors;
use bevy_egui::egui;

/// Unicode chess glyph for a piece
pub fn piece_glyph(piece: Piece) -> char {
    match (piece.color, piece.piece_type) {
        (PieceColor::White, PieceType::King) => '♔',
        (PieceColor::White, PieceType::Queen) => '♕',
        (PieceColor::White, PieceType::Rook) => '♖',
        (PieceColor::White, PieceType::Bishop) => '♗',
        (PieceColor::White, PieceType::Knight) => '♘',
        (PieceColor::White, PieceType::Pawn) => '♙',
        (PieceColor::Black, PieceType::King) => '♚',
        (PieceColor::Black, PieceType::Queen) => '♛',
        (PieceColor::Black, PieceType::Rook) => '♜',
        (PieceColor::Black, PieceType::Bishop) => '♝',
        (PieceColor::Black, PieceType::Knight) => '♞',
        (PieceColor::Black, PieceType::Pawn) => '♟',
    }
}

/// Paint `piece` filling the square `rect`
pub fn paint_piece(painter: &egui::Painter, rect: egui::Rect, piece: Piece, theme: BoardTheme) {
    match theme {
        BoardTheme::Classic => paint_tile(painter, rect, piece),
        BoardTheme::Modern => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                piece_glyph(piece),
                egui::FontId::proportional(rect.height() * 0.8),
                egui::Color32::BLACK,
            );
        }
    }
}

fn paint_tile(painter: &egui::Painter, rect: egui::Rect, piece: Piece) {
    let (fill, text) = match piece.color {
        PieceColor::White => (BoardColors::WHITE_TILE, BoardColors::WHITE_TILE_TEXT),
        PieceColor::Black => (BoardColors::BLACK_TILE, BoardColors::BLACK_TILE_TEXT),
    };
    let tile = rect.shrink(rect.width() * 0.12);
    painter.rect_filled(tile, egui::CornerRadius::same(8), fill);
    painter.rect_stroke(
        tile,
        egui::CornerRadius::same(8),
        egui::Stroke::new(1.0, egui::Color32::BLACK),
        egui::StrokeKind::Inside,
    );
    painter.text(
        tile.center(),
        egui::Align2::CENTER_CENTER,
        piece.piece_type.letter(),
        egui::FontId::proportional(rect.height() * 0.45),
        text,
    );
}
