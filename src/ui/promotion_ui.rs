//! Pawn promotion menu
//!
//! Drawn over the board as a one-square-wide column of Queen, Rook, Bishop
//! and Knight, placed by [`BoardGeometry::promotion_menu_origin`]. Clicks on
//! it are resolved by the session through the same geometry, so this module
//! only paints.

use crate::core::BoardTheme;
use crate::game::resources::PendingPromotion;
use crate::game::types::{Piece, PromotionPiece};
use crate::input::BoardGeometry;
use crate::ui::pieces::paint_piece;
use crate::ui::styles::BoardColors;
use bevy_egui::egui;

/// Paint the choice column for `pending`; `origin` is the board's top-left
pub fn paint_promotion_menu(
    painter: &egui::Painter,
    origin: egui::Pos2,
    geometry: &BoardGeometry,
    pending: PendingPromotion,
    theme: BoardTheme,
) {
    let size = geometry.square_size;
    let (left, top) = geometry.promotion_menu_origin(pending.to);
    let column = egui::Rect::from_min_size(
        origin + egui::vec2(left, top),
        egui::vec2(size, size * PromotionPiece::ALL.len() as f32),
    );

    painter.rect_filled(column, 0.0, BoardColors::PROMOTION_MENU);
    painter.rect_stroke(
        column,
        0.0,
        egui::Stroke::new(2.0, BoardColors::PROMOTION_BORDER),
        egui::StrokeKind::Outside,
    );

    for (index, choice) in PromotionPiece::ALL.iter().enumerate() {
        let cell = egui::Rect::from_min_size(
            column.min + egui::vec2(0.0, size * index as f32),
            egui::vec2(size, size),
        );
        paint_piece(
            painter,
            cell,
            Piece::new(choice.piece_type(), pending.color),
            theme,
        );
    }
}
