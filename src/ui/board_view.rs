//! Board view
//!
//! Paints the board, pieces, selection highlight, destination dots and the
//! promotion menu with an egui painter, and turns clicks on it into
//! [`InputEvent`]s in board-local coordinates. Drawing and hit testing share
//! one [`BoardGeometry`], so the two cannot drift apart.
//!
//! Input is only forwarded in [`GameState::InGame`]; under the game-over
//! banner the board is drawn but inert.

use crate::core::{BoardTheme, GameSettings, GameState};
use crate::game::resources::{ActiveGame, DesktopSession};
use crate::game::types::BoardSquare;
use crate::input::{BoardGeometry, InputEvent};
use crate::ui::pieces::paint_piece;
use crate::ui::promotion_ui::paint_promotion_menu;
use crate::ui::styles::{BoardColors, UiColors};
use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// Wrapper for board_view_ui that handles Result
pub fn board_view_ui_wrapper(
    contexts: EguiContexts,
    game: Option<Res<ActiveGame>>,
    settings: Option<Res<GameSettings>>,
    geometry: Res<BoardGeometry>,
    state: Res<State<GameState>>,
    input: MessageWriter<InputEvent>,
) {
    if let Err(e) = board_view_ui(contexts, game, settings, geometry, state, input) {
        debug!("[BOARD] No egui context: {:?}", e);
    }
}

fn board_view_ui(
    mut contexts: EguiContexts,
    game: Option<Res<ActiveGame>>,
    settings: Option<Res<GameSettings>>,
    geometry: Res<BoardGeometry>,
    state: Res<State<GameState>>,
    mut input: MessageWriter<InputEvent>,
) -> Result<(), QuerySingleError> {
    let ctx = contexts.ctx_mut()?;
    let Some(game) = game else {
        return Ok(());
    };
    let (theme, show_hints) = settings
        .map(|s| (s.board_theme, s.show_hints))
        .unwrap_or((BoardTheme::Classic, true));
    let accepts_input = *state.get() == GameState::InGame;

    egui::CentralPanel::default()
        .frame(egui::Frame {
            fill: UiColors::BG_DARK,
            inner_margin: egui::Margin::same(15),
            ..Default::default()
        })
        .show(ctx, |ui| {
            let board_size = geometry.board_size();
            let (response, painter) =
                ui.allocate_painter(egui::vec2(board_size, board_size), egui::Sense::click());
            let origin = response.rect.min;

            paint_board(&painter, origin, &game, &geometry, theme, show_hints);
            if let Some(pending) = game.pending_promotion() {
                paint_promotion_menu(&painter, origin, &geometry, pending, theme);
            }

            if !accepts_input {
                return;
            }
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - origin;
                    input.write(InputEvent::PointerDown {
                        x: local.x,
                        y: local.y,
                    });
                }
            }
            if response.secondary_clicked() {
                input.write(InputEvent::CancelPromotion);
            }
        });

    Ok(())
}

fn paint_board(
    painter: &egui::Painter,
    origin: egui::Pos2,
    game: &DesktopSession,
    geometry: &BoardGeometry,
    theme: BoardTheme,
    show_hints: bool,
) {
    let size = geometry.square_size;
    let selected = game.selection().map(|s| s.square);

    for square in BoardSquare::all() {
        let rect = square_rect(origin, geometry, square);
        let (fill, outline) = square_paint(square, selected);
        painter.rect_filled(rect, 0.0, fill);
        if let Some(stroke) = outline {
            painter.rect_stroke(rect, 0.0, stroke, egui::StrokeKind::Inside);
        }
        if let Some(piece) = game.piece_at(square) {
            paint_piece(painter, rect, piece, theme);
        }
    }

    if show_hints {
        for destination in game.legal_destinations() {
            let rect = square_rect(origin, geometry, *destination);
            painter.circle_filled(
                rect.center(),
                BoardColors::DESTINATION_RADIUS.min(size / 2.0),
                BoardColors::DESTINATION,
            );
        }
    }
}

fn square_rect(origin: egui::Pos2, geometry: &BoardGeometry, square: BoardSquare) -> egui::Rect {
    let (x, y) = geometry.square_origin(square);
    egui::Rect::from_min_size(
        origin + egui::vec2(x, y),
        egui::vec2(geometry.square_size, geometry.square_size),
    )
}

/// Fill of a square, plus the outline when it holds the selected piece
fn square_paint(
    square: BoardSquare,
    selected: Option<BoardSquare>,
) -> (egui::Color32, Option<egui::Stroke>) {
    let fill = BoardColors::square(square.file(), square.rank());
    let outline = (selected == Some(square))
        .then(|| egui::Stroke::new(BoardColors::SELECTED_WIDTH, BoardColors::SELECTED));
    (fill, outline)
}
