//! In-game side panel
//!
//! Shows whose turn it is, the last ten moves in `"{turn}. {player}: {move}"`
//! form and the pieces each side has captured. Everything is read from the
//! session each frame; the panel holds no state of its own.
//!
//! # Error Handling
//!
//! The UI function returns `Result<(), QuerySingleError>` so a missing egui
//! context (e.g. during state transitions) is logged by the wrapper instead
//! of panicking.

use crate::game::resources::{ActiveGame, DesktopSession};
use crate::game::session::InteractionState;
use crate::game::types::{PieceColor, TurnOwner};
use crate::ui::styles::*;
use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// Number of history lines shown in the panel
pub const VISIBLE_MOVES: usize = 10;

/// Wrapper for game_side_panel_ui that handles Result
pub fn game_side_panel_wrapper(contexts: EguiContexts, game: Option<Res<ActiveGame>>) {
    if let Err(e) = game_side_panel_ui(contexts, game) {
        debug!("[GAME_UI] No egui context: {:?}", e);
    }
}

fn game_side_panel_ui(
    mut contexts: EguiContexts,
    game: Option<Res<ActiveGame>>,
) -> Result<(), QuerySingleError> {
    let ctx = contexts.ctx_mut()?;
    let Some(game) = game else {
        return Ok(());
    };

    egui::SidePanel::right("game_side_panel")
        .resizable(false)
        .exact_width(320.0)
        .frame(StyledPanel::side())
        .show(ctx, |ui| {
            ui.label(TextStyle::heading(status_line(&game), TextSize::SM));
            Layout::item_space(ui);
            ui.separator();

            ui.label(TextStyle::heading("Move History", TextSize::SM));
            Layout::small_space(ui);
            for line in history_lines(&game) {
                ui.label(TextStyle::mono(line));
            }
            if game.history().is_empty() {
                ui.label(TextStyle::caption("No moves yet"));
            }

            Layout::item_space(ui);
            ui.separator();

            ui.label(TextStyle::body(format!(
                "White captured: {}",
                game.captured().symbols(PieceColor::White)
            )));
            ui.label(TextStyle::body(format!(
                "Black captured: {}",
                game.captured().symbols(PieceColor::Black)
            )));

            Layout::section_space(ui);
            ui.label(TextStyle::caption("Esc: back to menu"));
            ui.label(TextStyle::caption("Right click: cancel promotion"));
        });

    Ok(())
}

/// Last [`VISIBLE_MOVES`] history lines, oldest first
pub fn history_lines(game: &DesktopSession) -> Vec<String> {
    game.history()
        .recent(VISIBLE_MOVES)
        .iter()
        .map(|record| record.display_line())
        .collect()
}

/// Turn or result line at the top of the panel
pub fn status_line(game: &DesktopSession) -> String {
    if let Some(outcome) = game.outcome() {
        return outcome.message();
    }
    let side = game.side_to_move();
    match (game.state(), game.turn_owner()) {
        (InteractionState::AwaitingPromotionChoice, _) => "Choose a promotion piece".to_string(),
        (_, TurnOwner::Human) => format!("{side} to move (you)"),
        (_, TurnOwner::Automated) => format!("{side} to move (computer)"),
    }
}
