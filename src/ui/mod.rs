//! UI module - Egui-based board and panels
//!
//! - **board_view**: Board, pieces, highlights; turns clicks into input events
//! - **promotion_ui**: Promotion choice column painted over the board
//! - **game_ui**: Side panel with status, move history and captures
//! - **pieces**: Classic tiles and Modern glyphs
//! - **styles**: Shared colors, typography and components
//!
//! The menu and game-over screens live in [`crate::states`].

pub mod board_view;
pub mod game_ui;
pub mod pieces;
pub mod promotion_ui;
pub mod styles;

use crate::core::InGameplay;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// In-game UI
///
/// Requires `bevy_egui::EguiPlugin`; the side panel is laid out before the
/// central board panel.
pub struct GameUiPlugin;

impl Plugin for GameUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ui_camera).add_systems(
            EguiPrimaryContextPass,
            (
                game_ui::game_side_panel_wrapper,
                board_view::board_view_ui_wrapper,
            )
                .chain()
                .run_if(in_state(InGameplay)),
        );
    }
}

/// Camera that egui renders through
fn setup_ui_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
