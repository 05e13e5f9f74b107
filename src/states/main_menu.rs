//! Startup menu
//!
//! "Chess Game" title with New Game, theme and side buttons and Quit. Theme
//! and side choices are written to [`GameSettings`], which persists them.

use crate::core::{BoardTheme, GameSettings, GameState};
use crate::game::types::PieceColor;
use crate::ui::styles::*;
use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

/// Plugin for the startup menu
pub struct MainMenuPlugin;

impl Plugin for MainMenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::MainMenu), log_menu_entry)
            .add_systems(
                EguiPrimaryContextPass,
                main_menu_ui_wrapper
                    .run_if(in_state(GameState::MainMenu))
                    .run_if(resource_exists::<GameSettings>),
            );
    }
}

fn log_menu_entry() {
    info!("[MENU] Main menu");
}

/// What a menu button asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    NewGame,
    Theme(BoardTheme),
    PlayAs(PieceColor),
    Quit,
}

/// Wrapper for main_menu_ui that handles Result
fn main_menu_ui_wrapper(
    contexts: EguiContexts,
    next_state: ResMut<NextState<GameState>>,
    settings: ResMut<GameSettings>,
    exit: MessageWriter<AppExit>,
) {
    if let Err(e) = main_menu_ui(contexts, next_state, settings, exit) {
        debug!("[MENU] No egui context: {:?}", e);
    }
}

fn main_menu_ui(
    mut contexts: EguiContexts,
    mut next_state: ResMut<NextState<GameState>>,
    mut settings: ResMut<GameSettings>,
    mut exit: MessageWriter<AppExit>,
) -> Result<(), QuerySingleError> {
    let ctx = contexts.ctx_mut()?;
    let mut action = None;

    egui::CentralPanel::default()
        .frame(StyledPanel::main())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                Layout::section_space(ui);
                ui.label(TextStyle::heading("Chess Game", TextSize::XL));
                Layout::section_space(ui);

                if StyledButton::menu(ui, "New Game", false).clicked() {
                    action = Some(MenuAction::NewGame);
                }
                Layout::item_space(ui);

                for theme in [BoardTheme::Classic, BoardTheme::Modern] {
                    let label = format!("{} Theme", theme.name());
                    if StyledButton::menu(ui, label, settings.board_theme == theme).clicked() {
                        action = Some(MenuAction::Theme(theme));
                    }
                    Layout::small_space(ui);
                }
                Layout::small_space(ui);

                for color in [PieceColor::White, PieceColor::Black] {
                    let label = format!("Play as {color}");
                    if StyledButton::menu(ui, label, settings.human_color == color).clicked() {
                        action = Some(MenuAction::PlayAs(color));
                    }
                    Layout::small_space(ui);
                }
                Layout::item_space(ui);

                if StyledButton::danger(ui, "Quit").clicked() {
                    action = Some(MenuAction::Quit);
                }

                Layout::section_space(ui);
                ui.label(TextStyle::accent(format!(
                    "Selected Theme: {}",
                    settings.board_theme.name()
                )));
                ui.label(TextStyle::caption(format!(
                    "You play {}",
                    settings.human_color
                )));
            });
        });

    match action {
        Some(MenuAction::NewGame) => {
            info!("[MENU] New game");
            next_state.set(GameState::InGame);
        }
        Some(MenuAction::Theme(theme)) => {
            let mut updated = settings.clone();
            updated.board_theme = theme;
            if settings.set_if_neq(updated) {
                info!("[MENU] Theme set to {}", theme.name());
            }
        }
        Some(MenuAction::PlayAs(color)) => {
            let mut updated = settings.clone();
            updated.human_color = color;
            if settings.set_if_neq(updated) {
                info!("[MENU] Human plays {}", color);
            }
        }
        Some(MenuAction::Quit) => {
            info!("[MENU] Quit");
            exit.write(AppExit::Success);
        }
        None => {}
    }

    Ok(())
}
