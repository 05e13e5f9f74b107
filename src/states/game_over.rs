//! Game over banner
//!
//! Shows "Checkmate! {winner} wins!" or "Game Over! It's a draw!" over the
//! final position for five seconds, or until any key or mouse button is
//! pressed, then returns to the main menu.

use crate::core::GameState;
use crate::game::resources::ActiveGame;
use crate::ui::styles::*;
use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

/// How long the banner stays up without input
pub const GAME_OVER_DISPLAY_SECS: f32 = 5.0;

/// Plugin for the game over banner
pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::GameOver), start_game_over_timer)
            .add_systems(OnExit(GameState::GameOver), remove_game_over_timer)
            .add_systems(
                Update,
                dismiss_game_over.run_if(in_state(GameState::GameOver)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                game_over_ui_wrapper.run_if(in_state(GameState::GameOver)),
            );
    }
}

/// Countdown until the banner closes itself
#[derive(Resource, Debug)]
pub struct GameOverTimer(pub Timer);

impl Default for GameOverTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(GAME_OVER_DISPLAY_SECS, TimerMode::Once))
    }
}

fn start_game_over_timer(mut commands: Commands) {
    commands.insert_resource(GameOverTimer::default());
}

fn remove_game_over_timer(mut commands: Commands) {
    commands.remove_resource::<GameOverTimer>();
}

/// Return to the menu on timeout or on any key or mouse press
pub fn dismiss_game_over(
    time: Res<Time>,
    timer: Option<ResMut<GameOverTimer>>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(mut timer) = timer else {
        return;
    };
    timer.0.tick(time.delta());

    let key_pressed = keys.is_some_and(|k| k.get_just_pressed().next().is_some());
    let clicked = mouse.is_some_and(|m| m.get_just_pressed().next().is_some());

    if timer.0.is_finished() || key_pressed || clicked {
        info!("[GAME_OVER] Returning to main menu");
        next_state.set(GameState::MainMenu);
    }
}

/// Wrapper for game_over_ui that handles Result
fn game_over_ui_wrapper(contexts: EguiContexts, game: Option<Res<ActiveGame>>) {
    if let Err(e) = game_over_ui(contexts, game) {
        debug!("[GAME_OVER] No egui context: {:?}", e);
    }
}

fn game_over_ui(
    mut contexts: EguiContexts,
    game: Option<Res<ActiveGame>>,
) -> Result<(), QuerySingleError> {
    let ctx = contexts.ctx_mut()?;
    let Some(outcome) = game.and_then(|g| g.outcome()) else {
        return Ok(());
    };

    egui::Window::new("game_over_banner")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(StyledPanel::overlay())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(TextStyle::heading(outcome.message(), TextSize::MD));
                if let crate::game::types::GameOutcome::Draw(reason) = outcome {
                    Layout::small_space(ui);
                    ui.label(TextStyle::caption(format!("Draw by {}", reason.description())));
                }
            });
        });

    Ok(())
}
