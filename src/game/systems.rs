//! ECS systems driving the session
//!
//! The systems are thin: they hand messages and ticks to
//! [`crate::game::session::GameSession`] and turn its answers into state
//! transitions. All game rules and bookkeeping stay in the session.

use super::ai::RandomMoveSelector;
use super::resources::{ActiveGame, DesktopSession, LaunchOptions};
use super::rules::ShakmatyRules;
use super::session::{GameSession, InteractionState, SessionEvent};
use super::types::PieceColor;
use crate::core::{GameSettings, GameState, WindowConfig};
use crate::input::{BoardGeometry, InputEvent};
use bevy::prelude::*;

/// Build a session for a new game
///
/// A FEN that fails to parse is logged and replaced by the standard start.
pub fn build_session(human_color: PieceColor, launch: &LaunchOptions) -> DesktopSession {
    let selector = || RandomMoveSelector::from_seed_option(launch.seed);
    if let Some(fen) = launch.fen.as_deref() {
        match GameSession::from_fen(ShakmatyRules::new(), selector(), fen, human_color) {
            Ok(session) => return session,
            Err(e) => error!("[GAME] {}. Starting from the initial position.", e),
        }
    }
    GameSession::new(ShakmatyRules::new(), selector(), human_color)
}

/// Create the session on entering [`GameState::InGame`]
///
/// The board geometry takes its square size from [`WindowConfig`] and is
/// flipped when the human plays Black.
pub fn start_new_game(
    mut commands: Commands,
    settings: Option<Res<GameSettings>>,
    launch: Option<Res<LaunchOptions>>,
    window: Option<Res<WindowConfig>>,
    mut geometry: ResMut<BoardGeometry>,
) {
    let human_color = settings
        .map(|s| s.human_color)
        .unwrap_or_default();
    let launch = launch.map(|l| l.clone()).unwrap_or_default();

    if let Some(window) = window {
        geometry.square_size = window.square_size;
    }
    geometry.flipped = human_color == PieceColor::Black;
    info!("[GAME] Starting new game, human plays {}", human_color);
    commands.insert_resource(ActiveGame(build_session(human_color, &launch)));
}

/// Drop the finished or abandoned game when back in the menu
pub fn clear_active_game(mut commands: Commands, game: Option<Res<ActiveGame>>) {
    if game.is_some() {
        debug!("[GAME] Clearing previous game");
        commands.remove_resource::<ActiveGame>();
    }
}

/// Feed input messages to the session in delivery order
pub fn process_input_events(
    mut input: MessageReader<InputEvent>,
    game: Option<ResMut<ActiveGame>>,
    geometry: Res<BoardGeometry>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(mut game) = game else {
        input.clear();
        return;
    };

    let mut quit = false;
    for event in input.read() {
        if quit {
            continue;
        }
        if let SessionEvent::QuitRequested = game.handle_input(*event, &geometry) {
            quit = true;
        }
    }

    if quit {
        info!("[GAME] Quit requested, returning to main menu");
        next_state.set(GameState::MainMenu);
    }
}

/// Play the automated side's move, at most one per frame
pub fn automated_turn_system(game: Option<ResMut<ActiveGame>>) {
    let Some(mut game) = game else {
        return;
    };
    if game.state() == InteractionState::AutomatedTurn {
        game.tick();
    }
}

/// Switch to [`GameState::GameOver`] once the session is terminal
pub fn detect_game_over(
    game: Option<Res<ActiveGame>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(outcome) = game.and_then(|g| g.outcome()) else {
        return;
    };
    info!("[GAME_OVER] {}", outcome.message());
    next_state.set(GameState::GameOver);
}
