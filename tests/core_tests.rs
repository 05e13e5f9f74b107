//! Integration tests for core state management
//!
//! Runs the state machine in a minimal Bevy app and checks that state-gated
//! systems only execute in their designated states.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use deskchess::core::settings_persistence::{load_settings_or_default, save_settings_to};
use deskchess::core::{BoardTheme, GameSettings, GameState, InGameplay};
use deskchess::game::types::PieceColor;

/// Counts system executions per state
#[derive(Resource, Default, Debug)]
struct SystemExecutionTracker {
    main_menu_executions: u32,
    in_game_executions: u32,
    in_gameplay_executions: u32,
}

fn track_main_menu_execution(mut tracker: ResMut<SystemExecutionTracker>) {
    tracker.main_menu_executions += 1;
}

fn track_in_game_execution(mut tracker: ResMut<SystemExecutionTracker>) {
    tracker.in_game_executions += 1;
}

fn track_in_gameplay_execution(mut tracker: ResMut<SystemExecutionTracker>) {
    tracker.in_gameplay_executions += 1;
}

fn state_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app.add_computed_state::<InGameplay>();
    app
}

fn set_state(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

fn current_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

#[test]
fn test_initial_state_is_main_menu() {
    let mut app = state_app();
    app.update();
    assert_eq!(current_state(&app), GameState::MainMenu);
}

#[test]
fn test_full_state_cycle() {
    let mut app = state_app();
    app.update();

    set_state(&mut app, GameState::InGame);
    assert_eq!(current_state(&app), GameState::InGame);

    set_state(&mut app, GameState::GameOver);
    assert_eq!(current_state(&app), GameState::GameOver);

    set_state(&mut app, GameState::MainMenu);
    assert_eq!(current_state(&app), GameState::MainMenu);
}

#[test]
fn test_systems_run_conditionally_based_on_state() {
    let mut app = state_app();
    app.init_resource::<SystemExecutionTracker>();
    app.add_systems(
        Update,
        (
            track_main_menu_execution.run_if(in_state(GameState::MainMenu)),
            track_in_game_execution.run_if(in_state(GameState::InGame)),
            track_in_gameplay_execution.run_if(in_state(InGameplay)),
        ),
    );

    app.update();
    {
        let tracker = app.world().resource::<SystemExecutionTracker>();
        assert_eq!(tracker.main_menu_executions, 1);
        assert_eq!(tracker.in_game_executions, 0);
        assert_eq!(tracker.in_gameplay_executions, 0);
    }

    set_state(&mut app, GameState::InGame);
    {
        let tracker = app.world().resource::<SystemExecutionTracker>();
        assert_eq!(tracker.main_menu_executions, 1);
        assert_eq!(tracker.in_game_executions, 1);
        assert_eq!(tracker.in_gameplay_executions, 1);
    }

    // The board stays visible under the game-over banner
    set_state(&mut app, GameState::GameOver);
    {
        let tracker = app.world().resource::<SystemExecutionTracker>();
        assert_eq!(tracker.in_game_executions, 1);
        assert_eq!(tracker.in_gameplay_executions, 2);
    }
}

#[test]
fn test_state_persistence_across_updates() {
    let mut app = state_app();
    set_state(&mut app, GameState::InGame);

    for _ in 0..50 {
        app.update();
        assert_eq!(current_state(&app), GameState::InGame);
    }
}

#[test]
fn test_settings_survive_a_restart() {
    let path = std::env::temp_dir()
        .join(format!("deskchess-core-tests-{}", std::process::id()))
        .join("settings.json");

    let settings = GameSettings {
        board_theme: BoardTheme::Modern,
        human_color: PieceColor::Black,
        show_hints: false,
    };
    save_settings_to(&path, &settings).unwrap();
    assert_eq!(load_settings_or_default(&path), settings);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_corrupt_settings_fall_back_to_defaults() {
    let dir = std::env::temp_dir().join(format!("deskchess-corrupt-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert_eq!(load_settings_or_default(&path), GameSettings::default());

    let _ = std::fs::remove_dir_all(&dir);
}
