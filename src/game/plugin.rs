//! Game plugin - session lifecycle and per-frame game systems
//!
//! # Plugin Dependencies
//!
//! - [`crate::core::CorePlugin`] (or at least `init_state::<GameState>()`)
//!   must be added for the state-gated systems to run
//! - `GameSettings` and [`LaunchOptions`] are read if present and defaulted
//!   otherwise, so the plugin also runs under `MinimalPlugins`
//!
//! # System Organization
//!
//! - `OnEnter(InGame)` - build the session from settings and launch options
//! - `Update` - [`GameSystems::Input`] → [`GameSystems::Execution`] →
//!   [`GameSystems::Detection`], only while in game
//! - `OnEnter(MainMenu)` - drop the old session

use super::resources::LaunchOptions;
use super::system_sets::GameSystems;
use super::systems::*;
use crate::core::GameState;
use crate::input::{BoardGeometry, InputEvent};
use bevy::prelude::*;

/// Registers game resources, messages and systems
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<InputEvent>()
            .init_resource::<BoardGeometry>()
            .init_resource::<LaunchOptions>();

        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Detection,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(OnEnter(GameState::InGame), start_new_game)
            .add_systems(OnEnter(GameState::MainMenu), clear_active_game)
            .add_systems(
                Update,
                (
                    process_input_events.in_set(GameSystems::Input),
                    automated_turn_system.in_set(GameSystems::Execution),
                    detect_game_over.in_set(GameSystems::Detection),
                ),
            );
    }
}
