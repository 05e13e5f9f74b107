//! Keyboard shortcuts during a game

use super::InputEvent;
use crate::core::GameState;
use crate::game::system_sets::GameSystems;
use crate::game::systems::process_input_events;
use bevy::prelude::*;

/// Maps Escape to [`InputEvent::Quit`]
///
/// Kept out of [`crate::game::GamePlugin`] so headless apps without
/// `ButtonInput<KeyCode>` can still run the game systems.
pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<InputEvent>().add_systems(
            Update,
            quit_on_escape
                .in_set(GameSystems::Input)
                .before(process_input_events)
                .run_if(in_state(GameState::InGame)),
        );
    }
}

fn quit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut input: MessageWriter<InputEvent>) {
    if keys.just_pressed(KeyCode::Escape) {
        debug!("[INPUT] Escape pressed");
        input.write(InputEvent::Quit);
    }
}
