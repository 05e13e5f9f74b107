//! Application states
//!
//! # State Flow
//!
//! ```text
//! [MainMenu] → [InGame] → [GameOver]
//!      ↑          │            │
//!      └──────────┴────────────┘
//! ```
//!
//! - **MainMenu**: startup menu, theme and side selection (starting state)
//! - **InGame**: a game in progress
//! - **GameOver**: final board with the result banner, returns to the menu
//!
//! [`InGameplay`] is computed from the two states in which a game exists, so
//! the board view keeps drawing underneath the game-over banner.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

/// Primary game state controlling major application modes
#[derive(Clone, Copy, Resource, PartialEq, Eq, Hash, Debug, Default, States, Reflect)]
pub enum GameState {
    /// Startup menu
    #[default]
    MainMenu,

    /// Active gameplay
    InGame,

    /// Result banner over the final position
    GameOver,
}

/// Computed state active while a game exists (InGame, GameOver)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct InGameplay;

impl ComputedStates for InGameplay {
    type SourceStates = GameState;

    fn compute(sources: GameState) -> Option<Self> {
        match sources {
            GameState::InGame | GameState::GameOver => Some(InGameplay),
            GameState::MainMenu => None,
        }
    }
}

fn is_valid_state_transition(from: GameState, to: GameState) -> bool {
    matches!(
        (from, to),
        (GameState::MainMenu, GameState::InGame)
            | (GameState::InGame, GameState::GameOver)
            | (GameState::InGame, GameState::MainMenu)
            | (GameState::GameOver, GameState::MainMenu)
    )
}

/// Log every state transition, flagging ones the flow above does not allow
pub fn validate_and_log_state_transitions(
    mut transition_events: MessageReader<StateTransitionEvent<GameState>>,
) {
    for event in transition_events.read() {
        match (event.exited, event.entered) {
            (Some(exited), Some(entered)) if exited == entered => {}
            (Some(exited), Some(entered)) => {
                if is_valid_state_transition(exited, entered) {
                    info!("[TRANSITION] {:?} -> {:?}", exited, entered);
                } else {
                    error!(
                        "[TRANSITION] INVALID: {:?} -> {:?} (state may be inconsistent)",
                        exited, entered
                    );
                }
            }
            (None, Some(entered)) => {
                debug!("[TRANSITION] Enter: {:?}", entered);
            }
            (Some(exited), None) => {
                debug!("[TRANSITION] Exit: {:?}", exited);
            }
            (None, None) => {}
        }
    }
}
