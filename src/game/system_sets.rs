//! System organization using SystemSets
//!
//! # Execution Order
//!
//! Systems run in this order each frame while [`crate::core::GameState::InGame`]:
//! 1. **Input** - Drain input messages into the session (clicks, cancel, quit)
//! 2. **Execution** - Play at most one automated move
//! 3. **Detection** - Leave the game when the session has become terminal
//!
//! A human move and the automated reply can therefore land in the same frame,
//! and a mate delivered by either side is noticed before the next frame's
//! input is processed.

use bevy::prelude::*;

/// System execution order for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Input handling (board clicks, keyboard)
    Input,

    /// Automated opponent
    Execution,

    /// Terminal-state detection and state transition
    Detection,
}
