//! ECS resources holding the running game
//!
//! The session itself is plain Rust; these wrappers hand it to bevy as a
//! single resource owned by the frame loop.

use crate::game::ai::RandomMoveSelector;
use crate::game::rules::ShakmatyRules;
use crate::game::session::GameSession;
use bevy::prelude::*;
use std::ops::{Deref, DerefMut};

/// Session type used by the desktop build
pub type DesktopSession = GameSession<ShakmatyRules, RandomMoveSelector>;

/// The game in progress
///
/// Inserted on entering [`crate::core::GameState::InGame`] and removed when
/// the player is back in the main menu.
#[derive(Resource, Debug)]
pub struct ActiveGame(pub DesktopSession);

impl Deref for ActiveGame {
    type Target = DesktopSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ActiveGame {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Per-launch options taken from the command line
///
/// Unlike [`crate::core::GameSettings`] these are not persisted.
#[derive(Resource, Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Start position for every new game, standard setup when `None`
    pub fen: Option<String>,
    /// Seed for the automated side, OS entropy when `None`
    pub seed: Option<u64>,
}
