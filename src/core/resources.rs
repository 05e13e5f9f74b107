//! Core resources for game-wide configuration
//!
//! [`GameSettings`] is the persisted user preference set; [`SettingsOverrides`]
//! carries command line choices that win over it for this launch.

use crate::game::types::PieceColor;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// User preferences, saved to disk whenever they change
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Piece rendering style
    pub board_theme: BoardTheme,

    /// Side the human plays
    pub human_color: PieceColor,

    /// Whether to show destination dots for the selected piece
    pub show_hints: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_theme: BoardTheme::Classic,
            human_color: PieceColor::White,
            show_hints: true,
        }
    }
}

impl GameSettings {
    /// Apply command line overrides in place
    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(theme) = overrides.board_theme {
            self.board_theme = theme;
        }
        if let Some(color) = overrides.human_color {
            self.human_color = color;
        }
    }
}

/// Board visual themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardTheme {
    /// Lettered tiles
    #[default]
    Classic,
    /// Unicode chess glyphs
    Modern,
}

impl BoardTheme {
    pub fn name(&self) -> &'static str {
        match self {
            BoardTheme::Classic => "Classic",
            BoardTheme::Modern => "Modern",
        }
    }
}

/// Launch-time settings that take precedence over the saved ones
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsOverrides {
    pub board_theme: Option<BoardTheme>,
    pub human_color: Option<PieceColor>,
}
