//! Window configuration resource

use crate::input::DEFAULT_SQUARE_SIZE;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

/// Configuration for the primary application window
///
/// The default size fits the 8×90 px board plus the side panel.
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct WindowConfig {
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    pub resizable: bool,
    /// Board square size in logical pixels, copied into
    /// [`crate::input::BoardGeometry`] when a game starts
    pub square_size: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Chess Game".to_string(),
            width: 1100,
            height: 750,
            resizable: true,
            square_size: DEFAULT_SQUARE_SIZE,
        }
    }
}

impl WindowConfig {
    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
