//! Core module - application state and configuration infrastructure
//!
//! # State Architecture
//!
//! - [`GameState`] - MainMenu → InGame → GameOver → MainMenu
//! - [`InGameplay`] - computed state active while a game exists
//!
//! # Core Plugin
//!
//! The [`CorePlugin`] sets up fundamental application infrastructure:
//! - Panic hook configuration for crash reporting
//! - Window configuration via [`WindowConfig`] resource
//! - State management
//! - Settings persistence
//!
//! # Resources
//!
//! - [`WindowConfig`] - Window settings
//! - [`GameSettings`] - User preferences (theme, side, hints)
//! - [`SettingsOverrides`] - Command line choices for this launch

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod states;
pub mod window_config;

pub use plugin::CorePlugin;
pub use resources::*;
pub use states::*;
pub use window_config::WindowConfig;
