//! UI styling system
//!
//! Centralized colors, typography and component styles shared by the menu,
//! the board view and the side panel.

pub mod colors;
pub mod components;
pub mod typography;

pub use colors::*;
pub use components::*;
pub use typography::*;
