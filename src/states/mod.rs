//! State-specific plugins
//!
//! - `main_menu` - MainMenuPlugin: startup menu
//! - `game_over` - GameOverPlugin: result banner and return to the menu
//!
//! The InGame state is handled by [`crate::game::GamePlugin`].

pub mod game_over;
pub mod main_menu;

pub use game_over::GameOverPlugin;
pub use main_menu::MainMenuPlugin;
