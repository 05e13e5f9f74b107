//! Chess game resources - state owned by the running game
//!
//! # Resource Categories
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected square and its legal destinations
//! - [`PendingPromotion`] - Pawn move waiting for the promotion piece
//!
//! ## Game History
//! - [`MoveHistory`] / [`MoveRecord`] - Applied moves with SAN notation
//! - [`CapturedPieces`] - Material tracking and advantage calculation
//!
//! ## ECS
//! - [`ActiveGame`] - The session as a bevy resource
//! - [`LaunchOptions`] - Command line start position and seed
//!
//! Selection, promotion, history and captures are owned by
//! [`crate::game::session::GameSession`]; systems and UI reach them through
//! [`ActiveGame`]:
//!
//! ```rust,ignore
//! fn my_system(game: Option<Res<ActiveGame>>) {
//!     let Some(game) = game else { return };
//!     if let Some(last) = game.history().last_move() {
//!         info!("Last move: {}", last.display_line());
//!     }
//! }
//! ```

pub mod active_game;
pub mod captured;
pub mod history;
pub mod promotion;
pub mod selection;

pub use active_game::*;
pub use captured::*;
pub use history::*;
pub use promotion::*;
pub use selection::*;
