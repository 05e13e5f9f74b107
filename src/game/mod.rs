//! Chess game logic module
//!
//! Pure game logic with a thin ECS shell around it. Rules come from
//! `shakmaty` through [`rules::RulesEngine`]; the interaction state machine in
//! [`session`] is plain Rust and is tested without an `App`.
//!
//! # Module Organization
//!
//! - `types` - Squares, pieces, moves, outcomes
//! - `error` - [`error::GameError`]
//! - `rules` - Rules engine boundary and its `shakmaty` implementation
//! - `ai` - Random move selection for the automated side
//! - `resources` - Selection, pending promotion, history, captures, ECS wrappers
//! - `session` - The interaction state machine
//! - `systems` / `system_sets` / `plugin` - Bevy wiring

pub mod ai;
pub mod error;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod session;
pub mod system_sets;
pub mod systems;
pub mod types;

pub use plugin::GamePlugin;
