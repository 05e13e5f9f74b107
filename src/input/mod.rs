//! Input module - board-level input events
//!
//! Raw window input is reduced to three discrete [`InputEvent`]s before it
//! reaches the game:
//!
//! - pointer clicks in board-local coordinates (from the egui board view)
//! - a promotion cancel signal (secondary click on the board)
//! - a quit signal (Escape)
//!
//! # Architecture
//!
//! - `pointer` - [`BoardGeometry`], the pixel/square mapping shared by drawing
//!   and hit testing
//! - `keyboard` - [`KeyboardInputPlugin`], Escape to [`InputEvent::Quit`]
//!
//! Events travel as bevy messages and are drained in order by
//! [`crate::game::systems::process_input_events`].

pub mod keyboard;
pub mod pointer;

pub use keyboard::*;
pub use pointer::*;

use bevy::ecs::message::Message;

/// One discrete input for the interaction state machine
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary click at board-local pixel coordinates
    PointerDown { x: f32, y: f32 },
    /// Abandon a pending promotion choice
    CancelPromotion,
    /// Leave the current game
    Quit,
}
