pub mod cli;
pub mod core;
pub mod game;
pub mod headless;
pub mod input;
pub mod states;
pub mod ui;
