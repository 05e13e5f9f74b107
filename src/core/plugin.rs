//! Core plugin
//!
//! Provides fundamental application setup:
//! - Panic hook with crash reports under `logs/`
//! - Window configuration
//! - State management setup
//! - Settings load on startup, save on change
//!
//! # Plugin Order
//!
//! 1. [`bevy::DefaultPlugins`]
//! 2. [`CorePlugin`] - state, settings
//! 3. [`crate::game::GamePlugin`] - game logic
//! 4. UI and state plugins (board view, main menu, game over)

use bevy::prelude::*;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::panic;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use super::{
    settings_persistence::{load_settings_system, save_settings_system},
    states::validate_and_log_state_transitions,
    GameSettings, GameState, InGameplay, WindowConfig,
};

/// Last known state, readable from the panic hook outside the ECS
static PANIC_STATE_TRACKER: OnceLock<Mutex<Option<GameState>>> = OnceLock::new();

/// Core plugin for the application
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WindowConfig>()
            .register_type::<WindowConfig>();

        app.init_state::<GameState>()
            .add_computed_state::<InGameplay>();

        app.add_systems(Startup, load_settings_system);

        app.add_systems(
            Update,
            (
                validate_and_log_state_transitions,
                update_panic_state_tracker,
                save_settings_system.run_if(resource_exists::<GameSettings>),
            ),
        );
    }

    fn finish(&self, _app: &mut App) {
        // Installed after every plugin has built so no later hook replaces it
        setup_panic_hook();
    }
}

/// Print a crash report with the current [`GameState`] and write it to `logs/`
fn setup_panic_hook() {
    PANIC_STATE_TRACKER.get_or_init(|| Mutex::new(None));

    panic::set_hook(Box::new(|panic_info| {
        let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "<unknown>".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "<unknown>".to_string());

        let game_state = PANIC_STATE_TRACKER
            .get()
            .and_then(|tracker| tracker.lock().ok().and_then(|state| *state))
            .map(|state| format!("{:?}", state))
            .unwrap_or_else(|| "<unknown>".to_string());

        let backtrace = std::backtrace::Backtrace::capture();
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let panic_report = format!(
            "PANIC DETECTED [{}]\n\
            ============================================\n\
            Message: {}\n\
            Location: {}\n\
            GameState: {}\n\
            \n\
            Backtrace:\n\
            {}\n\
            ============================================\n",
            timestamp, panic_msg, location, game_state, backtrace
        );

        eprintln!("\n{}", panic_report);

        let logs_dir = Path::new("logs");
        if !logs_dir.exists() {
            let _ = fs::create_dir_all(logs_dir);
        }

        let log_file = logs_dir.join(format!("crash_{}.log", timestamp));
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_file)
        {
            let _ = writeln!(file, "{}", panic_report);
            eprintln!("[PANIC] Crash log written to: {:?}", log_file);
        }
    }));
}

fn update_panic_state_tracker(game_state: Option<Res<State<GameState>>>) {
    let Some(game_state) = game_state else {
        return;
    };
    if let Some(tracker) = PANIC_STATE_TRACKER.get() {
        if let Ok(mut state) = tracker.lock() {
            *state = Some(*game_state.get());
        }
    }
}
