//! Settings persistence system
//!
//! Saves and loads [`GameSettings`] to/from a JSON file so theme and side
//! choices survive restarts.
//!
//! # File Location
//!
//! `settings.json` in the platform config directory, e.g.
//! `~/.config/deskchess/settings.json` on Linux. Falls back to the working
//! directory when no config directory can be determined.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings
//! - Save failures are logged but don't interrupt gameplay

use super::error::CoreResult;
use crate::core::{GameSettings, SettingsOverrides};
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILENAME: &str = "settings.json";

/// Path of the settings file for this user
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "deskchess", "deskchess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`
pub fn load_settings_from(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write settings to `path`, creating parent directories as needed
pub fn save_settings_to(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Settings from `path`, or defaults when the file is missing or unreadable
pub fn load_settings_or_default(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }
    match load_settings_from(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

/// Load settings on startup and apply command line overrides
pub fn load_settings_system(mut commands: Commands, overrides: Option<Res<SettingsOverrides>>) {
    let mut settings = load_settings_or_default(&settings_path());
    if let Some(overrides) = overrides {
        settings.apply_overrides(&overrides);
    }
    info!(
        "[SETTINGS] Theme: {}, human plays {}",
        settings.board_theme.name(),
        settings.human_color
    );
    commands.insert_resource(settings);
}

/// Save settings when they change
///
/// The initial insertion is skipped so command line overrides are not
/// written back unless the player changes something in the menu.
pub fn save_settings_system(settings: Res<GameSettings>) {
    if !settings.is_changed() || settings.is_added() {
        return;
    }

    let path = settings_path();
    match save_settings_to(&path, &settings) {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", path),
        Err(e) => error!("[SETTINGS] Failed to save settings to {:?}: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardTheme;
    use crate::core::error::CoreError;
    use crate::game::types::PieceColor;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("deskchess-test-{}-{}", std::process::id(), name))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let settings = GameSettings {
            board_theme: BoardTheme::Modern,
            human_color: PieceColor::Black,
            show_hints: false,
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_path("missing");
        assert!(matches!(load_settings_from(&path), Err(CoreError::SettingsIo(_))));
        assert_eq!(load_settings_or_default(&path), GameSettings::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_settings_from(&path),
            Err(CoreError::SettingsSerialization(_))
        ));
        assert_eq!(load_settings_or_default(&path), GameSettings::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
