use anyhow::bail;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use deskchess::cli::Cli;
use deskchess::core::{CorePlugin, WindowConfig};
use deskchess::game::GamePlugin;
use deskchess::headless;
use deskchess::input::KeyboardInputPlugin;
use deskchess::states::{GameOverPlugin, MainMenuPlugin};
use deskchess::ui::GameUiPlugin;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.headless {
        headless::init_logging(&cli.log_filter);
        headless::run_headless(&cli)?;
        return Ok(());
    }

    let window_config = WindowConfig::default();

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window_config.to_window()),
                    ..default()
                })
                .set(LogPlugin {
                    filter: cli.log_filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .insert_resource(window_config)
        .insert_resource(cli.settings_overrides())
        .insert_resource(cli.launch_options())
        .add_plugins((
            CorePlugin,
            GamePlugin,
            KeyboardInputPlugin,
            GameUiPlugin,
            MainMenuPlugin,
            GameOverPlugin,
        ))
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("application exited with error code {}", code),
    }
}
