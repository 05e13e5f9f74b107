//! Command line interface

use crate::core::{BoardTheme, SettingsOverrides};
use crate::game::resources::LaunchOptions;
use crate::game::types::PieceColor;
use clap::{Parser, ValueEnum};

/// Log filter used when none is given
pub const DEFAULT_LOG_FILTER: &str = "info,wgpu=error,naga=warn";

#[derive(Parser, Debug, Clone)]
#[command(name = "deskchess", version, about = "Play chess against a random-move opponent")]
pub struct Cli {
    /// Side you play (overrides the saved setting)
    #[arg(long, value_enum)]
    pub play_as: Option<Side>,

    /// Piece style (overrides the saved setting)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Start every game from this FEN position
    #[arg(long)]
    pub fen: Option<String>,

    /// Seed the opponent's move choice for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play random moves for both sides without a window and print the game
    #[arg(long)]
    pub headless: bool,

    /// Ply limit for headless games
    #[arg(long, default_value_t = 500)]
    pub max_plies: usize,

    /// tracing filter directive, e.g. "debug" or "info,deskchess=trace"
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    White,
    Black,
}

impl From<Side> for PieceColor {
    fn from(side: Side) -> Self {
        match side {
            Side::White => PieceColor::White,
            Side::Black => PieceColor::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Classic,
    Modern,
}

impl From<Theme> for BoardTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Classic => BoardTheme::Classic,
            Theme::Modern => BoardTheme::Modern,
        }
    }
}

impl Cli {
    pub fn settings_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            board_theme: self.theme.map(BoardTheme::from),
            human_color: self.play_as.map(PieceColor::from),
        }
    }

    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            fen: self.fen.clone(),
            seed: self.seed,
        }
    }
}
