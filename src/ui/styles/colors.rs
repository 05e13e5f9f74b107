//! Color palette
//!
//! Panel and text colors for menus and the side panel, plus the board
//! colors. Colors are defined as egui::Color32 for direct use in UI code.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    // === Background Colors ===

    /// Primary dark background (main panels)
    pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(20, 20, 25);

    /// Secondary background (nested panels)
    pub const BG_MID: egui::Color32 = egui::Color32::from_rgb(30, 30, 35);

    /// Tertiary background (buttons, cards)
    pub const BG_LIGHT: egui::Color32 = egui::Color32::from_rgb(40, 40, 45);

    /// Overlay background (semi-transparent)
    pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_black_alpha(220);

    // === Accent Colors ===

    /// Primary accent (gold - selected menu options)
    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);

    /// Error/danger color (red)
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    // === Text Colors ===

    /// Primary text (headings, important text)
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Secondary text (body text)
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(200, 200, 205);

    /// Tertiary text (less important, hints)
    pub const TEXT_TERTIARY: egui::Color32 = egui::Color32::from_rgb(150, 150, 155);

    /// Border color
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(60, 60, 65);
}

/// Board and piece colors
pub struct BoardColors;

impl BoardColors {
    pub const LIGHT_SQUARE: egui::Color32 = egui::Color32::from_rgb(240, 217, 181);
    pub const DARK_SQUARE: egui::Color32 = egui::Color32::from_rgb(181, 136, 99);

    /// Fill of the selected square
    pub const SELECTED: egui::Color32 = egui::Color32::from_rgb(186, 202, 43);
    pub const SELECTED_WIDTH: f32 = 5.0;

    /// Legal-destination dot
    pub const DESTINATION: egui::Color32 = egui::Color32::from_rgb(214, 214, 189);
    pub const DESTINATION_RADIUS: f32 = 15.0;

    /// Classic tiles: white pieces
    pub const WHITE_TILE: egui::Color32 = egui::Color32::WHITE;
    pub const WHITE_TILE_TEXT: egui::Color32 = egui::Color32::BLACK;

    /// Classic tiles: black pieces
    pub const BLACK_TILE: egui::Color32 = egui::Color32::from_rgb(128, 128, 128);
    pub const BLACK_TILE_TEXT: egui::Color32 = egui::Color32::WHITE;

    /// Promotion column background
    pub const PROMOTION_MENU: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
    pub const PROMOTION_BORDER: egui::Color32 = egui::Color32::from_rgb(60, 60, 65);

    /// Square color for (file + rank) parity, a1 is dark
    pub fn square(file: u8, rank: u8) -> egui::Color32 {
        if (file + rank) % 2 == 0 {
            Self::DARK_SQUARE
        } else {
            Self::LIGHT_SQUARE
        }
    }
}
