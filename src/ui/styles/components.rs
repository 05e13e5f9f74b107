//! Styled UI component builders

use super::colors::UiColors;
use super::typography::{TextSize, TextStyle};
use bevy_egui::egui;

/// Helper functions for creating styled buttons
pub struct StyledButton;

impl StyledButton {
    /// Menu button, gold border when `selected`
    pub fn menu(ui: &mut egui::Ui, text: impl Into<String>, selected: bool) -> egui::Response {
        let border = if selected {
            UiColors::ACCENT_GOLD
        } else {
            UiColors::BORDER
        };
        let button = egui::Button::new(TextStyle::button(text, TextSize::SM))
            .fill(UiColors::BG_LIGHT)
            .stroke(egui::Stroke::new(if selected { 2.0 } else { 1.0 }, border))
            .min_size(egui::vec2(240.0, 44.0));

        ui.add(button)
    }

    /// Create a danger button (red, for destructive actions)
    pub fn danger(ui: &mut egui::Ui, text: impl Into<String>) -> egui::Response {
        let button = egui::Button::new(TextStyle::button(text, TextSize::SM))
            .fill(UiColors::DANGER)
            .stroke(egui::Stroke::NONE)
            .min_size(egui::vec2(240.0, 44.0));

        ui.add(button)
    }
}

/// Helper functions for creating styled panels
pub struct StyledPanel;

impl StyledPanel {
    /// Full-window background panel
    pub fn main() -> egui::Frame {
        egui::Frame {
            fill: UiColors::BG_DARK,
            inner_margin: egui::Margin::same(20),
            ..Default::default()
        }
    }

    /// Side panel beside the board
    pub fn side() -> egui::Frame {
        egui::Frame {
            fill: UiColors::BG_MID,
            stroke: egui::Stroke::new(1.0, UiColors::BORDER),
            inner_margin: egui::Margin::same(15),
            ..Default::default()
        }
    }

    /// Create an overlay panel (semi-transparent, for the result banner)
    pub fn overlay() -> egui::Frame {
        egui::Frame {
            fill: UiColors::BG_OVERLAY,
            stroke: egui::Stroke::new(1.0, UiColors::BORDER),
            inner_margin: egui::Margin::same(30),
            corner_radius: egui::CornerRadius::same(12),
            shadow: egui::epaint::Shadow {
                offset: [0, 8],
                blur: 24,
                spread: 0,
                color: egui::Color32::from_black_alpha(150),
            },
            ..Default::default()
        }
    }
}

/// Helper functions for spacing and layout
pub struct Layout;

impl Layout {
    /// Standard spacing between sections
    pub const SECTION_SPACING: f32 = 30.0;

    /// Standard spacing between items
    pub const ITEM_SPACING: f32 = 15.0;

    /// Small spacing
    pub const SMALL_SPACING: f32 = 8.0;

    pub fn section_space(ui: &mut egui::Ui) {
        ui.add_space(Self::SECTION_SPACING);
    }

    pub fn item_space(ui: &mut egui::Ui) {
        ui.add_space(Self::ITEM_SPACING);
    }

    pub fn small_space(ui: &mut egui::Ui) {
        ui.add_space(Self::SMALL_SPACING);
    }
}
