//! Theme module for the egui movie catalog
//!
//! Defines the named colour table used across the header, grid, and
//! countdown modal, with light and dark variants.

use egui::Color32;

/// Colour table for the application chrome
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Card background color
    pub card_background: Color32,

    /// Card border color
    pub card_border: Color32,

    /// Modal surface background color
    pub modal_background: Color32,

    /// Backdrop dim color behind the modal
    pub backdrop: Color32,

    /// Primary text color (titles, countdown digits)
    pub text_primary: Color32,

    /// Secondary text color (descriptions, labels)
    pub text_secondary: Color32,

    /// Accent color (search focus, countdown labels)
    pub accent: Color32,
}

impl AppTheme {
    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(18, 18, 24),
            card_background: Color32::from_rgb(30, 30, 40),
            card_border: Color32::from_rgb(55, 55, 70),
            modal_background: Color32::from_rgb(26, 26, 35),
            backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 160),
            text_primary: Color32::from_rgb(240, 240, 245),
            text_secondary: Color32::from_rgb(160, 160, 175),
            accent: Color32::from_rgb(130, 120, 230),
        }
    }

    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 248),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(220, 220, 228),
            modal_background: Color32::from_rgb(252, 252, 255),
            backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 110),
            text_primary: Color32::from_rgb(35, 35, 45),
            text_secondary: Color32::from_rgb(105, 105, 120),
            accent: Color32::from_rgb(100, 90, 210),
        }
    }

    /// Apply the theme's base visuals to the egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.app_background;
        visuals.window_fill = self.modal_background;
        visuals.override_text_color = Some(self.text_primary);
        ctx.set_visuals(visuals);
    }
}
