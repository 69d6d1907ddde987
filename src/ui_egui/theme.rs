//! Theme module for the egui calendar window
//!
//! Defines the CalendarTheme palette and applies it to an egui context.

use egui::Color32;

use crate::models::settings::Settings;

/// Colors used by the calendar grid and the day panel
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Background behind the day summary text
    pub panel_background: Color32,

    /// Today's date text color in the grid
    pub today_text: Color32,

    /// Marker color for days that hold events
    pub event_marker: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Field-level validation errors
    pub error_text: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            panel_background: Color32::from_rgb(255, 255, 255),
            today_text: Color32::from_rgb(50, 150, 50),
            event_marker: Color32::from_rgb(100, 150, 255),
            text_primary: Color32::from_rgb(40, 40, 40),
            error_text: Color32::from_rgb(200, 40, 40),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            panel_background: Color32::from_rgb(40, 40, 40),
            today_text: Color32::from_rgb(100, 220, 120),
            event_marker: Color32::from_rgb(100, 150, 255),
            text_primary: Color32::from_rgb(240, 240, 240),
            error_text: Color32::from_rgb(255, 120, 120),
        }
    }

    /// Pick the palette from settings, or follow the OS when asked to
    pub fn resolve(settings: &Settings) -> Self {
        let is_dark = if settings.use_system_theme {
            match dark_light::detect() {
                dark_light::Mode::Dark => true,
                dark_light::Mode::Light => false,
                dark_light::Mode::Default => settings.is_dark_theme(),
            }
        } else {
            settings.is_dark_theme()
        };

        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.extreme_bg_color = self.panel_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
