// Settings module
// UI preferences loaded from settings.toml

use serde::{Deserialize, Serialize};

use crate::models::locale::Locale;

pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
    pub theme: String,
    pub use_system_theme: bool,
    /// 0 = Sunday, 1 = Monday
    pub first_day_of_week: u8,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::Russian,
            theme: "light".to_string(),
            use_system_theme: false,
            first_day_of_week: 1, // Monday
            window_width: 480.0,
            window_height: 720.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        match self.theme.as_str() {
            "light" | "dark" => {}
            other => return Err(format!("Unknown theme '{}'", other)),
        }

        if self.first_day_of_week > 1 {
            return Err("First day of week must be 0 (Sunday) or 1 (Monday)".to_string());
        }

        if self.window_width < MIN_WINDOW_WIDTH || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(format!(
                "Window size must be at least {}x{}",
                MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT
            ));
        }

        Ok(())
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme == "dark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.locale, Locale::Russian);
        assert_eq!(settings.first_day_of_week, 1);
        assert!(!settings.is_dark_theme());
    }

    #[test]
    fn test_validate_unknown_theme() {
        let settings = Settings {
            theme: "solarized".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().contains("solarized"));
    }

    #[test]
    fn test_validate_first_day_of_week() {
        let settings = Settings {
            first_day_of_week: 3,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_window_too_small() {
        let settings = Settings {
            window_width: 100.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let settings: Settings = toml::from_str("locale = \"en\"\ntheme = \"dark\"\n").unwrap();
        assert_eq!(settings.locale, Locale::English);
        assert!(settings.is_dark_theme());
        assert_eq!(settings.window_width, 480.0);
    }
}
