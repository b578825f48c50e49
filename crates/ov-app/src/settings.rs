//! Window and presentation settings for the desktop app

use ov_ui::{ShellConfig, Theme};

/// Settings fixed at startup
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Window title
    pub title: String,

    /// Initial window size
    pub window_size: [f32; 2],

    /// Smallest size the window may be resized to
    pub min_window_size: [f32; 2],

    /// Dark or light theme
    pub dark_mode: bool,

    /// Menu and status bar visibility
    pub shell: ShellConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: "Orthogonality Explorer".to_string(),
            window_size: [1400.0, 900.0],
            min_window_size: [900.0, 650.0],
            dark_mode: true,
            shell: ShellConfig::default(),
        }
    }
}

impl AppSettings {
    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::default()
        } else {
            Theme::light()
        }
    }

    pub fn eframe_theme(&self) -> eframe::Theme {
        if self.dark_mode {
            eframe::Theme::Dark
        } else {
            eframe::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_follows_dark_mode() {
        let mut settings = AppSettings::default();
        assert!(settings.theme().dark_mode);
        assert_eq!(settings.eframe_theme(), eframe::Theme::Dark);

        settings.dark_mode = false;
        assert!(!settings.theme().dark_mode);
        assert_eq!(settings.eframe_theme(), eframe::Theme::Light);
    }

    #[test]
    fn test_window_fits_minimum() {
        let settings = AppSettings::default();
        assert!(settings.window_size[0] >= settings.min_window_size[0]);
        assert!(settings.window_size[1] >= settings.min_window_size[1]);
    }
}
