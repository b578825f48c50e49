//! User interface components for the orthogonality explorer
//!
//! This crate provides the egui-based shell (menu and status bars), the
//! example selector and the application theme.

pub mod example_panel;
pub mod shell;
pub mod theme;

pub use example_panel::{keyboard_request, request_for_key, ExampleSelector, ExampleSelectorConfig, SelectionRequest};
pub use shell::{menu_bar, status_bar, ShellConfig, StatusMessage};
pub use theme::{apply_theme, Theme};

// Common icon definitions
pub mod icons {
    pub const PREVIOUS: &str = "◀";
    pub const NEXT: &str = "▶";
}
