use egui::{Context, RichText, TopBottomPanel};
use ov_core::ExampleId;

use crate::example_panel::SelectionRequest;
use crate::theme::error_color;

/// Shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub show_menu_bar: bool,
    pub show_status_bar: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_menu_bar: true,
            show_status_bar: true,
        }
    }
}

/// One line of feedback shown in the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Render the main menu bar; returns a selection made from the Examples menu
pub fn menu_bar(ctx: &Context, labels: &[&str], active: ExampleId) -> Option<SelectionRequest> {
    let mut request = None;

    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Examples", |ui| {
                for (index, label) in labels.iter().enumerate() {
                    let text = format!("{}. {}", index + 1, label);
                    if ui.selectable_label(index == active.index(), text).clicked() {
                        request = Some(SelectionRequest::Index(index as isize));
                        ui.close_menu();
                    }
                }
                ui.separator();
                if ui.button("Previous").clicked() {
                    request = Some(SelectionRequest::Step(-1));
                    ui.close_menu();
                }
                if ui.button("Next").clicked() {
                    request = Some(SelectionRequest::Step(1));
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                ui.label("Keys 1-8 select an example");
                ui.label("Left / Right step through them");
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Example {} of {}", active.index() + 1, labels.len()));
            });
        });
    });

    request
}

/// Render the bottom status bar
pub fn status_bar(ctx: &Context, status: &StatusMessage) {
    TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if status.is_error {
                ui.label(RichText::new("⚠").color(error_color()));
                ui.label(RichText::new(&status.text).color(error_color()));
            } else {
                ui.label(&status.text);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_constructors() {
        assert!(!StatusMessage::info("ok").is_error);
        let err = StatusMessage::error("bad");
        assert!(err.is_error);
        assert_eq!(err.text, "bad");
    }
}
