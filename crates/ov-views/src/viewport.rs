//! Viewport - the page title over the stacked panels

use egui::{RichText, Ui};

use crate::panel_view::PanelView;
use ov_core::Frame;

/// Stacks a frame's panels vertically under its title
pub struct Viewport {
    views: Vec<PanelView>,
    title_size: f32,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            views: Vec::new(),
            title_size: 20.0,
        }
    }

    /// Draw `frame`, or a placeholder before the first render
    pub fn ui(&mut self, ui: &mut Ui, frame: Option<&Frame>) {
        let Some(frame) = frame else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Select an example").weak());
            });
            return;
        };

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(&frame.title).strong().size(self.title_size));
        });
        ui.separator();

        // One view per panel slot, reused across frames
        while self.views.len() < frame.panels.len() {
            let index = self.views.len();
            self.views.push(PanelView::new(("ov_panel", index)));
        }

        let count = frame.panels.len().max(1) as f32;
        let spacing = ui.spacing().item_spacing.y;
        let height = ((ui.available_height() - spacing * (count - 1.0)) / count).max(80.0);

        for (view, panel) in self.views.iter().zip(&frame.panels) {
            view.ui(ui, panel, height);
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
