//! Example selector: side-panel buttons and keyboard shortcuts
//!
//! Every input path produces a [`SelectionRequest`], which the app resolves
//! to a single index before handing it to the selection engine.

use egui::{Button, Color32, Context, Key, RichText, ScrollArea, Ui, Vec2};
use ov_core::ExampleId;

use crate::icons;
use crate::theme::{active_color, button_color};

/// Keys `1`..`8` select an example directly
const NUMBER_KEYS: [Key; 8] = [
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
];

/// A user request to change the active example
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRequest {
    /// Jump to an absolute index
    Index(isize),
    /// Move relative to the active example
    Step(isize),
}

impl SelectionRequest {
    /// The absolute index this request targets; may be out of range
    pub fn resolve(self, active: ExampleId) -> isize {
        match self {
            SelectionRequest::Index(index) => index,
            SelectionRequest::Step(delta) => active.index() as isize + delta,
        }
    }
}

/// Request bound to a single key, if any
pub fn request_for_key(key: Key) -> Option<SelectionRequest> {
    match key {
        Key::ArrowRight | Key::ArrowDown => Some(SelectionRequest::Step(1)),
        Key::ArrowLeft | Key::ArrowUp => Some(SelectionRequest::Step(-1)),
        _ => NUMBER_KEYS
            .iter()
            .position(|&k| k == key)
            .map(|i| SelectionRequest::Index(i as isize)),
    }
}

/// First shortcut pressed this frame
pub fn keyboard_request(ctx: &Context) -> Option<SelectionRequest> {
    // Leave keys alone while a text field has focus
    if ctx.wants_keyboard_input() {
        return None;
    }
    ctx.input(|input| {
        NUMBER_KEYS
            .iter()
            .chain(&[Key::ArrowLeft, Key::ArrowRight, Key::ArrowUp, Key::ArrowDown])
            .find(|&&key| input.key_pressed(key))
            .and_then(|&key| request_for_key(key))
    })
}

/// Example selector configuration
#[derive(Debug, Clone)]
pub struct ExampleSelectorConfig {
    /// Button size
    pub button_size: Vec2,

    /// Show the previous / next row under the buttons
    pub show_stepper: bool,

    /// Text colour on the pastel buttons
    pub button_text: Color32,
}

impl Default for ExampleSelectorConfig {
    fn default() -> Self {
        Self {
            button_size: Vec2::new(170.0, 34.0),
            show_stepper: true,
            button_text: Color32::BLACK,
        }
    }
}

/// Vertical list of example buttons
#[derive(Default)]
pub struct ExampleSelector {
    pub config: ExampleSelectorConfig,
}

impl ExampleSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one button per label, highlighting `active`
    pub fn ui(&self, ui: &mut Ui, labels: &[&str], active: ExampleId) -> Option<SelectionRequest> {
        let mut request = None;

        ui.heading("Examples");
        ui.separator();

        ScrollArea::vertical().id_source("example_selector").show(ui, |ui| {
            for (index, label) in labels.iter().enumerate() {
                let is_active = index == active.index();
                let fill = if is_active { active_color() } else { button_color(index) };
                let text = RichText::new(format!("{}  {}", index + 1, label))
                    .strong()
                    .color(self.config.button_text);

                let response = ui
                    .add_sized(self.config.button_size, Button::new(text).fill(fill))
                    .on_hover_text(format!("Show example {} (key {})", index + 1, index + 1));
                if response.clicked() {
                    request = Some(SelectionRequest::Index(index as isize));
                }
            }

            if self.config.show_stepper {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(icons::PREVIOUS).on_hover_text("Previous example (Left Arrow)").clicked() {
                        request = Some(SelectionRequest::Step(-1));
                    }
                    ui.label(format!("{} / {}", active.index() + 1, labels.len()));
                    if ui.button(icons::NEXT).on_hover_text("Next example (Right Arrow)").clicked() {
                        request = Some(SelectionRequest::Step(1));
                    }
                });
            }
        });

        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_map_to_indices() {
        assert_eq!(request_for_key(Key::Num1), Some(SelectionRequest::Index(0)));
        assert_eq!(request_for_key(Key::Num8), Some(SelectionRequest::Index(7)));
        assert_eq!(request_for_key(Key::Num9), None);
        assert_eq!(request_for_key(Key::A), None);
    }

    #[test]
    fn test_steps_resolve_against_active() {
        assert_eq!(request_for_key(Key::ArrowRight).unwrap().resolve(ExampleId(3)), 4);
        assert_eq!(request_for_key(Key::ArrowLeft).unwrap().resolve(ExampleId(0)), -1);
        assert_eq!(SelectionRequest::Index(6).resolve(ExampleId(2)), 6);
    }
}
