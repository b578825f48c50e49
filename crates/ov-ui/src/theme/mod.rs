use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Classroom Dark".to_string(),
            dark_mode: true,
        }
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "Classroom Light".to_string(),
            dark_mode: false,
        }
    }
}

/// Apply the application theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    if theme.dark_mode {
        let bg_color = Color32::from_rgb(23, 23, 23);
        let panel_bg = Color32::from_rgb(31, 31, 31);
        let widget_bg = Color32::from_rgb(40, 40, 40);
        let text_color = Color32::from_rgb(220, 220, 220);

        visuals.window_fill = panel_bg;
        visuals.panel_fill = panel_bg;
        visuals.extreme_bg_color = bg_color;
        visuals.faint_bg_color = widget_bg;

        visuals.widgets.noninteractive.bg_fill = widget_bg;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 50, 50);
        visuals.widgets.active.bg_fill = Color32::from_rgb(60, 60, 60);
    }

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(4.0);
    }
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent_color());

    visuals.selection.bg_fill = accent_color().linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color());
    visuals.hyperlink_color = accent_color();

    visuals.window_shadow.extrusion = 8.0;
    visuals.popup_shadow.extrusion = 4.0;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    style.text_styles = text_styles();

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

fn text_styles() -> BTreeMap<TextStyle, FontId> {
    let mut sizes = BTreeMap::new();
    sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    sizes.insert(TextStyle::Body, FontId::new(13.0, FontFamily::Proportional));
    sizes.insert(TextStyle::Button, FontId::new(13.0, FontFamily::Proportional));
    sizes.insert(TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional));
    sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    sizes
}

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 150, 250)
}

/// Get the error color for the theme
pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}

/// Highlight for the active example button
pub fn active_color() -> Color32 {
    Color32::from_rgb(255, 215, 0)
}

/// Resting colour of the example button at `index`
pub fn button_color(index: usize) -> Color32 {
    const PALETTE: &[Color32] = &[
        Color32::from_rgb(173, 216, 230), // light blue
        Color32::from_rgb(144, 238, 144), // light green
        Color32::from_rgb(240, 128, 128), // light coral
        Color32::from_rgb(255, 255, 224), // light yellow
        Color32::from_rgb(255, 182, 193), // light pink
        Color32::from_rgb(211, 211, 211), // light gray
        Color32::from_rgb(230, 230, 250), // lavender
        Color32::from_rgb(224, 255, 255), // light cyan
    ];
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_palette_wraps() {
        assert_eq!(button_color(0), button_color(8));
        assert_ne!(button_color(0), button_color(1));
        assert_ne!(button_color(3), active_color());
    }
}
