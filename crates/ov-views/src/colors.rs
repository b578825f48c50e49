//! Color utilities for panels

use egui::Color32;
use ov_core::{ColorHint, Tone};

/// Concrete colour for a named hint
pub fn hint_color(hint: ColorHint) -> Color32 {
    match hint {
        ColorHint::Blue => Color32::from_rgb(31, 119, 220),
        ColorHint::Red => Color32::from_rgb(220, 40, 40),
        ColorHint::Green => Color32::from_rgb(34, 160, 60),
        ColorHint::Purple => Color32::from_rgb(148, 80, 200),
        ColorHint::Orange => Color32::from_rgb(255, 165, 0),
        ColorHint::DarkOrange => Color32::from_rgb(255, 140, 0),
        ColorHint::Brown => Color32::from_rgb(165, 90, 60),
        ColorHint::Gray => Color32::from_rgb(150, 150, 150),
        // Plotted on a dark background, so "black" guides are drawn light
        ColorHint::Black => Color32::from_rgb(220, 220, 220),
        ColorHint::DodgerBlue => Color32::from_rgb(30, 144, 255),
        ColorHint::Crimson => Color32::from_rgb(220, 20, 60),
        ColorHint::LightBlue => Color32::from_rgb(173, 216, 230),
        ColorHint::LightCoral => Color32::from_rgb(240, 128, 128),
        ColorHint::LightGreen => Color32::from_rgb(144, 238, 144),
        ColorHint::Yellow => Color32::from_rgb(255, 230, 80),
    }
}

/// `color` at the given opacity (0..=1)
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Resolve a hint and opacity in one step
pub fn styled(hint: ColorHint, opacity: f32) -> Color32 {
    with_opacity(hint_color(hint), opacity)
}

/// Title colour for a verdict tone; `None` keeps the theme's text colour
pub fn tone_color(tone: Tone) -> Option<Color32> {
    match tone {
        Tone::Neutral => None,
        Tone::Confirmed => Some(Color32::from_rgb(100, 220, 120)),
        Tone::Rejected => Some(Color32::from_rgb(255, 100, 100)),
        Tone::Caution => Some(Color32::from_rgb(255, 160, 60)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_sets_alpha() {
        let c = styled(ColorHint::Red, 0.5);
        assert_eq!(c.a(), 128);
        assert_eq!(with_opacity(Color32::WHITE, 2.0).a(), 255);
        assert_eq!(with_opacity(Color32::WHITE, 0.0).a(), 0);
    }

    #[test]
    fn test_tones_are_distinct() {
        assert!(tone_color(Tone::Neutral).is_none());
        let confirmed = tone_color(Tone::Confirmed);
        assert_ne!(confirmed, tone_color(Tone::Rejected));
        assert_ne!(confirmed, tone_color(Tone::Caution));
    }
}
