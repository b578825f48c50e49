//! Draws a single panel descriptor with egui_plot

use egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Corner, HLine, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoint, PlotPoints, Polygon, Text};
use ov_core::{AreaSpec, Dash, GuideLine, PanelDescriptor, SeriesSpec, StyleHint, TextAnnotation};

use crate::colors::{hint_color, styled, tone_color};

/// Configuration for panel views
#[derive(Clone)]
pub struct PanelViewConfig {
    /// Whether to show the background grid
    pub show_grid: bool,

    /// Where the legend sits when a panel has one
    pub legend_corner: Corner,

    /// Dash length for dashed strokes, in points
    pub dash_length: f32,

    /// Size of the panel title
    pub title_size: f32,
}

impl Default for PanelViewConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            legend_corner: Corner::RightTop,
            dash_length: 10.0,
            title_size: 15.0,
        }
    }
}

/// Axis ranges a panel is drawn with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl PanelBounds {
    /// Map panel-relative coordinates (`0..=1`) to plot coordinates
    pub fn relative(&self, rx: f64, ry: f64) -> [f64; 2] {
        [
            self.x.0 + rx * (self.x.1 - self.x.0),
            self.y.0 + ry * (self.y.1 - self.y.0),
        ]
    }
}

/// Fixed limits where the panel sets them, data extent (y padded) elsewhere
pub fn resolve_bounds(panel: &PanelDescriptor) -> PanelBounds {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    let mut include = |x: f64, y: f64| {
        if x.is_finite() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
        }
        if y.is_finite() {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    };

    for series in &panel.series {
        for [x, y] in series.points() {
            include(x, y);
        }
    }
    for area in &panel.areas {
        for [x, y] in area.outline() {
            include(x, y);
        }
        include(f64::NAN, area.baseline);
    }
    for guide in &panel.guides {
        include(f64::NAN, guide.y);
    }

    let x = panel.limits.x.unwrap_or(if x_min <= x_max { (x_min, x_max) } else { (0.0, 1.0) });
    let y = panel.limits.y.unwrap_or(if y_min <= y_max {
        let padding = ((y_max - y_min) * 0.1).max(1e-3);
        (y_min - padding, y_max + padding)
    } else {
        (0.0, 1.0)
    });

    PanelBounds { x, y }
}

/// Split a fill outline into convex strips against `baseline`
///
/// Each segment becomes a trapezoid down to the baseline; a segment that
/// crosses the baseline becomes two triangles. Segments lying on the
/// baseline are dropped.
pub fn fill_strips(outline: &[[f64; 2]], baseline: f64) -> Vec<Vec<[f64; 2]>> {
    let mut strips = Vec::new();
    for pair in outline.windows(2) {
        let ([x0, y0], [x1, y1]) = (pair[0], pair[1]);
        let (d0, d1) = (y0 - baseline, y1 - baseline);
        if d0 == 0.0 && d1 == 0.0 {
            continue;
        }
        if d0 * d1 < 0.0 {
            let xc = x0 + (x1 - x0) * d0 / (d0 - d1);
            strips.push(vec![[x0, baseline], [x0, y0], [xc, baseline]]);
            strips.push(vec![[xc, baseline], [x1, y1], [x1, baseline]]);
        } else {
            strips.push(vec![[x0, baseline], [x0, y0], [x1, y1], [x1, baseline]]);
        }
    }
    strips
}

/// Renders one [`PanelDescriptor`]
pub struct PanelView {
    id: egui::Id,
    pub config: PanelViewConfig,
}

impl PanelView {
    pub fn new(id: impl std::hash::Hash) -> Self {
        Self {
            id: egui::Id::new(id),
            config: PanelViewConfig::default(),
        }
    }

    pub fn ui(&self, ui: &mut Ui, panel: &PanelDescriptor, height: f32) {
        let mut title_height = 0.0;
        if !panel.title.is_empty() {
            let mut title = RichText::new(&panel.title).strong().size(self.config.title_size);
            if let Some(color) = tone_color(panel.tone) {
                title = title.color(color);
            }
            title_height = ui.label(title).rect.height() + ui.spacing().item_spacing.y;
        }

        let bounds = resolve_bounds(panel);
        let mut plot = Plot::new(self.id)
            .height((height - title_height).max(60.0))
            .show_grid(self.config.show_grid && panel.show_axes)
            .show_axes(panel.show_axes)
            .show_x(panel.show_axes)
            .show_y(panel.show_axes)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .auto_bounds(egui::Vec2b::new(false, false))
            .include_x(bounds.x.0)
            .include_x(bounds.x.1)
            .include_y(bounds.y.0)
            .include_y(bounds.y.1);

        if let Some(label) = &panel.x_label {
            plot = plot.x_axis_label(label.as_str());
        }
        if let Some(label) = &panel.y_label {
            plot = plot.y_axis_label(label.as_str());
        }
        if panel.show_legend {
            plot = plot.legend(Legend::default().position(self.config.legend_corner));
        }

        plot.show(ui, |plot_ui| {
            // Panels are static pages: pin the bounds every frame
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [bounds.x.0, bounds.y.0],
                [bounds.x.1, bounds.y.1],
            ));

            // Fills first so lines stay on top
            for area in &panel.areas {
                for polygon in self.area_polygons(area) {
                    plot_ui.polygon(polygon);
                }
            }
            for guide in &panel.guides {
                plot_ui.hline(self.guide_line(guide));
            }
            for series in &panel.series {
                plot_ui.line(self.series_line(series));
            }
            for annotation in &panel.annotations {
                plot_ui.text(annotation_text(annotation, &bounds));
            }
        });
    }

    fn line_style(&self, style: &StyleHint) -> LineStyle {
        match style.dash {
            Dash::Solid => LineStyle::Solid,
            Dash::Dashed => LineStyle::Dashed {
                length: self.config.dash_length,
            },
        }
    }

    fn series_line(&self, series: &SeriesSpec) -> Line {
        let line = Line::new(PlotPoints::new(series.points()))
            .color(styled(series.style.color, series.style.opacity))
            .width(series.style.width)
            .style(self.line_style(&series.style));
        match &series.label {
            Some(label) => line.name(label),
            None => line,
        }
    }

    fn guide_line(&self, guide: &GuideLine) -> HLine {
        let line = HLine::new(guide.y)
            .color(styled(guide.style.color, guide.style.opacity))
            .width(guide.style.width)
            .style(self.line_style(&guide.style));
        match &guide.label {
            Some(label) => line.name(label),
            None => line,
        }
    }

    fn area_polygons(&self, area: &AreaSpec) -> Vec<Polygon> {
        let fill = styled(area.style.color, area.style.opacity);
        fill_strips(&area.outline(), area.baseline)
            .into_iter()
            .map(|strip| {
                let polygon = Polygon::new(PlotPoints::new(strip)).fill_color(fill).stroke(Stroke::NONE);
                // Same name on every strip: egui_plot merges them into one legend entry
                match &area.label {
                    Some(label) => polygon.name(label),
                    None => polygon,
                }
            })
            .collect()
    }
}

fn annotation_text(annotation: &TextAnnotation, bounds: &PanelBounds) -> Text {
    let [x, y] = bounds.relative(annotation.x, annotation.y);
    let mut text = RichText::new(&annotation.text).size(annotation.size);
    if annotation.strong {
        text = text.strong();
    }
    if let Some(background) = annotation.background {
        text = text.color(Color32::BLACK).background_color(hint_color(background));
    }
    Text::new(PlotPoint::new(x, y), text).anchor(Align2::CENTER_CENTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ov_core::{ColorHint, FillRegion};

    fn signed_area(strips: &[Vec<[f64; 2]>], baseline: f64) -> f64 {
        // Shoelace over each strip, signed by which side of the baseline it sits
        strips
            .iter()
            .map(|strip| {
                let n = strip.len();
                let twice: f64 = (0..n)
                    .map(|i| {
                        let [x0, y0] = strip[i];
                        let [x1, y1] = strip[(i + 1) % n];
                        x0 * y1 - x1 * y0
                    })
                    .sum();
                let above = strip.iter().any(|p| p[1] > baseline);
                (twice / 2.0).abs() * if above { 1.0 } else { -1.0 }
            })
            .sum()
    }

    #[test]
    fn test_strips_split_at_crossings() {
        let outline = [[0.0, 1.0], [1.0, -1.0]];
        let strips = fill_strips(&outline, 0.0);
        assert_eq!(strips.len(), 2);
        assert_eq!(strips[0][2], [0.5, 0.0]);
        assert!((signed_area(&strips, 0.0)).abs() < 1e-12);
    }

    #[test]
    fn test_strips_skip_baseline_segments() {
        let outline = [[0.0, 0.0], [1.0, 0.0], [2.0, 2.0]];
        let strips = fill_strips(&outline, 0.0);
        assert_eq!(strips.len(), 1);
        assert!((signed_area(&strips, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_positive_fill_covers_positive_lobe() {
        let x: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        let y: Vec<f64> = x.iter().map(|t| (2.0 * std::f64::consts::PI * t).sin()).collect();
        let area = AreaSpec::new(&x, &y, FillRegion::Positive, StyleHint::fill(ColorHint::Blue, 0.5));
        let strips = fill_strips(&area.outline(), area.baseline);
        // ∫₀^½ sin(2πt) dt = 1/π
        assert!((signed_area(&strips, 0.0) - 1.0 / std::f64::consts::PI).abs() < 1e-3);
    }

    #[test]
    fn test_bounds_prefer_limits() {
        let x = [0.0, 1.0];
        let y = [-3.0, 3.0];
        let panel = PanelDescriptor::new("p")
            .with_series(SeriesSpec::new(&x, &y, StyleHint::line(ColorHint::Red, 1.0)))
            .y_limits(-1.2, 1.2);
        let bounds = resolve_bounds(&panel);
        assert_eq!(bounds.x, (0.0, 1.0));
        assert_eq!(bounds.y, (-1.2, 1.2));
    }

    #[test]
    fn test_bounds_pad_data_and_include_guides() {
        let panel = PanelDescriptor::new("p")
            .with_series(SeriesSpec::new(&[0.0, 2.0], &[0.0, 1.0], StyleHint::line(ColorHint::Red, 1.0)))
            .with_guide(GuideLine::at(-1.0, StyleHint::line(ColorHint::Green, 1.0)));
        let bounds = resolve_bounds(&panel);
        assert_eq!(bounds.x, (0.0, 2.0));
        assert!(bounds.y.0 < -1.0 && bounds.y.1 > 1.0);
    }

    #[test]
    fn test_text_panel_relative_placement() {
        let bounds = resolve_bounds(&PanelDescriptor::new("t").text_only());
        assert_eq!(bounds.relative(0.5, 0.7), [0.5, 0.7]);
    }
}
