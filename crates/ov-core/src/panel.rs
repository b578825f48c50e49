//! Renderer-agnostic panel descriptors
//!
//! Examples describe what to draw with these types; a renderer decides how.
//! Nothing here depends on a particular drawing technology.

use serde::{Deserialize, Serialize};

use crate::grid::SampleRange;

/// Named colour hints, resolved to concrete colours by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorHint {
    Blue,
    Red,
    Green,
    Purple,
    Orange,
    DarkOrange,
    Brown,
    Gray,
    Black,
    DodgerBlue,
    Crimson,
    LightBlue,
    LightCoral,
    LightGreen,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dash {
    Solid,
    Dashed,
}

/// Stroke / fill styling for a series, area or guide line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleHint {
    pub color: ColorHint,
    pub width: f32,
    pub dash: Dash,
    /// 0.0 (transparent) ..= 1.0 (opaque)
    pub opacity: f32,
}

impl StyleHint {
    pub fn line(color: ColorHint, width: f32) -> Self {
        Self {
            color,
            width,
            dash: Dash::Solid,
            opacity: 1.0,
        }
    }

    pub fn fill(color: ColorHint, opacity: f32) -> Self {
        Self {
            color,
            width: 0.0,
            dash: Dash::Solid,
            opacity,
        }
    }

    pub fn dashed(mut self) -> Self {
        self.dash = Dash::Dashed;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// How a panel title should be emphasised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Neutral,
    /// The result confirms orthogonality
    Confirmed,
    /// The result rules orthogonality out
    Rejected,
    /// Small but not ideally zero
    Caution,
}

/// A line plot `(x, y)` with a style and optional legend label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub label: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub style: StyleHint,
}

impl SeriesSpec {
    pub fn new(x: &[f64], y: &[f64], style: StyleHint) -> Self {
        Self {
            label: None,
            x: x.to_vec(),
            y: y.to_vec(),
            style,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Paired points, truncated to the shorter axis
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y]).collect()
    }
}

/// Which part of an area's curve is filled against the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillRegion {
    All,
    /// Only where the curve lies above the baseline
    Positive,
    /// Only where the curve lies below the baseline
    Negative,
    /// A fixed index section of the curve
    Section(SampleRange),
}

/// A filled region between a curve and a horizontal baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSpec {
    pub label: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub baseline: f64,
    pub region: FillRegion,
    pub style: StyleHint,
}

impl AreaSpec {
    pub fn new(x: &[f64], y: &[f64], region: FillRegion, style: StyleHint) -> Self {
        Self {
            label: None,
            x: x.to_vec(),
            y: y.to_vec(),
            baseline: 0.0,
            region,
            style,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Outline of the filled region, ready to be filled down to `baseline`
    ///
    /// Sign regions clamp the curve to the baseline instead of cutting it, so
    /// the outline stays continuous and contributes zero area elsewhere.
    pub fn outline(&self) -> Vec<[f64; 2]> {
        let base = self.baseline;
        let pairs = self.x.iter().zip(&self.y);
        match self.region {
            FillRegion::All => pairs.map(|(&x, &y)| [x, y]).collect(),
            FillRegion::Positive => pairs.map(|(&x, &y)| [x, y.max(base)]).collect(),
            FillRegion::Negative => pairs.map(|(&x, &y)| [x, y.min(base)]).collect(),
            FillRegion::Section(range) => {
                let range = range.clamp_to(self.x.len().min(self.y.len()));
                (range.start..range.end).map(|i| [self.x[i], self.y[i]]).collect()
            }
        }
    }
}

/// A horizontal reference line (`y = const`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub y: f64,
    pub label: Option<String>,
    pub style: StyleHint,
}

impl GuideLine {
    /// Dashed zero axis
    pub fn zero() -> Self {
        Self {
            y: 0.0,
            label: None,
            style: StyleHint::line(ColorHint::Black, 1.5).dashed().opacity(0.7),
        }
    }

    pub fn at(y: f64, style: StyleHint) -> Self {
        Self { y, label: None, style }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Free text placed at panel-relative coordinates (`0..=1` on both axes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f32,
    pub strong: bool,
    pub background: Option<ColorHint>,
}

impl TextAnnotation {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size: 14.0,
            strong: false,
            background: None,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn strong(mut self) -> Self {
        self.strong = true;
        self
    }

    pub fn background(mut self, color: ColorHint) -> Self {
        self.background = Some(color);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub x: Option<(f64, f64)>,
    pub y: Option<(f64, f64)>,
}

/// Everything needed to draw one panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    pub title: String,
    pub tone: Tone,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub series: Vec<SeriesSpec>,
    pub areas: Vec<AreaSpec>,
    pub guides: Vec<GuideLine>,
    pub annotations: Vec<TextAnnotation>,
    pub limits: AxisLimits,
    pub show_legend: bool,
    pub show_axes: bool,
}

impl PanelDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tone: Tone::Neutral,
            x_label: None,
            y_label: None,
            series: Vec::new(),
            areas: Vec::new(),
            guides: Vec::new(),
            annotations: Vec::new(),
            limits: AxisLimits::default(),
            show_legend: false,
            show_axes: true,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn with_series(mut self, series: SeriesSpec) -> Self {
        self.show_legend |= series.label.is_some();
        self.series.push(series);
        self
    }

    pub fn with_area(mut self, area: AreaSpec) -> Self {
        self.show_legend |= area.label.is_some();
        self.areas.push(area);
        self
    }

    pub fn with_guide(mut self, guide: GuideLine) -> Self {
        self.show_legend |= guide.label.is_some();
        self.guides.push(guide);
        self
    }

    pub fn with_annotation(mut self, annotation: TextAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn x_limits(mut self, lo: f64, hi: f64) -> Self {
        self.limits.x = Some((lo, hi));
        self
    }

    pub fn y_limits(mut self, lo: f64, hi: f64) -> Self {
        self.limits.y = Some((lo, hi));
        self
    }

    /// Text-only panel: no axes, unit limits for annotation placement
    pub fn text_only(mut self) -> Self {
        self.show_axes = false;
        self.limits = AxisLimits {
            x: Some((0.0, 1.0)),
            y: Some((0.0, 1.0)),
        };
        self
    }
}
