//! Shared helpers for the example computations

use ov_core::{
    sample, ColorHint, GuideLine, IntegralResult, PanelDescriptor, SampleRange, SeriesSpec, ShapeError, Signal,
    StyleHint, TimeGrid, Tolerance, Tone, Waveform,
};

pub mod beat;
pub mod cosines;
pub mod fourier;
pub mod interval;
pub mod principal;
pub mod sine_cosine;
pub mod sines;
pub mod squared;

/// Amplitude window shared by the unit-amplitude examples
pub const UNIT_LIMITS: (f64, f64) = (-1.2, 1.2);

pub const AMPLITUDE: &str = "Amplitude";
pub const PRODUCT: &str = "Product";
pub const TIME: &str = "Time (t)";

/// Grid and tolerance an example is computed against
pub struct Ctx<'a> {
    pub grid: &'a TimeGrid,
    pub tolerance: Tolerance,
}

impl<'a> Ctx<'a> {
    pub fn times(&self) -> &'a [f64] {
        self.grid.times()
    }

    pub fn sample(&self, waveform: &Waveform, label: &str) -> Signal {
        sample(self.grid, waveform, label)
    }

    /// Integrate `signal` over `range` (the whole grid when `None`)
    pub fn integral(&self, label: &str, signal: &Signal, range: Option<SampleRange>) -> Result<IntegralResult, ShapeError> {
        IntegralResult::evaluate(label, &signal.values, self.grid, range, self.tolerance)
    }

    /// Series restricted to `range`
    pub fn section(&self, signal: &Signal, range: SampleRange, style: StyleHint) -> SeriesSpec {
        let range = range.clamp_to(signal.len().min(self.grid.len()));
        SeriesSpec::new(self.grid.slice(range), &signal.values[range.start..range.end], style)
    }

    pub fn series(&self, signal: &Signal, style: StyleHint) -> SeriesSpec {
        SeriesSpec::new(self.times(), &signal.values, style)
    }
}

/// First panel of most examples: both inputs overlaid on the unit window
pub fn originals_panel(ctx: &Ctx<'_>, title: &str, inputs: &[(&Signal, ColorHint, &str)], width: f32) -> PanelDescriptor {
    inputs
        .iter()
        .fold(PanelDescriptor::new(title), |panel, (signal, color, legend)| {
            panel.with_series(ctx.series(signal, StyleHint::line(*color, width).opacity(0.8)).label(*legend))
        })
        .y_label(AMPLITUDE)
        .y_limits(UNIT_LIMITS.0, UNIT_LIMITS.1)
}

/// Verdict suffix and title tone for a classified integral
pub fn verdict(result: &IntegralResult) -> (&'static str, Tone) {
    if result.is_approximately_zero() {
        ("≈ 0 ✓ ORTHOGONAL", Tone::Confirmed)
    } else {
        ("≠ 0 ✗ NOT ORTHOGONAL", Tone::Rejected)
    }
}

/// Panel framing a product curve: dashed zero axis and product axis label
pub fn product_panel(title: impl Into<String>, y_label: &str) -> PanelDescriptor {
    PanelDescriptor::new(title).with_guide(GuideLine::zero()).y_label(y_label)
}
