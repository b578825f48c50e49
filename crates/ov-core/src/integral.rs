//! Integral results and their "approximately zero" classification

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::grid::{SampleRange, TimeGrid};
use crate::quadrature::integrate;

/// Relative tolerance used to decide whether an integral vanishes
///
/// An integral counts as zero when `|value| <= relative * scale`, where
/// `scale` is the peak magnitude of the integrand over the integrated span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub relative: f64,
}

impl Tolerance {
    pub const DEFAULT_RELATIVE: f64 = 1e-4;

    pub fn new(relative: f64) -> Self {
        Self { relative }
    }

    pub fn accepts(&self, value: f64, scale: f64) -> bool {
        value.abs() <= self.relative * scale.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RELATIVE)
    }
}

/// A definite integral computed over (part of) a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegralResult {
    label: String,
    value: f64,
    range: SampleRange,
    t_start: f64,
    t_end: f64,
    scale: f64,
    approximately_zero: bool,
}

impl IntegralResult {
    /// Integrate `values` over `range` (or the full grid) and classify the result
    pub fn evaluate(
        label: impl Into<String>,
        values: &[f64],
        grid: &TimeGrid,
        range: Option<SampleRange>,
        tolerance: Tolerance,
    ) -> Result<Self, ShapeError> {
        let value = integrate(values, grid, range)?;
        let range = range.unwrap_or_else(|| grid.full_range()).clamp_to(grid.len());
        let (t_start, t_end) = grid.bounds(range).unwrap_or((grid.start(), grid.start()));
        let scale = values[range.start..range.end]
            .iter()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));
        Ok(Self {
            label: label.into(),
            value,
            range,
            t_start,
            t_end,
            scale,
            approximately_zero: tolerance.accepts(value, scale),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn range(&self) -> SampleRange {
        self.range
    }

    /// First and last instant of the integrated span
    pub fn t_bounds(&self) -> (f64, f64) {
        (self.t_start, self.t_end)
    }

    /// Peak integrand magnitude the classification was measured against
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_approximately_zero(&self) -> bool {
        self.approximately_zero
    }

    /// `[a, b]` notation for the span, rounded the way a reader expects
    pub fn interval_text(&self) -> String {
        format!("[{}, {}]", round_bound(self.t_start), round_bound(self.t_end))
    }
}

/// Grid end points such as 0.4995 read as 0.5 in titles
fn round_bound(t: f64) -> String {
    let rounded = (t * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{sample, Waveform};

    #[test]
    fn test_orthogonal_pair_is_classified_zero() {
        let grid = TimeGrid::default();
        let product = sample(
            &grid,
            &Waveform::product(Waveform::sine_hz(1.0), Waveform::sine_hz(2.0)),
            "p",
        );
        let result = IntegralResult::evaluate("full", &product.values, &grid, None, Tolerance::default()).unwrap();
        assert!(result.value().abs() < 1e-9);
        assert!(result.is_approximately_zero());
        assert_eq!(result.interval_text(), "[0, 1]");
    }

    #[test]
    fn test_self_product_is_not_zero() {
        let grid = TimeGrid::default();
        let squared = sample(&grid, &Waveform::squared(Waveform::sine_hz(1.0)), "s²");
        let result = IntegralResult::evaluate("full", &squared.values, &grid, None, Tolerance::default()).unwrap();
        assert!((result.value() - 0.5).abs() < 1e-6);
        assert!(!result.is_approximately_zero());
        assert!((result.scale() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_classification_follows_tolerance() {
        let grid = TimeGrid::linspace(0.0, 1.0, 3);
        let values = [0.0, 1e-3, 0.0];
        let strict = IntegralResult::evaluate("x", &values, &grid, None, Tolerance::new(1e-6)).unwrap();
        let loose = IntegralResult::evaluate("x", &values, &grid, None, Tolerance::new(1.0)).unwrap();
        assert_eq!(strict.value(), loose.value());
        assert!(!strict.is_approximately_zero());
        assert!(loose.is_approximately_zero());
    }

    #[test]
    fn test_sub_range_bounds() {
        let grid = TimeGrid::default();
        let values = vec![1.0; grid.len()];
        let half = grid.span(0.0, 0.5);
        let result = IntegralResult::evaluate("half", &values, &grid, Some(half), Tolerance::default()).unwrap();
        let (lo, hi) = result.t_bounds();
        assert_eq!(lo, 0.0);
        assert!(hi <= 0.5 && hi > 0.499);
        assert_eq!(result.interval_text(), "[0, 0.5]");
    }

    #[test]
    fn test_zero_integrand_on_empty_span() {
        let grid = TimeGrid::default();
        let values = vec![1.0; grid.len()];
        let result = IntegralResult::evaluate("empty", &values, &grid, Some(SampleRange::new(7, 7)), Tolerance::default()).unwrap();
        assert_eq!(result.value(), 0.0);
        assert!(result.is_approximately_zero());
    }
}
