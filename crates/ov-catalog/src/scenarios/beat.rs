//! sin(20πt) × sin(21πt): close frequencies and the beat envelope

use ov_core::{
    AreaSpec, ColorHint, ExampleOutput, FillRegion, PanelDescriptor, ShapeError, StyleHint, TextAnnotation, Tone,
    Waveform,
};

use super::{originals_panel, product_panel, verdict, Ctx, AMPLITUDE, PRODUCT, TIME, UNIT_LIMITS};
use crate::labels;

const F1_HZ: f64 = 10.0;
const F2_HZ: f64 = 10.5;

pub fn compute(ctx: &Ctx<'_>) -> Result<ExampleOutput, ShapeError> {
    let f1 = ctx.sample(&Waveform::sine_hz(F1_HZ), "sin(20πt)");
    let f2 = ctx.sample(&Waveform::sine_hz(F2_HZ), "sin(21πt)");
    let product = f1.product(&f2, "sin(20πt) × sin(21πt)")?;

    // Beat frequency (f2 - f1) / 2
    let envelope = ctx.sample(&Waveform::cosine_hz((F2_HZ - F1_HZ) / 2.0), "envelope");
    let lower = envelope.scaled(-1.0, "-envelope");

    let full = ctx.integral(labels::FULL, &product, None)?;
    let first_half = ctx.integral(labels::FIRST_HALF, &product, Some(ctx.grid.span(0.0, 0.5)))?;

    let originals = originals_panel(
        ctx,
        "Close Frequencies: Beat Effect",
        &[(&f1, ColorHint::Blue, "sin(20πt)"), (&f2, ColorHint::Red, "sin(21πt)")],
        2.0,
    );

    let (full_suffix, full_tone) = verdict(&full);
    let product_view = product_panel(
        format!("Product: ∫{} = {:.8} {}", full.interval_text(), full.value(), full_suffix),
        PRODUCT,
    )
    .tone(full_tone)
    .with_series(ctx.series(&product, StyleHint::line(ColorHint::Green, 2.0)))
    .with_area(AreaSpec::new(ctx.times(), &product.values, FillRegion::All, StyleHint::fill(ColorHint::Green, 0.5)));

    // Cancellation only holds over whole beat periods
    let (half_suffix, half_tone) = match verdict(&first_half) {
        (_, Tone::Rejected) => ("≠ 0 ✗ cut mid-beat", Tone::Caution),
        other => other,
    };
    let envelope_view = PanelDescriptor::new("Beat: Amplitude Envelope")
        .tone(half_tone)
        .with_series(
            ctx.series(&product, StyleHint::line(ColorHint::Gray, 1.5).opacity(0.6))
                .label("Product"),
        )
        .with_series(
            ctx.series(&envelope, StyleHint::line(ColorHint::Blue, 1.5).dashed())
                .label("Upper Envelope"),
        )
        .with_series(
            ctx.series(&lower, StyleHint::line(ColorHint::Blue, 1.5).dashed())
                .label("Lower Envelope"),
        )
        .with_annotation(
            TextAnnotation::new(
                format!("∫{} = {:.4} {}", first_half.interval_text(), first_half.value(), half_suffix),
                0.5,
                0.92,
            )
            .size(12.0),
        )
        .y_label(AMPLITUDE)
        .x_label(TIME)
        .y_limits(UNIT_LIMITS.0, UNIT_LIMITS.1);

    Ok(ExampleOutput {
        signals: vec![f1, f2, product, envelope, lower],
        integrals: vec![full, first_half],
        panels: vec![originals, product_view, envelope_view],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ov_core::{TimeGrid, Tolerance};
    use std::f64::consts::PI;

    #[test]
    fn test_beat_integrals() {
        let grid = TimeGrid::default();
        let output = compute(&Ctx { grid: &grid, tolerance: Tolerance::default() }).unwrap();

        // ½[sin(πt)/π - sin(41πt)/(41π)] vanishes at t = 1
        let full = output.integral(labels::FULL).unwrap();
        assert!(full.value().abs() < 1e-6);
        assert!(full.is_approximately_zero());

        // ∫₀^½ = ½(1/π - 1/(41π)) = 20/(41π)
        let half = output.integral(labels::FIRST_HALF).unwrap();
        assert!(half.value() > 0.1);
        assert!((half.value() - 20.0 / (41.0 * PI)).abs() < 1e-3);

        assert!(!half.is_approximately_zero());
        assert_eq!(output.panels[2].series.len(), 3);
    }

    #[test]
    fn test_tones_follow_classification() {
        let grid = TimeGrid::default();
        let output = compute(&Ctx { grid: &grid, tolerance: Tolerance::default() }).unwrap();

        assert_eq!(output.panels[1].tone, Tone::Confirmed);
        assert!(output.panels[1].title.contains("ORTHOGONAL"));
        assert_eq!(output.panels[2].tone, Tone::Caution);

        // A coarse grid that misses the cancellation flips the product verdict
        let coarse = TimeGrid::linspace(0.0, 1.0, 30);
        let output = compute(&Ctx { grid: &coarse, tolerance: Tolerance::default() }).unwrap();
        let full = output.integral(labels::FULL).unwrap();
        let expected = if full.is_approximately_zero() { Tone::Confirmed } else { Tone::Rejected };
        assert_eq!(output.panels[1].tone, expected);
    }

    #[test]
    fn test_envelope_bounds_product() {
        let grid = TimeGrid::default();
        let output = compute(&Ctx { grid: &grid, tolerance: Tolerance::default() }).unwrap();
        let product = output.signal("sin(20πt) × sin(21πt)").unwrap();
        let envelope = output.signal("envelope").unwrap();
        assert_eq!(product.len(), envelope.len());
        assert!((envelope.values[0] - 1.0).abs() < 1e-12);
    }
}
