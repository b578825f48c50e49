//! cos(2πt) × sin(2πt) on shrinking intervals
//!
//! The product is ½·sin(4πt), which completes whole periods on `[0, 1]` and
//! `[0, 0.5]` but not on `[0, 0.25]`. Orthogonality is a property of the pair
//! *and* the interval.

use ov_core::{
    AreaSpec, ColorHint, ExampleOutput, FillRegion, SampleRange, ShapeError, StyleHint, TextAnnotation, Tone,
    Waveform,
};

use super::{originals_panel, product_panel, verdict, Ctx, PRODUCT, TIME};
use crate::labels;

pub fn compute(ctx: &Ctx<'_>) -> Result<ExampleOutput, ShapeError> {
    let f1 = ctx.sample(&Waveform::cosine_hz(1.0), "cos(2πt)");
    let f2 = ctx.sample(&Waveform::sine_hz(1.0), "sin(2πt)");
    let product = f1.product(&f2, "cos(2πt) × sin(2πt)")?;

    let half = ctx.grid.span(0.0, 0.5);
    let quarter = ctx.grid.span(0.0, 0.25);
    // Shares the quarter's last sample so both pieces tile the half exactly
    let second_quarter = SampleRange::new(quarter.end.saturating_sub(1), half.end);

    let full = ctx.integral(labels::FULL, &product, None)?;
    let first_half = ctx.integral(labels::FIRST_HALF, &product, Some(half))?;
    let first_quarter = ctx.integral(labels::FIRST_QUARTER, &product, Some(quarter))?;
    let rest = ctx.integral(labels::SECOND_QUARTER, &product, Some(second_quarter))?;

    let originals = originals_panel(
        ctx,
        "Orthogonal Functions (but the interval matters!)",
        &[(&f1, ColorHint::Blue, "cos(2πt)"), (&f2, ColorHint::Red, "sin(2πt)")],
        3.0,
    );

    let (full_suffix, full_tone) = verdict(&full);
    let full_view = product_panel(
        format!(
            "Product cos(2πt) × sin(2πt): ∫{} = {:.8} {}",
            full.interval_text(),
            full.value(),
            full_suffix
        ),
        PRODUCT,
    )
    .tone(full_tone)
    .with_series(ctx.series(&product, StyleHint::line(ColorHint::Purple, 3.0)))
    .with_area(AreaSpec::new(ctx.times(), &product.values, FillRegion::All, StyleHint::fill(ColorHint::Purple, 0.5)));

    let (half_suffix, _) = verdict(&first_half);
    let quarter_tone = if first_quarter.is_approximately_zero() { Tone::Confirmed } else { Tone::Rejected };
    let quarter_suffix = match quarter_tone {
        Tone::Rejected => "≠ 0 ✗ Unsuitable Interval",
        _ => "≈ 0 ✓",
    };
    let interval_view = product_panel(
        format!(
            "∫{} = {:.6} {}",
            first_quarter.interval_text(),
            first_quarter.value(),
            quarter_suffix
        ),
        PRODUCT,
    )
    .tone(quarter_tone)
    .with_series(ctx.section(&product, half, StyleHint::line(ColorHint::DarkOrange, 4.0)))
    .with_area(
        AreaSpec::new(ctx.times(), &product.values, FillRegion::Section(quarter), StyleHint::fill(ColorHint::Orange, 0.6))
            .label(format!("∫{} = {:.4}", first_quarter.interval_text(), first_quarter.value())),
    )
    .with_area(
        AreaSpec::new(
            ctx.times(),
            &product.values,
            FillRegion::Section(second_quarter),
            StyleHint::fill(ColorHint::LightBlue, 0.6),
        )
        .label(format!("∫{} = {:.4}", rest.interval_text(), rest.value())),
    )
    .with_annotation(
        TextAnnotation::new(
            format!("∫{} = {:.6} {}", first_half.interval_text(), first_half.value(), half_suffix),
            0.5,
            0.9,
        )
        .size(12.0),
    )
    .x_label(TIME)
    .x_limits(0.0, 0.5);

    Ok(ExampleOutput {
        signals: vec![f1, f2, product],
        integrals: vec![full, first_half, first_quarter, rest],
        panels: vec![originals, full_view, interval_view],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ov_core::{TimeGrid, Tolerance};
    use std::f64::consts::PI;

    #[test]
    fn test_interval_changes_the_verdict() {
        let grid = TimeGrid::default();
        let output = compute(&Ctx { grid: &grid, tolerance: Tolerance::default() }).unwrap();

        let full = output.integral(labels::FULL).unwrap();
        let half = output.integral(labels::FIRST_HALF).unwrap();
        let quarter = output.integral(labels::FIRST_QUARTER).unwrap();
        let rest = output.integral(labels::SECOND_QUARTER).unwrap();

        assert!(full.is_approximately_zero());
        assert!(half.is_approximately_zero());
        assert!(half.value().abs() < 1e-3);

        // ∫₀^¼ ½·sin(4πt) dt = 1/(4π)
        assert!(quarter.value() > 0.05);
        assert!((quarter.value() - 1.0 / (4.0 * PI)).abs() < 1e-3);
        assert!(!quarter.is_approximately_zero());

        assert!((quarter.value() + rest.value() - half.value()).abs() < 1e-12);
        assert_eq!(output.panels[2].tone, Tone::Rejected);
    }
}
