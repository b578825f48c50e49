//! cos(4πt) × sin(2πt): orthogonal over a full period, not over half of it

use ov_core::{AreaSpec, ColorHint, ExampleOutput, FillRegion, ShapeError, StyleHint, Waveform};

use super::{originals_panel, product_panel, verdict, Ctx, TIME};
use crate::labels;

const PRODUCT_LABEL: &str = "cos(4πt) × sin(2πt)";

pub fn compute(ctx: &Ctx<'_>) -> Result<ExampleOutput, ShapeError> {
    let f1 = ctx.sample(&Waveform::cosine_hz(2.0), "cos(4πt)");
    let f2 = ctx.sample(&Waveform::sine_hz(1.0), "sin(2πt)");
    let product = f1.product(&f2, PRODUCT_LABEL)?;

    let half = ctx.grid.span(0.0, 0.5);
    let full = ctx.integral(labels::FULL, &product, None)?;
    let first_half = ctx.integral(labels::FIRST_HALF, &product, Some(half))?;

    let originals = originals_panel(
        ctx,
        "Original Functions",
        &[(&f1, ColorHint::Blue, "cos(4πt)"), (&f2, ColorHint::Red, "sin(2πt)")],
        3.0,
    );

    let (full_verdict, full_tone) = verdict(&full);
    let times = ctx.times();
    let full_panel = product_panel(
        format!("Product on {}: ∫ = {:.8} {}", full.interval_text(), full.value(), full_verdict),
        PRODUCT_LABEL,
    )
    .tone(full_tone)
    .with_series(ctx.series(&product, StyleHint::line(ColorHint::Green, 3.0)))
    .with_area(
        AreaSpec::new(times, &product.values, FillRegion::Positive, StyleHint::fill(ColorHint::DodgerBlue, 0.6))
            .label("Positive Area"),
    )
    .with_area(
        AreaSpec::new(times, &product.values, FillRegion::Negative, StyleHint::fill(ColorHint::Crimson, 0.6))
            .label("Negative Area"),
    );

    let (half_verdict, half_tone) = verdict(&first_half);
    let half_panel = product_panel(
        format!("Product on {}: ∫ = {:.6} {}", first_half.interval_text(), first_half.value(), half_verdict),
        PRODUCT_LABEL,
    )
    .tone(half_tone)
    .with_series(ctx.section(&product, half, StyleHint::line(ColorHint::DarkOrange, 4.0)))
    .with_area(AreaSpec::new(
        ctx.grid.slice(half),
        &product.values[half.start..half.end],
        FillRegion::All,
        StyleHint::fill(ColorHint::Orange, 0.6),
    ))
    .x_label(TIME)
    .x_limits(0.0, 0.5);

    Ok(ExampleOutput {
        signals: vec![f1, f2, product],
        integrals: vec![full, first_half],
        panels: vec![originals, full_panel, half_panel],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ov_core::{TimeGrid, Tolerance, Tone};
    use std::f64::consts::PI;

    #[test]
    fn test_full_period_cancels_half_period_does_not() {
        let grid = TimeGrid::default();
        let output = compute(&Ctx { grid: &grid, tolerance: Tolerance::default() }).unwrap();

        let full = output.integral(labels::FULL).unwrap();
        let half = output.integral(labels::FIRST_HALF).unwrap();
        assert!(full.value().abs() < 1e-3);
        assert!(full.is_approximately_zero());

        // ∫₀^½ cos(4πt)·sin(2πt) dt = -1/(3π)
        assert!(half.value().abs() > 0.1);
        assert!((half.value() + 1.0 / (3.0 * PI)).abs() < 1e-3);
        assert!(!half.is_approximately_zero());

        assert_eq!(output.panels[1].tone, Tone::Confirmed);
        assert_eq!(output.panels[2].tone, Tone::Rejected);
        assert_eq!(output.panels[2].limits.x, Some((0.0, 0.5)));
    }
}
