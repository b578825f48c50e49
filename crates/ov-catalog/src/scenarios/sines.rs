//! sin(2πt) × sin(4πt), and how its positive and negative lobes cancel

use ov_core::{AreaSpec, ColorHint, ExampleOutput, FillRegion, ShapeError, StyleHint, Waveform};

use super::{originals_panel, product_panel, verdict, Ctx, PRODUCT, TIME};
use crate::labels;

pub fn compute(ctx: &Ctx<'_>) -> Result<ExampleOutput, ShapeError> {
    let f1 = ctx.sample(&Waveform::sine_hz(1.0), "sin(2πt)");
    let f2 = ctx.sample(&Waveform::sine_hz(2.0), "sin(4πt)");
    let product = f1.product(&f2, "sin(2πt) × sin(4πt)")?;

    let full = ctx.integral(labels::FULL, &product, None)?;

    // Lobes are integrated as clipped copies of the product so that
    // positive + negative reproduces the full integral exactly
    let positive = ctx.integral(labels::POSITIVE_AREA, &product.clip_positive("product ≥ 0"), None)?;
    let negative = ctx.integral(labels::NEGATIVE_AREA, &product.clip_negative("product < 0"), None)?;

    let originals = originals_panel(
        ctx,
        "Sines with Different Frequencies (n ≠ m)",
        &[
            (&f1, ColorHint::Blue, "sin(2πt) - freq = 1 Hz"),
            (&f2, ColorHint::Red, "sin(4πt) - freq = 2 Hz"),
        ],
        3.0,
    );

    let times = ctx.times();
    let (suffix, tone) = verdict(&full);
    let product_view = product_panel(format!("sin(2πt) × sin(4πt): ∫ = {:.8} {}", full.value(), suffix), PRODUCT)
        .tone(tone)
        .with_series(ctx.series(&product, StyleHint::line(ColorHint::Purple, 3.0)))
        .with_area(AreaSpec::new(times, &product.values, FillRegion::All, StyleHint::fill(ColorHint::Purple, 0.5)));

    let cancellation = product_panel("Perfect Cancellation: Area+ + Area- ≈ 0", PRODUCT)
        .with_area(
            AreaSpec::new(times, &product.values, FillRegion::Positive, StyleHint::fill(ColorHint::Blue, 0.7))
                .label(format!("Area + = {:.4}", positive.value())),
        )
        .with_area(
            AreaSpec::new(times, &product.values, FillRegion::Negative, StyleHint::fill(ColorHint::Red, 0.7))
                .label(format!("Area - = {:.4}", negative.value())),
        )
        .x_label(TIME);

    Ok(ExampleOutput {
        signals: vec![f1, f2, product],
        integrals: vec![full, positive, negative],
        panels: vec![originals, product_view, cancellation],
    })
}
