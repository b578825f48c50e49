//! cos(2πt) × cos(6πt): fast oscillation cancelling section by section

use ov_core::{AreaSpec, ColorHint, ExampleOutput, FillRegion, ShapeError, StyleHint, Waveform};

use super::{originals_panel, product_panel, verdict, Ctx, PRODUCT, TIME};
use crate::labels;

/// Samples per highlighted section
const SECTION_SIZE: usize = 100;

pub fn compute(ctx: &Ctx<'_>) -> Result<ExampleOutput, ShapeError> {
    let f1 = ctx.sample(&Waveform::cosine_hz(1.0), "cos(2πt)");
    let f2 = ctx.sample(&Waveform::cosine_hz(3.0), "cos(6πt)");
    let product = f1.product(&f2, "cos(2πt) × cos(6πt)")?;

    let full = ctx.integral(labels::FULL, &product, None)?;

    let originals = originals_panel(
        ctx,
        "Cosines with Different Frequencies (n ≠ m)",
        &[
            (&f1, ColorHint::Blue, "cos(2πt) - freq = 1 Hz"),
            (&f2, ColorHint::Red, "cos(6πt) - freq = 3 Hz"),
        ],
        3.0,
    );

    let times = ctx.times();
    let (suffix, tone) = verdict(&full);
    let product_view = product_panel(format!("cos(2πt) × cos(6πt): ∫ = {:.8} {}", full.value(), suffix), PRODUCT)
        .tone(tone)
        .with_series(ctx.series(&product, StyleHint::line(ColorHint::Green, 3.0)))
        .with_area(AreaSpec::new(times, &product.values, FillRegion::All, StyleHint::fill(ColorHint::Green, 0.5)));

    let sections = ctx
        .grid
        .full_range()
        .sections(SECTION_SIZE)
        .into_iter()
        .enumerate()
        .fold(
            product_panel("Fast Oscillations: Cancellation by Sections", PRODUCT)
                .with_series(ctx.series(&product, StyleHint::line(ColorHint::Green, 2.0).opacity(0.8))),
            |panel, (i, range)| {
                let color = if i % 2 == 0 { ColorHint::LightBlue } else { ColorHint::LightCoral };
                panel.with_area(AreaSpec::new(
                    times,
                    &product.values,
                    FillRegion::Section(range),
                    StyleHint::fill(color, 0.4),
                ))
            },
        )
        .x_label(TIME);

    Ok(ExampleOutput {
        signals: vec![f1, f2, product],
        integrals: vec![full],
        panels: vec![originals, product_view, sections],
    })
}
