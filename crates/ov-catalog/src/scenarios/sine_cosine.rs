//! sin(2πt) × cos(4πt), and the sine/cosine orthogonality identity

use ov_core::{
    AreaSpec, ColorHint, ExampleOutput, FillRegion, PanelDescriptor, ShapeError, StyleHint, TextAnnotation, Waveform,
};

use super::{originals_panel, product_panel, verdict, Ctx, PRODUCT};
use crate::labels;

pub fn compute(ctx: &Ctx<'_>) -> Result<ExampleOutput, ShapeError> {
    let f1 = ctx.sample(&Waveform::sine_hz(1.0), "sin(2πt)");
    let f2 = ctx.sample(&Waveform::cosine_hz(2.0), "cos(4πt)");
    let product = f1.product(&f2, "sin(2πt) × cos(4πt)")?;

    let full = ctx.integral(labels::FULL, &product, None)?;

    let originals = originals_panel(
        ctx,
        "Sine × Cosine (ALWAYS Orthogonal)",
        &[(&f1, ColorHint::Blue, "sin(2πt)"), (&f2, ColorHint::Red, "cos(4πt)")],
        3.0,
    );

    let (suffix, tone) = verdict(&full);
    let product_view = product_panel(format!("sin(2πt) × cos(4πt): ∫ = {:.8} {}", full.value(), suffix), PRODUCT)
        .tone(tone)
        .with_series(ctx.series(&product, StyleHint::line(ColorHint::Brown, 3.0)))
        .with_area(AreaSpec::new(
            ctx.times(),
            &product.values,
            FillRegion::All,
            StyleHint::fill(ColorHint::Brown, 0.5),
        ));

    Ok(ExampleOutput {
        signals: vec![f1, f2, product],
        integrals: vec![full],
        panels: vec![originals, product_view, property_panel()],
    })
}

fn property_panel() -> PanelDescriptor {
    PanelDescriptor::new("")
        .text_only()
        .with_annotation(
            TextAnnotation::new("📋 FUNDAMENTAL PROPERTY:", 0.5, 0.7)
                .size(16.0)
                .strong()
                .background(ColorHint::LightBlue),
        )
        .with_annotation(
            TextAnnotation::new("∫ sin(n·ω₀·t) × cos(m·ω₀·t) dt = 0", 0.5, 0.45)
                .size(18.0)
                .strong()
                .background(ColorHint::Yellow),
        )
        .with_annotation(
            TextAnnotation::new("for ANY value of n and m\n(different or equal frequencies)", 0.5, 0.2)
                .background(ColorHint::LightGreen),
        )
}
