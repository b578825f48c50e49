//! sin²(2πt): a function is never orthogonal to itself

use ov_core::{
    mean_value, AreaSpec, ColorHint, ExampleOutput, FillRegion, GuideLine, PanelDescriptor, ShapeError, StyleHint,
    Waveform,
};

use super::{verdict, Ctx, AMPLITUDE, TIME, UNIT_LIMITS};
use crate::labels;

pub fn compute(ctx: &Ctx<'_>) -> Result<ExampleOutput, ShapeError> {
    let sine = Waveform::sine_hz(1.0);
    let f1 = ctx.sample(&sine, "sin(2πt)");
    let squared = f1.squared("sin²(2πt)");

    // sin²(x) = 0.5 - 0.5·cos(2x)
    let decomposition = ctx.sample(
        &Waveform::Sum(vec![(1.0, Waveform::Constant(0.5)), (-0.5, Waveform::cosine_hz(2.0))]),
        "0.5 - 0.5cos(4πt)",
    );

    let full = ctx.integral(labels::FULL, &squared, None)?;
    let decomposed = ctx.integral(labels::DECOMPOSITION, &decomposition, None)?;
    let dc = mean_value(&squared.values, ctx.grid, None)?;

    let dc_guide = |label: String| {
        GuideLine::at(dc, StyleHint::line(ColorHint::Green, 2.0).dashed().opacity(0.7)).label(label)
    };

    let original = PanelDescriptor::new("Original Function: sin(2πt)")
        .with_series(ctx.series(&f1, StyleHint::line(ColorHint::Blue, 3.0)).label("sin(2πt)"))
        .with_guide(GuideLine::at(0.0, StyleHint::line(ColorHint::Black, 2.0).dashed().opacity(0.5)))
        .y_label(AMPLITUDE)
        .y_limits(UNIT_LIMITS.0, UNIT_LIMITS.1);

    let (suffix, tone) = verdict(&full);
    let square_view = PanelDescriptor::new(format!("sin²(2πt): ∫ = {:.4} {}", full.value(), suffix))
        .tone(tone)
        .with_series(ctx.series(&squared, StyleHint::line(ColorHint::Red, 4.0)))
        .with_area(AreaSpec::new(ctx.times(), &squared.values, FillRegion::All, StyleHint::fill(ColorHint::Red, 0.6)))
        .with_guide(dc_guide(format!("Mean Value = {dc:.1}")))
        .y_label("sin²(2πt)");

    let decomposition_view = PanelDescriptor::new("Decomposition: sin²(x) = 0.5 - 0.5cos(2x)")
        .with_series(
            ctx.series(&decomposition, StyleHint::line(ColorHint::Purple, 3.0))
                .label("0.5 - 0.5cos(4πt)"),
        )
        .with_guide(dc_guide(format!("DC Component ({dc:.1})")))
        .y_label(AMPLITUDE)
        .x_label(TIME)
        .y_limits(-0.2, 1.2);

    Ok(ExampleOutput {
        signals: vec![f1, squared, decomposition],
        integrals: vec![full, decomposed],
        panels: vec![original, square_view, decomposition_view],
    })
}
