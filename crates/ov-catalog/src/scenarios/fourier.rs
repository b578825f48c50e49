//! Square wave and its odd-harmonic Fourier partial sum

use std::f64::consts::PI;

use ov_core::{
    integrate_product, sample, ColorHint, ExampleOutput, PanelDescriptor, SeriesSpec, ShapeError, Signal, StyleHint,
    TextAnnotation, TimeGrid, Waveform,
};

use super::{Ctx, AMPLITUDE, TIME};

const LIMITS: (f64, f64) = (-1.5, 1.5);
const HARMONICS: usize = 5;

/// Sine coefficients `b_n = (2/L)·∫ x(t)·sin(2πnt/L) dt` of `signal` over `grid`
///
/// Projection onto each harmonic is exactly what orthogonality makes
/// possible: every other harmonic integrates away.
pub fn projection_coefficients(grid: &TimeGrid, signal: &Signal, harmonics: &[usize]) -> Result<Vec<(usize, f64)>, ShapeError> {
    let length = grid.length();
    harmonics
        .iter()
        .map(|&n| {
            let basis = sample(grid, &Waveform::sine_hz(n as f64 / length), "basis");
            let projection = integrate_product(&signal.values, &basis.values, grid, None)?;
            Ok((n, 2.0 / length * projection))
        })
        .collect()
}

pub fn compute(ctx: &Ctx<'_>) -> Result<ExampleOutput, ShapeError> {
    // Periodic signal: sample without the repeated end point
    let grid = ctx.grid.half_open();
    let times = grid.times();

    let square = sample(&grid, &Waveform::Square { amplitude: 1.0, frequency: 1.0 }, "square wave");
    let partial = sample(&grid, &Waveform::odd_harmonic_square(HARMONICS, 1.0), "Fourier partial sum");
    let first = sample(
        &grid,
        &Waveform::Sine { amplitude: 4.0 / PI, angular_frequency: 2.0 * PI },
        "first term",
    );

    let coefficients = projection_coefficients(&grid, &square, &[1, 3, 5])?;
    let recovered = coefficients
        .iter()
        .map(|(n, b)| format!("b{n} = {b:.4}"))
        .collect::<Vec<_>>()
        .join("   ");

    let original = PanelDescriptor::new("Original Function (Square Wave)")
        .with_series(thick_line(times, &square, ColorHint::Blue).label("Square Wave"))
        .y_label(AMPLITUDE)
        .y_limits(LIMITS.0, LIMITS.1);

    let approximation = PanelDescriptor::new("Fourier Series Approximation")
        .with_series(
            thick_line(times, &partial, ColorHint::Red)
                .label(format!("Fourier Approximation ({HARMONICS} odd terms, n ≤ {})", 2 * HARMONICS - 1)),
        )
        .y_label(AMPLITUDE)
        .y_limits(LIMITS.0, LIMITS.1);

    let component = PanelDescriptor::new("Single Component of the Fourier Series")
        .with_series(thick_line(times, &first, ColorHint::Green).label("First Term (n=1)"))
        .with_annotation(TextAnnotation::new(format!("Recovered by projection: {recovered}"), 0.5, 0.92).size(12.0))
        .y_label(AMPLITUDE)
        .x_label(TIME)
        .y_limits(LIMITS.0, LIMITS.1);

    Ok(ExampleOutput {
        signals: vec![square, partial, first],
        integrals: Vec::new(),
        panels: vec![original, approximation, component],
    })
}

fn thick_line(times: &[f64], signal: &Signal, color: ColorHint) -> SeriesSpec {
    SeriesSpec::new(times, &signal.values, StyleHint::line(color, 3.0))
}
