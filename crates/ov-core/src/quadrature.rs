//! Composite trapezoidal quadrature over a [`TimeGrid`]

use crate::error::ShapeError;
use crate::grid::{SampleRange, TimeGrid};

/// Integrate sampled `values` over `grid`, optionally restricted to `range`
///
/// Sums `(x[i+1] - x[i]) * (y[i] + y[i+1]) / 2` over consecutive samples in
/// the range. A range holding fewer than two samples yields 0.
pub fn integrate(values: &[f64], grid: &TimeGrid, range: Option<SampleRange>) -> Result<f64, ShapeError> {
    ShapeError::check("integrand", grid.len(), values.len())?;
    Ok(trapezoid(grid.times(), |i| values[i], resolve(grid, range)))
}

/// Integrate the pointwise product `a · b` without materialising it
pub fn integrate_product(a: &[f64], b: &[f64], grid: &TimeGrid, range: Option<SampleRange>) -> Result<f64, ShapeError> {
    ShapeError::check("first factor", grid.len(), a.len())?;
    ShapeError::check("second factor", grid.len(), b.len())?;
    Ok(trapezoid(grid.times(), |i| a[i] * b[i], resolve(grid, range)))
}

/// Average value over the covered span (the DC component)
pub fn mean_value(values: &[f64], grid: &TimeGrid, range: Option<SampleRange>) -> Result<f64, ShapeError> {
    let integral = integrate(values, grid, range)?;
    let width = grid
        .bounds(resolve(grid, range))
        .map(|(lo, hi)| hi - lo)
        .unwrap_or(0.0);
    if width > 0.0 {
        Ok(integral / width)
    } else {
        Ok(0.0)
    }
}

fn resolve(grid: &TimeGrid, range: Option<SampleRange>) -> SampleRange {
    range.unwrap_or_else(|| grid.full_range()).clamp_to(grid.len())
}

fn trapezoid(x: &[f64], y: impl Fn(usize) -> f64, range: SampleRange) -> f64 {
    if range.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    let mut prev = y(range.start);
    for i in range.start + 1..range.end {
        let current = y(i);
        total += (x[i] - x[i - 1]) * (prev + current) * 0.5;
        prev = current;
    }
    total
}
