//! Sampled signals and the closed-form waveform vocabulary used to build them

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::grid::TimeGrid;

/// Closed-form description of a waveform
///
/// Every variant is a pure function of `t`, so sampling the same waveform on
/// the same grid is exactly reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Waveform {
    /// `amplitude * sin(angular_frequency * t)`
    Sine { amplitude: f64, angular_frequency: f64 },
    /// `amplitude * cos(angular_frequency * t)`
    Cosine { amplitude: f64, angular_frequency: f64 },
    /// DC offset
    Constant(f64),
    /// `+amplitude` on the first half of each period, `-amplitude` on the second
    Square { amplitude: f64, frequency: f64 },
    /// Pointwise product
    Product(Box<Waveform>, Box<Waveform>),
    /// Pointwise square
    Squared(Box<Waveform>),
    /// Weighted sum of terms
    Sum(Vec<(f64, Waveform)>),
}

impl Waveform {
    /// Unit sine at `hz` cycles per unit time
    pub fn sine_hz(hz: f64) -> Self {
        Waveform::Sine { amplitude: 1.0, angular_frequency: 2.0 * PI * hz }
    }

    /// Unit cosine at `hz` cycles per unit time
    pub fn cosine_hz(hz: f64) -> Self {
        Waveform::Cosine { amplitude: 1.0, angular_frequency: 2.0 * PI * hz }
    }

    pub fn product(a: Waveform, b: Waveform) -> Self {
        Waveform::Product(Box::new(a), Box::new(b))
    }

    pub fn squared(w: Waveform) -> Self {
        Waveform::Squared(Box::new(w))
    }

    /// Fourier partial sum of a unit square wave: `terms` odd harmonics
    /// `(4/π)(1/n) sin(2πn·f·t)` for `n = 1, 3, 5, ...`
    pub fn odd_harmonic_square(terms: usize, frequency: f64) -> Self {
        Waveform::Sum(
            (0..terms)
                .map(|k| {
                    let n = (2 * k + 1) as f64;
                    (4.0 / (PI * n), Waveform::sine_hz(n * frequency))
                })
                .collect(),
        )
    }

    /// Evaluate at a single instant
    pub fn eval(&self, t: f64) -> f64 {
        match self {
            Waveform::Sine { amplitude, angular_frequency } => amplitude * (angular_frequency * t).sin(),
            Waveform::Cosine { amplitude, angular_frequency } => amplitude * (angular_frequency * t).cos(),
            Waveform::Constant(c) => *c,
            Waveform::Square { amplitude, frequency } => {
                let phase = (t * frequency).rem_euclid(1.0);
                if phase < 0.5 { *amplitude } else { -amplitude }
            }
            Waveform::Product(a, b) => a.eval(t) * b.eval(t),
            Waveform::Squared(w) => {
                let v = w.eval(t);
                v * v
            }
            Waveform::Sum(terms) => terms.iter().map(|(k, w)| k * w.eval(t)).sum(),
        }
    }
}

/// A labelled sequence of values aligned 1:1 with a [`TimeGrid`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub label: String,
    pub values: Vec<f64>,
}

/// Sample `waveform` on every point of `grid`
pub fn sample(grid: &TimeGrid, waveform: &Waveform, label: impl Into<String>) -> Signal {
    Signal {
        label: label.into(),
        values: grid.times().iter().map(|&t| waveform.eval(t)).collect(),
    }
}

impl Signal {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self { label: label.into(), values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pointwise product with another signal of the same length
    pub fn product(&self, other: &Signal, label: impl Into<String>) -> Result<Signal, ShapeError> {
        ShapeError::check(&format!("{} × {}", self.label, other.label), self.len(), other.len())?;
        Ok(Signal {
            label: label.into(),
            values: self.values.iter().zip(&other.values).map(|(a, b)| a * b).collect(),
        })
    }

    /// Pointwise square
    pub fn squared(&self, label: impl Into<String>) -> Signal {
        self.map(label, |v| v * v)
    }

    pub fn scaled(&self, factor: f64, label: impl Into<String>) -> Signal {
        self.map(label, |v| v * factor)
    }

    /// Keep the non-negative part, zero elsewhere
    pub fn clip_positive(&self, label: impl Into<String>) -> Signal {
        self.map(label, |v| v.max(0.0))
    }

    /// Keep the non-positive part, zero elsewhere
    pub fn clip_negative(&self, label: impl Into<String>) -> Signal {
        self.map(label, |v| v.min(0.0))
    }

    /// Largest absolute value (0 for an empty signal)
    pub fn peak(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    fn map(&self, label: impl Into<String>, f: impl Fn(f64) -> f64) -> Signal {
        Signal {
            label: label.into(),
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }
}
