//! Core functionality for the orthogonality explorer
//!
//! This crate provides the numeric model (time grid, sampled signals,
//! trapezoidal quadrature, integral classification), the renderer-agnostic
//! panel descriptors, and the selection state machine that keeps the
//! displayed example consistent with its computed results.

pub mod error;
pub mod grid;
pub mod signal;
pub mod quadrature;
pub mod integral;
pub mod panel;
pub mod selection;
pub mod presentation;
pub mod settings;

// Re-export commonly used types
pub use error::{ShapeError, SelectionError};
pub use grid::{TimeGrid, SampleRange};
pub use signal::{Signal, Waveform, sample};
pub use quadrature::{integrate, integrate_product, mean_value};
pub use integral::{IntegralResult, Tolerance};
pub use panel::{
    PanelDescriptor, SeriesSpec, AreaSpec, FillRegion, GuideLine,
    TextAnnotation, StyleHint, ColorHint, Dash, Tone, AxisLimits,
};
pub use selection::{
    SelectionEngine, SelectionState, SelectionSubscriber, ScenarioCatalog,
    ExampleId, ExampleOutput, Recomputed,
};
pub use presentation::{PresentationAdapter, Renderer, Frame};
pub use settings::EngineSettings;
