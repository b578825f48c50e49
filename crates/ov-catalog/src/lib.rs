//! Example catalog for the orthogonality explorer
//!
//! This crate registers the eight worked examples. Each one is a pure
//! function of the shared time grid producing its signals, its integrals and
//! three panel descriptors.

use ov_core::{ExampleId, ExampleOutput, ScenarioCatalog, ShapeError, TimeGrid, Tolerance};
use serde::{Deserialize, Serialize};
use tracing::debug;

mod scenarios;

pub use scenarios::fourier::projection_coefficients;

/// Labels of the integrals examples report, shared with callers that look
/// results up by name
pub mod labels {
    pub const FULL: &str = "full interval";
    pub const FIRST_HALF: &str = "first half";
    pub const FIRST_QUARTER: &str = "first quarter";
    pub const SECOND_QUARTER: &str = "second quarter";
    pub const POSITIVE_AREA: &str = "positive area";
    pub const NEGATIVE_AREA: &str = "negative area";
    pub const DECOMPOSITION: &str = "decomposition";
}

/// The eight example kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExampleKind {
    /// cos(4πt) against sin(2πt), on the full and half interval
    Principal,
    /// sin(2πt) against sin(4πt), with the positive/negative area split
    OrthogonalSines,
    /// cos(2πt) against cos(6πt), cancellation by sections
    OrthogonalCosines,
    /// sin(2πt) against cos(4πt), and the general identity
    SineCosine,
    /// sin(2πt) against itself
    SelfProduct,
    /// cos(2πt) against sin(2πt) on shrinking intervals
    IntervalDependence,
    /// sin(20πt) against sin(21πt), the beat envelope
    NearFrequencies,
    /// Square wave and its odd-harmonic partial sum
    FourierDecomposition,
}

impl ExampleKind {
    pub const ALL: [ExampleKind; 8] = [
        ExampleKind::Principal,
        ExampleKind::OrthogonalSines,
        ExampleKind::OrthogonalCosines,
        ExampleKind::SineCosine,
        ExampleKind::SelfProduct,
        ExampleKind::IntervalDependence,
        ExampleKind::NearFrequencies,
        ExampleKind::FourierDecomposition,
    ];

    /// Page title shown above the panels
    pub fn title(self) -> &'static str {
        match self {
            ExampleKind::Principal => "Main Example: cos(4πt) × sin(2πt)",
            ExampleKind::OrthogonalSines => "Orthogonal Sines: sin(2πt) × sin(4πt)",
            ExampleKind::OrthogonalCosines => "Orthogonal Cosines: cos(2πt) × cos(6πt)",
            ExampleKind::SineCosine => "Sine × Cosine: sin(2πt) × cos(4πt)",
            ExampleKind::SelfProduct => "Non-Orthogonal: sin²(2πt)",
            ExampleKind::IntervalDependence => "Unsuitable Interval: Detailed Analysis",
            ExampleKind::NearFrequencies => "Close Frequencies: Beat Effect",
            ExampleKind::FourierDecomposition => "Trigonometric Decomposition",
        }
    }

    /// Short label for selector buttons
    pub fn label(self) -> &'static str {
        match self {
            ExampleKind::Principal => "Main Example",
            ExampleKind::OrthogonalSines => "Orthogonal Sines",
            ExampleKind::OrthogonalCosines => "Orthogonal Cosines",
            ExampleKind::SineCosine => "Sine × Cosine",
            ExampleKind::SelfProduct => "sin² (Non-Orth.)",
            ExampleKind::IntervalDependence => "Bad Interval",
            ExampleKind::NearFrequencies => "Close Freqs.",
            ExampleKind::FourierDecomposition => "Decomposition",
        }
    }

    /// Run the example against `grid`
    pub fn compute(self, grid: &TimeGrid, tolerance: Tolerance) -> Result<ExampleOutput, ShapeError> {
        let ctx = scenarios::Ctx { grid, tolerance };
        match self {
            ExampleKind::Principal => scenarios::principal::compute(&ctx),
            ExampleKind::OrthogonalSines => scenarios::sines::compute(&ctx),
            ExampleKind::OrthogonalCosines => scenarios::cosines::compute(&ctx),
            ExampleKind::SineCosine => scenarios::sine_cosine::compute(&ctx),
            ExampleKind::SelfProduct => scenarios::squared::compute(&ctx),
            ExampleKind::IntervalDependence => scenarios::interval::compute(&ctx),
            ExampleKind::NearFrequencies => scenarios::beat::compute(&ctx),
            ExampleKind::FourierDecomposition => scenarios::fourier::compute(&ctx),
        }
    }
}

/// A registered example
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleDefinition {
    pub id: ExampleId,
    pub kind: ExampleKind,
}

impl ExampleDefinition {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// The fixed, ordered collection of examples
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ExampleDefinition>,
    tolerance: Tolerance,
}

impl Catalog {
    /// All eight examples, in presentation order
    pub fn new(tolerance: Tolerance) -> Self {
        let entries = ExampleKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &kind)| ExampleDefinition { id: ExampleId(i), kind })
            .collect();
        Self { entries, tolerance }
    }

    pub fn entries(&self) -> &[ExampleDefinition] {
        &self.entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Tolerance::default())
    }
}

impl ScenarioCatalog for Catalog {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn title(&self, id: ExampleId) -> &str {
        self.entries[id.index()].title()
    }

    fn compute(&self, id: ExampleId, grid: &TimeGrid) -> Result<ExampleOutput, ShapeError> {
        let kind = self.entries[id.index()].kind;
        debug!(example = %id, ?kind, samples = grid.len(), "Computing example");
        kind.compute(grid, self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ov_core::{PresentationAdapter, Renderer, PanelDescriptor, SelectionEngine, SelectionError};
    use std::collections::HashSet;
    use std::sync::Arc;

    #[derive(Default)]
    struct TitleLog {
        titles: Vec<String>,
        panel_counts: Vec<usize>,
    }

    impl Renderer for TitleLog {
        fn render(&mut self, panels: &[PanelDescriptor], title: &str) {
            self.titles.push(title.to_string());
            self.panel_counts.push(panels.len());
        }
    }

    fn engine() -> SelectionEngine<Catalog> {
        SelectionEngine::new(Catalog::default(), Arc::new(TimeGrid::default())).unwrap()
    }

    #[test]
    fn test_catalog_has_eight_distinct_entries() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 8);
        let titles: HashSet<_> = catalog.entries().iter().map(|e| e.title()).collect();
        let labels: HashSet<_> = catalog.entries().iter().map(|e| e.label()).collect();
        assert_eq!(titles.len(), 8);
        assert_eq!(labels.len(), 8);
        for (i, entry) in catalog.entries().iter().enumerate() {
            assert_eq!(entry.id, ExampleId(i));
        }
    }

    #[test]
    fn test_every_example_produces_three_panels() {
        let grid = TimeGrid::default();
        let catalog = Catalog::default();
        for entry in catalog.entries() {
            let output = catalog.compute(entry.id, &grid).unwrap();
            assert_eq!(output.panels.len(), 3, "{}", entry.title());
            assert!(output.signals.len() >= 2, "{}", entry.title());
            for signal in &output.signals {
                assert_eq!(signal.len(), grid.len(), "{} / {}", entry.title(), signal.label);
            }
        }
    }

    #[test]
    fn test_full_interval_orthogonality() {
        let grid = TimeGrid::default();
        let catalog = Catalog::default();
        for id in [0, 1, 2, 3, 5] {
            let output = catalog.compute(ExampleId(id), &grid).unwrap();
            let full = output.integral(labels::FULL).unwrap();
            assert!(full.value().abs() < 1e-3, "example {id}: {}", full.value());
            assert!(full.is_approximately_zero(), "example {id}");
        }
    }

    #[test]
    fn test_select_each_example() {
        let mut engine = engine();
        for i in 0..8 {
            let event = engine.select(i).unwrap();
            assert_eq!(engine.state().active, ExampleId(i as usize));
            assert_eq!(event.title, ExampleKind::ALL[i as usize].title());
        }
    }

    #[test]
    fn test_invalid_selection_keeps_state() {
        let mut engine = engine();
        engine.select(4).unwrap();
        assert_eq!(engine.select(8), Err(SelectionError::OutOfRange { index: 8, len: 8 }));
        assert_eq!(engine.select(-1), Err(SelectionError::OutOfRange { index: -1, len: 8 }));
        assert_eq!(engine.state().active, ExampleId(4));
    }

    #[test]
    fn test_reselection_is_deterministic() {
        let mut engine = engine();
        for k in 0..8 {
            let first = engine.select(k).unwrap();
            let second = engine.select(k).unwrap();
            let a = serde_json::to_string(&first.output.panels).unwrap();
            let b = serde_json::to_string(&second.output.panels).unwrap();
            assert_eq!(a, b, "example {k}");
            assert_eq!(first.output, second.output);
        }
    }

    #[test]
    fn test_sines_end_to_end() {
        let mut engine = engine();
        let adapter = Arc::new(PresentationAdapter::new(TitleLog::default()));
        engine.add_subscriber(adapter.clone());

        let event = engine.select(1).unwrap();
        let output = &event.output;
        assert!(output.signal("sin(2πt)").is_some());
        assert!(output.signal("sin(4πt)").is_some());

        let full = output.integral(labels::FULL).unwrap();
        assert!(full.value().abs() < 1e-3);

        let positive = output.integral(labels::POSITIVE_AREA).unwrap().value();
        let negative = output.integral(labels::NEGATIVE_AREA).unwrap().value();
        assert!(positive > 0.1);
        assert!(negative < -0.1);
        assert!((positive + negative).abs() < 1e-3);

        adapter.with_renderer(|log| {
            assert_eq!(log.titles, vec![ExampleKind::OrthogonalSines.title().to_string()]);
            assert_eq!(log.panel_counts, vec![3]);
        });
    }

    #[test]
    fn test_refresh_renders_initial_example() {
        let mut engine = engine();
        let adapter = Arc::new(PresentationAdapter::new(TitleLog::default()));
        engine.add_subscriber(adapter.clone());
        engine.refresh();
        adapter.with_renderer(|log| {
            assert_eq!(log.titles, vec![ExampleKind::Principal.title().to_string()]);
        });
    }
}
