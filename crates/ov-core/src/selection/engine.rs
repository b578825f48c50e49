//! Selection engine implementation

use std::sync::{Arc, Weak};

use tracing::{debug, error, info, warn};

use super::{ExampleId, Recomputed, ScenarioCatalog, SelectionState, SelectionSubscriber};
use crate::error::SelectionError;
use crate::grid::TimeGrid;

/// The selection state machine
///
/// Owns the active-example state and the last computed output. Every
/// transition recomputes the target example before touching any state, so a
/// failed computation leaves both untouched.
pub struct SelectionEngine<C: ScenarioCatalog> {
    catalog: C,
    grid: Arc<TimeGrid>,
    state: SelectionState,
    current: Arc<Recomputed>,
    subscribers: Vec<Weak<dyn SelectionSubscriber>>,
}

impl<C: ScenarioCatalog> SelectionEngine<C> {
    /// Create an engine positioned on example 0
    pub fn new(catalog: C, grid: Arc<TimeGrid>) -> Result<Self, SelectionError> {
        let state = SelectionState::default();
        let current = Arc::new(Self::recompute(&catalog, &grid, state.active)?);

        Ok(Self {
            catalog,
            grid,
            state,
            current,
            subscribers: Vec::new(),
        })
    }

    /// Make example `index` active
    ///
    /// Re-selecting the active example recomputes it again.
    pub fn select(&mut self, index: isize) -> Result<Arc<Recomputed>, SelectionError> {
        let id = self.validate(index)?;

        let recomputed = Self::recompute(&self.catalog, &self.grid, id).map_err(|e| {
            error!(example = %id, error = %e, "Recomputation failed, keeping example {}", self.state.active);
            e
        })?;

        self.state.active = id;
        self.current = Arc::new(recomputed);
        info!(example = %id, title = %self.current.title, "Selected example");

        self.notify_subscribers();
        Ok(self.current.clone())
    }

    /// Step forward by one example
    pub fn next(&mut self) -> Result<Arc<Recomputed>, SelectionError> {
        self.select(self.state.active.index() as isize + 1)
    }

    /// Step backward by one example
    pub fn previous(&mut self) -> Result<Arc<Recomputed>, SelectionError> {
        self.select(self.state.active.index() as isize - 1)
    }

    /// Re-deliver the current output to every subscriber
    pub fn refresh(&mut self) {
        self.notify_subscribers();
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn current(&self) -> &Arc<Recomputed> {
        &self.current
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn grid(&self) -> &Arc<TimeGrid> {
        &self.grid
    }

    /// Add a subscriber; it is held weakly and dropped once its owner goes away
    pub fn add_subscriber(&mut self, subscriber: Arc<dyn SelectionSubscriber>) {
        self.subscribers.push(Arc::downgrade(&subscriber));
    }

    fn validate(&self, index: isize) -> Result<ExampleId, SelectionError> {
        let len = self.catalog.len();
        match usize::try_from(index) {
            Ok(i) if i < len => Ok(ExampleId(i)),
            _ => {
                warn!(index, len, "Rejected selection");
                Err(SelectionError::OutOfRange { index, len })
            }
        }
    }

    fn recompute(catalog: &C, grid: &TimeGrid, id: ExampleId) -> Result<Recomputed, SelectionError> {
        if id.index() >= catalog.len() {
            return Err(SelectionError::OutOfRange {
                index: id.index() as isize,
                len: catalog.len(),
            });
        }

        let output = catalog.compute(id, grid)?;
        for integral in &output.integrals {
            debug!(
                example = %id,
                label = integral.label(),
                value = integral.value(),
                approximately_zero = integral.is_approximately_zero(),
                "Integral computed"
            );
        }

        Ok(Recomputed {
            id,
            title: catalog.title(id).to_string(),
            output: Arc::new(output),
        })
    }

    /// Notify all subscribers of the current output
    fn notify_subscribers(&mut self) {
        // Remove any dead weak references
        self.subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in self.subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_recomputed(&self.current);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use crate::selection::ExampleOutput;
    use crate::signal::Signal;
    use parking_lot::Mutex;

    /// Catalog whose entry `broken` always fails with a shape error
    struct StubCatalog {
        titles: Vec<String>,
        broken: Option<usize>,
    }

    impl StubCatalog {
        fn new(len: usize) -> Self {
            Self {
                titles: (0..len).map(|i| format!("Example {i}")).collect(),
                broken: None,
            }
        }
    }

    impl ScenarioCatalog for StubCatalog {
        fn len(&self) -> usize {
            self.titles.len()
        }

        fn title(&self, id: ExampleId) -> &str {
            &self.titles[id.index()]
        }

        fn compute(&self, id: ExampleId, grid: &TimeGrid) -> Result<ExampleOutput, ShapeError> {
            if self.broken == Some(id.index()) {
                return Err(ShapeError::new("stub", grid.len(), 0));
            }
            Ok(ExampleOutput {
                signals: vec![Signal::new(format!("s{}", id), vec![id.index() as f64; grid.len()])],
                ..Default::default()
            })
        }
    }

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<ExampleId>>,
    }

    impl SelectionSubscriber for Recorder {
        fn on_recomputed(&self, event: &Recomputed) {
            self.seen.lock().push(event.id);
        }
    }

    fn engine(len: usize) -> SelectionEngine<StubCatalog> {
        SelectionEngine::new(StubCatalog::new(len), Arc::new(TimeGrid::linspace(0.0, 1.0, 8))).unwrap()
    }

    #[test]
    fn test_starts_on_first_example() {
        let engine = engine(8);
        assert_eq!(engine.state().active, ExampleId(0));
        assert_eq!(engine.current().title, "Example 0");
    }

    #[test]
    fn test_select_every_valid_index() {
        let mut engine = engine(8);
        for i in 0..8 {
            let event = engine.select(i).unwrap();
            assert_eq!(event.id, ExampleId(i as usize));
            assert_eq!(engine.state().active, ExampleId(i as usize));
        }
    }

    #[test]
    fn test_out_of_range_leaves_state_unchanged() {
        let mut engine = engine(8);
        engine.select(3).unwrap();

        assert_eq!(engine.select(8), Err(SelectionError::OutOfRange { index: 8, len: 8 }));
        assert_eq!(engine.select(-1), Err(SelectionError::OutOfRange { index: -1, len: 8 }));
        assert_eq!(engine.state().active, ExampleId(3));
        assert_eq!(engine.current().id, ExampleId(3));
    }

    #[test]
    fn test_failed_recompute_is_atomic() {
        let mut catalog = StubCatalog::new(4);
        catalog.broken = Some(2);
        let mut engine = SelectionEngine::new(catalog, Arc::new(TimeGrid::default())).unwrap();
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());

        engine.select(1).unwrap();
        let before = engine.current().clone();
        assert!(matches!(engine.select(2), Err(SelectionError::Shape(_))));

        assert_eq!(engine.state().active, ExampleId(1));
        assert!(Arc::ptr_eq(&before, engine.current()));
        assert_eq!(*recorder.seen.lock(), vec![ExampleId(1)]);
    }

    #[test]
    fn test_reselect_recomputes_and_notifies() {
        let mut engine = engine(8);
        let recorder = Arc::new(Recorder::default());
        engine.add_subscriber(recorder.clone());

        let first = engine.select(5).unwrap();
        let second = engine.select(5).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
        assert_eq!(*recorder.seen.lock(), vec![ExampleId(5), ExampleId(5)]);
    }

    #[test]
    fn test_next_and_previous_stop_at_ends() {
        let mut engine = engine(3);
        assert!(engine.previous().is_err());
        engine.next().unwrap();
        engine.next().unwrap();
        assert_eq!(engine.state().active, ExampleId(2));
        assert!(engine.next().is_err());
        assert_eq!(engine.state().active, ExampleId(2));
        engine.previous().unwrap();
        assert_eq!(engine.state().active, ExampleId(1));
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut engine = engine(2);
        let kept = Arc::new(Recorder::default());
        engine.add_subscriber(kept.clone());
        {
            let dropped = Arc::new(Recorder::default());
            engine.add_subscriber(dropped.clone());
        }
        engine.refresh();
        assert_eq!(engine.subscribers.len(), 1);
        assert_eq!(*kept.seen.lock(), vec![ExampleId(0)]);
    }

    #[test]
    fn test_empty_catalog_cannot_start() {
        let result = SelectionEngine::new(StubCatalog::new(0), Arc::new(TimeGrid::default()));
        assert!(matches!(result, Err(SelectionError::OutOfRange { index: 0, len: 0 })));
    }
}
