//! Example selection: state, outputs and the recompute-and-notify engine

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ShapeError;
use crate::grid::TimeGrid;
use crate::integral::IntegralResult;
use crate::panel::PanelDescriptor;
use crate::signal::Signal;

mod engine;
mod subscriber;

pub use engine::SelectionEngine;
pub use subscriber::SelectionSubscriber;

/// Index of an entry in the example catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExampleId(pub usize);

impl ExampleId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ExampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The only mutable piece of process state: which example is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub active: ExampleId,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self { active: ExampleId(0) }
    }
}

/// Everything an example computes from the grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleOutput {
    pub signals: Vec<Signal>,
    pub integrals: Vec<IntegralResult>,
    pub panels: Vec<PanelDescriptor>,
}

impl ExampleOutput {
    pub fn signal(&self, label: &str) -> Option<&Signal> {
        self.signals.iter().find(|s| s.label == label)
    }

    pub fn integral(&self, label: &str) -> Option<&IntegralResult> {
        self.integrals.iter().find(|i| i.label() == label)
    }
}

/// Source of examples the selection engine dispatches to
pub trait ScenarioCatalog {
    /// Number of registered examples
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Page title of an example; `id` is always in range
    fn title(&self, id: ExampleId) -> &str;

    /// Run an example's computation against the shared grid
    fn compute(&self, id: ExampleId, grid: &TimeGrid) -> Result<ExampleOutput, ShapeError>;
}

/// Event emitted after every successful selection
#[derive(Debug, Clone, PartialEq)]
pub struct Recomputed {
    pub id: ExampleId,
    pub title: String,
    pub output: Arc<ExampleOutput>,
}
