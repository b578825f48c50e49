//! Engine settings

use serde::{Deserialize, Serialize};

use crate::grid::TimeGrid;
use crate::integral::Tolerance;

/// Numeric settings fixed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Number of samples on the shared grid
    pub sample_count: usize,

    /// Grid domain `[start, end]`
    pub domain: (f64, f64),

    /// Tolerance for the "approximately zero" classification
    pub tolerance: Tolerance,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            sample_count: 1000,
            domain: (0.0, 1.0),
            tolerance: Tolerance::default(),
        }
    }
}

impl EngineSettings {
    /// Build the shared, inclusive time grid
    pub fn build_grid(&self) -> TimeGrid {
        TimeGrid::linspace(self.domain.0, self.domain.1, self.sample_count)
    }
}
