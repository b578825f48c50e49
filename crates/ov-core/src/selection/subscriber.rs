//! Selection subscriber trait

use super::Recomputed;

/// Trait for components that need to respond to example recomputation
pub trait SelectionSubscriber: Send + Sync {
    /// Called after the active example has been recomputed
    fn on_recomputed(&self, event: &Recomputed);
}
