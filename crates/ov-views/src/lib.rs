//! egui rendering for panel descriptors

pub mod colors;
mod panel_view;
mod renderer;
mod viewport;

pub use panel_view::{fill_strips, resolve_bounds, PanelBounds, PanelView, PanelViewConfig};
pub use renderer::PlotRenderer;
pub use viewport::Viewport;
