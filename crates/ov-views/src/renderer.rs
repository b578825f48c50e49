//! egui-backed renderer for the presentation adapter

use ov_core::{Frame, PanelDescriptor, Renderer};
use tracing::trace;

/// Keeps the most recent frame for the next paint
///
/// `render` is called from selection events; the UI thread reads the frame
/// back through [`PlotRenderer::latest`] when it repaints.
#[derive(Debug, Default)]
pub struct PlotRenderer {
    latest: Option<Frame>,
    generation: u64,
}

impl PlotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&Frame> {
        self.latest.as_ref()
    }

    /// Incremented on every render call
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Renderer for PlotRenderer {
    fn render(&mut self, panels: &[PanelDescriptor], title: &str) {
        self.generation += 1;
        trace!(generation = self.generation, title, "Frame replaced");
        self.latest = Some(Frame::new(panels, title));
    }
}
