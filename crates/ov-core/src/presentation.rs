//! Presentation adapter: bridges recomputation events to a renderer

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::debug;

use crate::panel::PanelDescriptor;
use crate::selection::{Recomputed, SelectionSubscriber};

/// A drawing backend for panel descriptors
///
/// Rendering is assumed to be synchronous and infallible.
pub trait Renderer: Send {
    fn render(&mut self, panels: &[PanelDescriptor], title: &str);
}

/// One renderable page: a title over its panels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub title: String,
    pub panels: Vec<PanelDescriptor>,
}

impl Frame {
    pub fn new(panels: &[PanelDescriptor], title: &str) -> Self {
        Self {
            title: title.to_string(),
            panels: panels.to_vec(),
        }
    }
}

/// Subscriber that forwards every recomputed example to a [`Renderer`]
pub struct PresentationAdapter<R: Renderer> {
    renderer: Mutex<R>,
    frames: AtomicU64,
}

impl<R: Renderer> PresentationAdapter<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer: Mutex::new(renderer),
            frames: AtomicU64::new(0),
        }
    }

    /// Number of frames handed to the renderer so far
    pub fn frames_delivered(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    /// Run `f` with exclusive access to the renderer
    pub fn with_renderer<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        f(&mut self.renderer.lock())
    }
}

impl<R: Renderer> SelectionSubscriber for PresentationAdapter<R> {
    fn on_recomputed(&self, event: &Recomputed) {
        debug!(example = %event.id, panels = event.output.panels.len(), "Rendering example");
        self.renderer.lock().render(&event.output.panels, &event.title);
        self.frames.fetch_add(1, Ordering::Relaxed);
    }
}
