//! Main application entry point

use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, CentralPanel, Context, SidePanel};
use tracing::{error, info};

use ov_catalog::Catalog;
use ov_core::{EngineSettings, PresentationAdapter, SelectionEngine};
use ov_ui::{keyboard_request, menu_bar, status_bar, ExampleSelector, SelectionRequest, StatusMessage};
use ov_views::{PlotRenderer, Viewport};

mod settings;

use settings::AppSettings;

/// Main application state
struct OrthogonalityApp {
    /// Owns the active example and its computed output
    engine: SelectionEngine<Catalog>,

    /// Subscribed to the engine; holds the frame to paint
    adapter: Arc<PresentationAdapter<PlotRenderer>>,

    viewport: Viewport,
    selector: ExampleSelector,

    /// Selector labels in catalog order
    labels: Vec<&'static str>,

    status: StatusMessage,
    settings: AppSettings,

    /// Renderer generation at the last requested repaint
    painted_generation: u64,
}

impl OrthogonalityApp {
    fn new(engine_settings: &EngineSettings, settings: AppSettings) -> Result<Self> {
        let grid = Arc::new(engine_settings.build_grid());
        let catalog = Catalog::new(engine_settings.tolerance);
        let labels = catalog.entries().iter().map(|entry| entry.label()).collect();

        let mut engine = SelectionEngine::new(catalog, grid)?;
        let adapter = Arc::new(PresentationAdapter::new(PlotRenderer::new()));
        engine.add_subscriber(adapter.clone());

        // First paint shows example 0
        engine.refresh();

        let status = StatusMessage::info(engine.current().title.clone());
        let painted_generation = adapter.with_renderer(|renderer| renderer.generation());
        Ok(Self {
            engine,
            adapter,
            viewport: Viewport::new(),
            selector: ExampleSelector::new(),
            labels,
            status,
            settings,
            painted_generation,
        })
    }

    /// Single entry point for every selection input
    fn handle_request(&mut self, ctx: &Context, request: SelectionRequest) {
        let index = request.resolve(self.engine.state().active);
        match self.engine.select(index) {
            Ok(event) => {
                self.status = StatusMessage::info(format!(
                    "{}  ·  {} integral(s)  ·  {} frame(s) rendered",
                    event.title,
                    event.output.integrals.len(),
                    self.adapter.frames_delivered()
                ));
                if self.frame_changed() {
                    ctx.request_repaint();
                }
            }
            Err(e) => {
                self.status = StatusMessage::error(e.to_string());
            }
        }
    }

    /// True once per new frame delivered to the renderer
    fn frame_changed(&mut self) -> bool {
        let generation = self.adapter.with_renderer(|renderer| renderer.generation());
        let changed = generation != self.painted_generation;
        self.painted_generation = generation;
        changed
    }
}

impl eframe::App for OrthogonalityApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let active = self.engine.state().active;
        let mut request = keyboard_request(ctx);

        if self.settings.shell.show_menu_bar {
            request = menu_bar(ctx, &self.labels, active).or(request);
        }
        if self.settings.shell.show_status_bar {
            status_bar(ctx, &self.status);
        }

        SidePanel::right("example_selector")
            .resizable(false)
            .default_width(190.0)
            .show(ctx, |ui| {
                if let Some(clicked) = self.selector.ui(ui, &self.labels, active) {
                    request = Some(clicked);
                }
            });

        CentralPanel::default().show(ctx, |ui| {
            self.adapter.with_renderer(|renderer| self.viewport.ui(ui, renderer.latest()));
        });

        if let Some(request) = request {
            self.handle_request(ctx, request);
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let engine_settings = EngineSettings::default();
    let settings = AppSettings::default();
    info!(
        samples = engine_settings.sample_count,
        tolerance = engine_settings.tolerance.relative,
        "Starting {}",
        settings.title
    );

    let app = OrthogonalityApp::new(&engine_settings, settings.clone()).map_err(|e| {
        error!(error = %e, "Failed to build the example catalog");
        e
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size(settings.min_window_size)
            .with_title(settings.title.clone()),
        default_theme: settings.eframe_theme(),
        persist_window: false,
        ..Default::default()
    };

    let theme = settings.theme();
    eframe::run_native(
        &settings.title,
        options,
        Box::new(move |cc| {
            ov_ui::apply_theme(&cc.egui_ctx, &theme);
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    info!("Shut down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> OrthogonalityApp {
        OrthogonalityApp::new(&EngineSettings::default(), AppSettings::default()).unwrap()
    }

    #[test]
    fn test_initial_frame_is_already_painted() {
        let mut app = app();
        assert!(!app.frame_changed());
        assert_eq!(app.adapter.frames_delivered(), 1);
    }

    #[test]
    fn test_each_selection_changes_the_frame_once() {
        let mut app = app();
        app.engine.select(3).unwrap();
        assert!(app.frame_changed());
        assert!(!app.frame_changed());

        // Reselecting recomputes and delivers a fresh frame
        app.engine.select(3).unwrap();
        assert!(app.frame_changed());
    }

    #[test]
    fn test_rejected_selection_keeps_the_frame() {
        let mut app = app();
        assert!(app.engine.select(8).is_err());
        assert!(!app.frame_changed());
        app.adapter.with_renderer(|renderer| {
            assert_eq!(renderer.latest().unwrap().title, app.engine.current().title);
        });
    }
}
