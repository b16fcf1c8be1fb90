use derive_new::new;
use shape_layout::{DisplayConfig, DrawMode};

use super::{components::parse_max_width, VisuApp};
use app_core::event::AppEvent;

// ---------------------------------------------------------------------------
//
//
// EventQueue
//
//
// ---------------------------------------------------------------------------

/// The EventQueue stores events that are processed each iteration
/// of the application GUI event loop.
pub struct EventQueue<App> {
    /// Stores events for later processing.
    queue: Vec<Box<dyn AppEvent<App = App>>>,
}

impl<App> EventQueue<App> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = App>>) {
        self.queue.push(event);
    }
}

impl VisuApp {
    pub fn run_events(&mut self) {
        // Events are applied in the order they were queued, so that the last
        // click on "Repaint" wins.
        let events = std::mem::take(&mut self.event_queue.queue);
        for mut event in events {
            match event.apply(self) {
                Ok(()) => self.request_redraw(),
                Err(err) => log::error!("event failed: {}", err),
            }
        }
    }
}

// ---------------------------------------------------------------------------
//
//
// Events
//
//
// ---------------------------------------------------------------------------

/// Commit the settings of the control panel as the new display configuration.
///
/// The configuration is replaced as a whole. If the maximum width is not a
/// number, nothing changes and no redraw happens.
#[derive(new)]
pub struct ApplyDisplayConfig {
    max_width_text: String,
    spacing: u32,
    combine_colors: bool,
}

// ---------------------------------------------------------------------------
//
//
// apply()
//
//
// ---------------------------------------------------------------------------

impl AppEvent for ApplyDisplayConfig {
    type App = VisuApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<(), String> {
        let max_width = match parse_max_width(&self.max_width_text) {
            Ok(max_width) => max_width,
            Err(err) => {
                app.control_panel.set_status(Some(err.clone()));
                return Err(err);
            }
        };
        let config = DisplayConfig::new(
            max_width,
            self.spacing,
            DrawMode::from_combine_colors(self.combine_colors),
        );
        log::info!("applying display configuration {:?}", config);
        app.display = config;
        app.control_panel.set_status(None);
        Ok(())
    }
}
