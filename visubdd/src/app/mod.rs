pub mod common;
mod components;
pub mod config;
mod events;

use self::components::{Chart, ControlPanel, Legend};
use crate::app::events::EventQueue;
use config::Config;
use shape_layout::{DisplayConfig, Ranking};
use width_parser::SeriesSet;

pub struct VisuApp {
    config: Config,
    series: SeriesSet,
    display: DisplayConfig,
    chart: Chart,
    control_panel: ControlPanel,
    legend: Legend,
    shortcuts_modal_open: bool,
    event_queue: EventQueue<Self>,
    request_redraw: Option<()>,
}

impl VisuApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: Config,
        series: SeriesSet,
        display: DisplayConfig,
    ) -> Self {
        Self::from_parts(config, series, display)
    }

    pub(crate) fn from_parts(config: Config, series: SeriesSet, display: DisplayConfig) -> Self {
        log::info!(
            "showing {} series, initial configuration {:?}",
            series.len(),
            display
        );
        Self {
            config,
            control_panel: ControlPanel::new(&display),
            series,
            display,
            chart: Chart::new(),
            legend: Legend::new(),
            shortcuts_modal_open: false,
            event_queue: EventQueue::<Self>::new(),
            request_redraw: Some(()),
        }
    }

    fn update_state(&mut self) {
        self.run_events();
    }

    pub fn request_redraw(&mut self) {
        self.chart.invalidate();
        self.request_redraw = Some(());
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }

    pub(crate) fn take_redraw_request(&mut self) -> bool {
        self.request_redraw.take().is_some()
    }
}

impl eframe::App for VisuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state();

        if self.take_redraw_request() {
            ctx.request_repaint();
        }

        let mut should_quit = false;

        // Handle keyboard input.
        ctx.input(|i| {
            // Help window.
            if i.key_pressed(egui::Key::F1) {
                self.shortcuts_modal_open = !self.shortcuts_modal_open;
            }
            if i.key_pressed(egui::Key::F2) {
                self.control_panel.open = !self.control_panel.open;
            }
            if i.key_pressed(egui::Key::F3) {
                self.legend.open = !self.legend.open;
            }
            // Close app.
            if i.key_pressed(egui::Key::F10) {
                should_quit = true;
            }
        });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_shortcut_modal(ctx);
            self.menu(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart.render(
                &self.series,
                &self.display,
                self.config.canvas_margin,
                ui,
                ctx,
            );
        });

        self.control_panel.render(&mut self.event_queue, ctx);
        // The ranking is cheap, it is recomputed for every frame.
        let ranking = Ranking::new(&self.series);
        self.legend.render(&self.series, &ranking, ctx);

        if should_quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl VisuApp {
    fn menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                ui.checkbox(&mut self.control_panel.open, "Preferences (F2)");
                ui.checkbox(&mut self.legend.open, "Legend (F3)");
            });

            ui.toggle_value(&mut self.shortcuts_modal_open, "Help (F1)");
        });
    }

    fn render_shortcut_modal(&mut self, ctx: &egui::Context) {
        if self.shortcuts_modal_open
            && egui::Modal::new("shortcut_modal".into())
                .show(ctx, |ui| {
                    ui.heading("Keyboard Shortcuts");
                    ui.separator();
                    ui.label("F1 = Show Keyboard Shortcuts");
                    ui.separator();
                    ui.label("F2 = Toggle Preferences");
                    ui.separator();
                    ui.label("F3 = Toggle Legend");
                    ui.separator();
                    ui.label("F10 = Quit App");
                    ui.separator();
                })
                .should_close()
        {
            self.shortcuts_modal_open = false;
        };
    }
}
