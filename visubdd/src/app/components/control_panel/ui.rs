use crate::app::{events::ApplyDisplayConfig, events::EventQueue, VisuApp};

use super::SPACING_CHOICES;

impl super::ControlPanel {
    pub fn render(&mut self, event_queue: &mut EventQueue<VisuApp>, ctx: &egui::Context) {
        let mut open = self.open;
        egui::Window::new("Preferences")
            .open(&mut open)
            .resizable(false)
            .default_pos([50.0, 100.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Maximum BDD Width");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.max_width_text).desired_width(100.0),
                    );
                });
                ui.horizontal(|ui| {
                    ui.label("Vertical Stretching");
                    for choice in SPACING_CHOICES {
                        ui.radio_value(&mut self.spacing, choice, choice.to_string());
                    }
                });
                ui.checkbox(&mut self.combine_colors, "Combine Colors");
                if ui.button("Repaint").clicked() {
                    log::debug!("repaint requested from control panel");
                    event_queue.queue_event(Box::new(ApplyDisplayConfig::new(
                        self.max_width_text.clone(),
                        self.spacing,
                        self.combine_colors,
                    )));
                }
                if let Some(status) = &self.status {
                    ui.colored_label(egui::Color32::RED, status);
                }
            });
        self.open = open;
    }
}
