use shape_layout::{format_width, Ranking};
use width_parser::SeriesSet;

use crate::app::common::to_color32;

impl super::Legend {
    pub fn render(&mut self, series: &SeriesSet, ranking: &Ranking, ctx: &egui::Context) {
        // The palette is made for a white background.
        let frame = egui::Frame::window(&ctx.style()).fill(egui::Color32::WHITE);
        egui::Window::new("Legend")
            .open(&mut self.open)
            .resizable(false)
            .default_pos([50.0, 260.0])
            .frame(frame)
            .show(ctx, |ui| {
                let rows = super::legend_rows(series, ranking);
                if rows.is_empty() {
                    ui.label(egui::RichText::new("no data").color(egui::Color32::BLACK));
                }
                for row in rows {
                    ui.label(egui::RichText::new(&row.label).color(to_color32(row.color)))
                        .on_hover_text(format!(
                            "{}, peak {}",
                            row.color.name(),
                            format_width(row.peak)
                        ));
                }
            });
    }
}
