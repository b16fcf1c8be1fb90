use egui::{pos2, vec2, Align2, FontId, Rect, Sense, TextureOptions};
use shape_layout::DisplayConfig;
use width_parser::SeriesSet;

use super::logic::{rasterize, strip_ranges, MAX_STRIP_ROWS};
use crate::app::common::to_color32;

const HEADER_FONT_SIZE: f32 = 12.0;

impl super::Chart {
    pub fn render(
        &mut self,
        series: &SeriesSet,
        config: &DisplayConfig,
        canvas_margin: u32,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
    ) {
        // The chart follows the width of the window, not of the scroll area,
        // so it does not shrink when a scroll bar appears.
        let viewport_width = (ctx.screen_rect().width() - canvas_margin as f32).max(0.0) as u32;
        if self.needs_update(viewport_width, config) {
            self.upload(series, config, viewport_width, ctx);
        }

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let [width, height] = self.size;
                let (rect, _) =
                    ui.allocate_exact_size(vec2(width as f32, height as f32), Sense::hover());
                let painter = ui.painter_at(rect);
                let mut top = rect.min.y;
                let full_uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                for (texture, [w, h]) in self.strips.iter() {
                    let strip_rect =
                        Rect::from_min_size(pos2(rect.min.x, top), vec2(*w as f32, *h as f32));
                    painter.image(texture.id(), strip_rect, full_uv, egui::Color32::WHITE);
                    top += *h as f32;
                }
                for label in self.labels.iter() {
                    painter.text(
                        pos2(rect.min.x + label.x as f32, rect.min.y + label.y as f32),
                        Align2::LEFT_BOTTOM,
                        &label.text,
                        FontId::proportional(HEADER_FONT_SIZE),
                        to_color32(label.color),
                    );
                }
            });
    }

    fn upload(
        &mut self,
        series: &SeriesSet,
        config: &DisplayConfig,
        viewport_width: u32,
        ctx: &egui::Context,
    ) {
        let canvas = rasterize(series, config, viewport_width);
        let [width, height] = canvas.size();
        self.strips.clear();
        if width > 0 {
            for (i, rows) in strip_ranges(height, MAX_STRIP_ROWS).into_iter().enumerate() {
                let strip_height = rows.len();
                let image = egui::ColorImage::from_rgb([width, strip_height], canvas.rgb_rows(rows));
                let texture =
                    ctx.load_texture(format!("chart-strip-{i}"), image, TextureOptions::NEAREST);
                self.strips.push((texture, [width, strip_height]));
            }
        }
        self.labels = canvas.labels().to_vec();
        self.size = [width, height];
        self.rendered_for = Some((viewport_width, *config));
    }
}
