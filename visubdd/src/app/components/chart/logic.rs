use std::ops::Range;

use shape_layout::{ChartLayout, DisplayConfig, PixelCanvas};
use width_parser::SeriesSet;

/// Egui guarantees at least this texture size on all backends.
pub(super) const MAX_STRIP_ROWS: usize = 2048;

impl super::Chart {
    pub(super) fn needs_update(&self, viewport_width: u32, config: &DisplayConfig) -> bool {
        self.rendered_for != Some((viewport_width, *config))
    }
}

/// Lay out and rasterize all series for the given viewport width.
pub(super) fn rasterize(
    series: &SeriesSet,
    config: &DisplayConfig,
    viewport_width: u32,
) -> PixelCanvas {
    let layout = ChartLayout::new(series, *config, viewport_width);
    let [width, height] = layout.raster_size();
    log::debug!(
        "rasterizing {} series on {}x{} pixels (ranking {:?})",
        series.len(),
        width,
        height,
        layout.ranking().order()
    );
    let mut canvas = PixelCanvas::new(width, height);
    layout.draw(&mut canvas);
    canvas
}

/// Row ranges of at most `max_rows` rows covering `height` rows.
pub(super) fn strip_ranges(height: usize, max_rows: usize) -> Vec<Range<usize>> {
    (0..height)
        .step_by(max_rows.max(1))
        .map(|start| start..(start + max_rows).min(height))
        .collect()
}
