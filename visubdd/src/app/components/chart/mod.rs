mod logic;
mod ui;

use shape_layout::{DisplayConfig, TextLabel};

/// The main chart: a rasterized image of all series, shown in a scroll area.
///
/// The image is split into horizontal strips, each uploaded as its own
/// texture, so that deep BDDs do not exceed the maximum texture size.
pub struct Chart {
    strips: Vec<(egui::TextureHandle, [usize; 2])>,
    labels: Vec<TextLabel>,
    size: [usize; 2],
    /// Viewport width and configuration of the current raster.
    rendered_for: Option<(u32, DisplayConfig)>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            strips: Vec::new(),
            labels: Vec::new(),
            size: [0, 0],
            rendered_for: None,
        }
    }

    /// Force a new raster on the next frame.
    pub fn invalidate(&mut self) {
        self.rendered_for = None;
    }
}
