use crate::{target::RenderTarget, Color, DrawMode};

const BACKGROUND: Color = Color::White;

/// Text that was drawn onto the canvas. Text is not rasterized, the
/// application paints it on top of the pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: i64,
    pub y: i64,
    pub color: Color,
}

/// Software rasterizer for the chart, an RGB buffer with a white background.
///
/// Everything outside of the buffer is clipped, so the layout engine may emit
/// lines of any length.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    rgb: Vec<u8>,
    color: Color,
    mode: DrawMode,
    labels: Vec<TextLabel>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        let rgb = BACKGROUND
            .rgb()
            .iter()
            .copied()
            .cycle()
            .take(width * height * 3)
            .collect();
        Self {
            width,
            height,
            rgb,
            color: Color::Black,
            mode: DrawMode::Overwrite,
            labels: Vec::new(),
        }
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    /// Raw pixels, row major, three bytes per pixel.
    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }

    /// Raw pixels of the rows `rows.start..rows.end` (clamped to the canvas).
    pub fn rgb_rows(&self, rows: std::ops::Range<usize>) -> &[u8] {
        let start = rows.start.min(self.height) * self.width * 3;
        let end = rows.end.min(self.height) * self.width * 3;
        &self.rgb[start..end.max(start)]
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some([self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]])
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    fn plot(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 3;
        let color = self.color.rgb();
        let background = BACKGROUND.rgb();
        for c in 0..3 {
            self.rgb[i + c] = match self.mode {
                DrawMode::Overwrite => color[c],
                DrawMode::Xor => self.rgb[i + c] ^ color[c] ^ background[c],
            };
        }
    }

    /// Walk the major axis of the line, restricted to the part that can hit
    /// the canvas, and round the minor coordinate.
    fn rasterize(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        let x_major = (x2 - x1).abs() >= (y2 - y1).abs();
        // (major, minor) coordinates of both end points
        let (a, b) = if x_major {
            ((x1, y1), (x2, y2))
        } else {
            ((y1, x1), (y2, x2))
        };
        let ((m0, n0), (m1, n1)) = if a.0 <= b.0 { (a, b) } else { (b, a) };
        let limit = (if x_major { self.width } else { self.height }) as i64;
        let lo = m0.max(0);
        let hi = m1.min(limit - 1);
        for m in lo..=hi {
            let n = if m1 == m0 {
                n0
            } else {
                let num = (m - m0) as i128 * (n1 - n0) as i128;
                let den = (m1 - m0) as i128;
                n0 + (2 * num + den).div_euclid(2 * den) as i64
            };
            if x_major {
                self.plot(m, n);
            } else {
                self.plot(n, m);
            }
        }
    }
}

impl RenderTarget for PixelCanvas {
    fn set_draw_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.rasterize(x1, y1, x2, y2);
    }

    fn draw_text(&mut self, text: &str, x: i64, y: i64) {
        self.labels.push(TextLabel {
            text: text.to_owned(),
            x,
            y,
            color: self.color,
        });
    }
}
