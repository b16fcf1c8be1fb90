use width_parser::SeriesSet;

use crate::{color_for_rank, target::RenderTarget, Color, DisplayConfig, Ranking};

/// Horizontal space kept free around the widest possible bar.
const SIDE_PADDING: i64 = 20;
/// First pixel row used by bars, the rows above hold the header.
const TOP_OFFSET: i64 = 20;
/// Extra rows below the deepest level.
const BOTTOM_PADDING: usize = 30;
const HEADER_POSITION: (i64, i64) = (0, 12);
/// Bars longer than this are cut, so that bar end points stay far away from
/// the limits of `i64`.
const MAX_LINE_WIDTH: i64 = i64::MAX / 4;

/// Length in pixels of the bar for `value`, or `None` if `max_width` can not
/// be used as a scale.
///
/// The result lies in `-MAX_LINE_WIDTH..=MAX_LINE_WIDTH`, whatever the value.
pub fn line_width(value: f64, max_width: f64, viewport_width: u32) -> Option<i64> {
    if !(max_width.is_finite() && max_width > 0.0) {
        return None;
    }
    let usable = (viewport_width as i64 - SIDE_PADDING).max(0) as f64;
    let width = (usable / max_width * value).floor();
    if width.is_nan() {
        return Some(0);
    }
    // `as` saturates, the clamp keeps room for centering.
    Some((width as i64).clamp(-MAX_LINE_WIDTH, MAX_LINE_WIDTH))
}

/// Human readable form of a width: integral values keep one decimal
/// (`10.0`), everything else is printed as short as possible.
pub fn format_width(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// One sample of one series, as a horizontally centered bar. The bar covers
/// `thickness` pixel rows starting at `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarGeometry {
    pub rank: usize,
    pub series: usize,
    pub sample: usize,
    pub x_start: i64,
    pub x_end: i64,
    pub y: i64,
    pub thickness: u32,
}

/// Places the series of a `SeriesSet` on a canvas of a given width.
///
/// The ranking is computed anew for every layout, it is cheap and keeps the
/// layout independent of any earlier state.
#[derive(Debug)]
pub struct ChartLayout<'a> {
    set: &'a SeriesSet,
    ranking: Ranking,
    config: DisplayConfig,
    viewport_width: u32,
}

impl<'a> ChartLayout<'a> {
    pub fn new(set: &'a SeriesSet, config: DisplayConfig, viewport_width: u32) -> Self {
        Self {
            set,
            ranking: Ranking::new(set),
            config,
            viewport_width,
        }
    }

    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Full extent of the chart: the viewport width and enough rows for the
    /// longest series.
    pub fn canvas_size(&self) -> [usize; 2] {
        let rows = self.set.max_len() * self.config.spacing() as usize + BOTTOM_PADDING;
        [self.viewport_width as usize, rows]
    }

    /// Like `canvas_size`, but without the rows of samples that are never
    /// drawn because they are beyond the pixel budget.
    pub fn raster_size(&self) -> [usize; 2] {
        let drawn = self.set.max_len().min(self.viewport_width as usize);
        let rows = drawn * self.config.spacing() as usize + BOTTOM_PADDING;
        [self.viewport_width as usize, rows]
    }

    pub fn header(&self) -> String {
        format!("Maximum BDD Width: {}", format_width(self.config.max_width()))
    }

    /// All bars in drawing order: ranks ascending, samples ascending.
    pub fn bars(&self) -> Vec<BarGeometry> {
        let mut bars = Vec::new();
        let max_width = self.config.max_width();
        if !self.config.has_valid_scale() {
            log::debug!("no valid scale ({max_width}), skipping bars");
            return bars;
        }
        let w = self.viewport_width as i64;
        let spacing = self.config.spacing();
        for (rank, idx) in self.ranking.iter() {
            let Some(series) = self.set.series(idx) else {
                continue;
            };
            for (j, value) in series
                .values()
                .iter()
                .enumerate()
                .take(self.viewport_width as usize)
            {
                let Some(width) = line_width(*value, max_width, self.viewport_width) else {
                    continue;
                };
                let x_start = (w - width) / 2;
                bars.push(BarGeometry {
                    rank,
                    series: idx,
                    sample: j,
                    x_start,
                    x_end: x_start + width,
                    y: spacing as i64 * j as i64 + TOP_OFFSET,
                    thickness: spacing,
                });
            }
        }
        bars
    }

    /// Emit the chart to `target`.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.set_draw_mode(self.config.draw_mode());
        target.set_color(Color::Black);
        let (x, y) = HEADER_POSITION;
        target.draw_text(&self.header(), x, y);

        let mut current_rank = None;
        for bar in self.bars() {
            if current_rank != Some(bar.rank) {
                target.set_color(color_for_rank(bar.rank));
                current_rank = Some(bar.rank);
            }
            for k in 0..bar.thickness as i64 {
                target.draw_line(bar.x_start, bar.y + k, bar.x_end, bar.y + k);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandList, DrawCommand, DrawMode, PixelCanvas};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_line_width_is_zero_for_zero() {
        assert_eq!(line_width(0.0, 10.0, 220), Some(0));
        assert_eq!(line_width(10.0, 10.0, 220), Some(200));
        assert_eq!(line_width(5.0, 10.0, 220), Some(100));
        assert_eq!(line_width(1.0, 3.0, 120), Some(33));
    }

    #[test]
    fn test_line_width_is_monotonic() {
        let widths: Vec<i64> = (0..100)
            .map(|v| line_width(v as f64 * 0.37, 17.0, 613).unwrap())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] <= w[1]));
        assert!(widths.last().unwrap() > widths.first().unwrap());
    }

    #[test]
    fn test_line_width_stays_in_range() {
        assert_eq!(line_width(1e300, 1e-300, 220), Some(MAX_LINE_WIDTH));
        assert_eq!(line_width(-1e300, 1e-300, 220), Some(-MAX_LINE_WIDTH));
        assert_eq!(line_width(f64::MAX, 1e-10, 220), Some(MAX_LINE_WIDTH));
    }

    #[test]
    fn test_format_width() {
        assert_eq!(format_width(10.0), "10.0");
        assert_eq!(format_width(10_000_000.0), "10000000.0");
        assert_eq!(format_width(2.5), "2.5");
        assert_eq!(format_width(0.0), "0.0");
        assert_eq!(format_width(1e20), "100000000000000000000");
    }

    #[test]
    fn test_huge_values_are_laid_out_and_drawn() {
        init();
        // A tiny scale blows every bar up far beyond the canvas.
        let set = SeriesSet::from_string("f", "1\n1e30");
        let config = DisplayConfig::for_set(&set).with_max_width(1e-300);
        let layout = ChartLayout::new(&set, config, 220);
        let bars = layout.bars();
        assert_eq!(bars.len(), 2);
        for bar in bars.iter() {
            assert_eq!(bar.x_end - bar.x_start, MAX_LINE_WIDTH);
        }

        let [w, h] = layout.raster_size();
        let mut canvas = PixelCanvas::new(w, h);
        layout.draw(&mut canvas);
        // Both rows are green from border to border.
        assert_eq!(canvas.pixel(0, 20), Some(Color::Green.rgb()));
        assert_eq!(canvas.pixel(219, 22), Some(Color::Green.rgb()));
    }

    #[test]
    fn test_negative_samples_are_not_drawn() {
        init();
        // Negative lines never become samples, only the positive one is laid
        // out and drawn.
        let set = SeriesSet::from_string("f", "1\n-1e30");
        let layout = ChartLayout::new(&set, DisplayConfig::for_set(&set), 220);
        let bars = layout.bars();
        assert_eq!(bars.len(), 1);
        assert_eq!((bars[0].x_start, bars[0].x_end), (10, 210));

        let [w, h] = layout.raster_size();
        let mut canvas = PixelCanvas::new(w, h);
        layout.draw(&mut canvas);
        assert_eq!(canvas.pixel(110, 20), Some(Color::Green.rgb()));
        assert_eq!(canvas.pixel(110, 22), Some(Color::White.rgb()));
    }

    #[test]
    fn test_degenerate_scale() {
        assert_eq!(line_width(3.0, 0.0, 200), None);
        assert_eq!(line_width(3.0, -2.0, 200), None);
        assert_eq!(line_width(3.0, f64::NAN, 200), None);
        // Too narrow viewports leave no room for bars.
        assert_eq!(line_width(3.0, 3.0, 10), Some(0));
    }

    #[test]
    fn test_bars_are_centered_and_stacked() {
        init();
        let set = SeriesSet::from_string("f", "10\n5");
        let config = DisplayConfig::new(10.0, 3, DrawMode::Overwrite);
        let layout = ChartLayout::new(&set, config, 220);
        let bars = layout.bars();
        assert_eq!(bars.len(), 2);
        assert_eq!((bars[0].x_start, bars[0].x_end, bars[0].y), (10, 210, 20));
        assert_eq!((bars[1].x_start, bars[1].x_end, bars[1].y), (60, 160, 23));

        let mut commands = CommandList::new();
        layout.draw(&mut commands);
        let lines = commands.lines();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|(_, [_, y1, _, y2])| y1 == y2));
        let ys: Vec<i64> = lines.iter().map(|(_, [_, y, _, _])| *y).collect();
        assert_eq!(ys, vec![20, 21, 22, 23, 24, 25]);
        assert!(lines.iter().all(|(color, _)| *color == Color::Green));
    }

    #[test]
    fn test_draw_order_and_colors_follow_ranking() {
        init();
        let set = SeriesSet::from_string("f", "1\n#\n4\n#\n2");
        let layout = ChartLayout::new(&set, DisplayConfig::for_set(&set), 100);
        assert_eq!(layout.ranking().order(), &[1, 2, 0]);

        let mut commands = CommandList::new();
        layout.draw(&mut commands);
        let colors: Vec<Color> = commands
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::SetColor(c) => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(
            colors,
            vec![Color::Black, Color::Green, Color::Red, Color::Blue]
        );
        let series: Vec<usize> = layout.bars().iter().map(|bar| bar.series).collect();
        assert_eq!(series, vec![1, 2, 0]);
    }

    #[test]
    fn test_header_and_mode_come_first() {
        let set = SeriesSet::from_string("f", "5\n10");
        let config = DisplayConfig::for_set(&set).with_draw_mode(DrawMode::Xor);
        let mut commands = CommandList::new();
        ChartLayout::new(&set, config, 300).draw(&mut commands);
        assert_eq!(commands.commands()[0], DrawCommand::SetDrawMode(DrawMode::Xor));
        assert_eq!(
            commands.commands()[2],
            DrawCommand::Text {
                text: "Maximum BDD Width: 10.0".to_string(),
                x: 0,
                y: 12,
            }
        );
    }

    #[test]
    fn test_invalid_scale_draws_no_lines() {
        init();
        let set = SeriesSet::from_string("f", "5\n10");
        let config = DisplayConfig::for_set(&set).with_max_width(0.0);
        let layout = ChartLayout::new(&set, config, 300);
        let mut commands = CommandList::new();
        layout.draw(&mut commands);
        assert!(commands.lines().is_empty());
        assert!(layout.bars().is_empty());
    }

    #[test]
    fn test_samples_beyond_viewport_are_dropped() {
        let values: Vec<String> = (0..50).map(|_| "1".to_string()).collect();
        let set = SeriesSet::from_string("long", &values.join("\n"));
        let layout = ChartLayout::new(&set, DisplayConfig::for_set(&set), 30);
        let bars = layout.bars();
        assert_eq!(bars.len(), 30);
        assert_eq!(bars.last().map(|bar| bar.sample), Some(29));
        assert_eq!(layout.canvas_size(), [30, 50 * 2 + 30]);
        assert_eq!(layout.raster_size(), [30, 30 * 2 + 30]);
    }

    #[test]
    fn test_empty_series_emit_nothing() {
        let set = SeriesSet::from_string("f", "#\n3");
        let layout = ChartLayout::new(&set, DisplayConfig::for_set(&set), 100);
        let bars = layout.bars();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].series, 1);
        assert_eq!(bars[0].rank, 0);
    }

    #[test]
    fn test_empty_set_renders_header_only() {
        let set = SeriesSet::new();
        let layout = ChartLayout::new(&set, DisplayConfig::for_set(&set), 100);
        let [w, h] = layout.canvas_size();
        let mut canvas = PixelCanvas::new(w, h);
        layout.draw(&mut canvas);
        assert_eq!(canvas.size(), [100, 30]);
        assert_eq!(canvas.labels().len(), 1);
        assert!(canvas.rgb().iter().all(|b| *b == 255));
    }

    #[test]
    fn test_larger_peak_is_drawn_below_smaller() {
        // The smaller series is drawn later and stays visible on top.
        let set = SeriesSet::from_string("f", "2\n#\n10");
        let layout = ChartLayout::new(&set, DisplayConfig::for_set(&set), 120);
        let [w, h] = layout.raster_size();
        let mut canvas = PixelCanvas::new(w, h);
        layout.draw(&mut canvas);
        // widths: 100 (rank 0, green) and 20 (rank 1, red), centered at 60
        assert_eq!(canvas.pixel(60, 20), Some(Color::Red.rgb()));
        assert_eq!(canvas.pixel(15, 20), Some(Color::Green.rgb()));
        assert_eq!(canvas.pixel(60, 22), Some(Color::White.rgb()));
    }
}
