use width_parser::SeriesSet;

/// Vertical stretching used when nothing else is configured.
pub const DEFAULT_SPACING: u32 = 2;

/// How overlapping bars are combined on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawMode {
    /// Later ranks paint over earlier ones.
    #[default]
    Overwrite,
    /// Pixels are combined as `old ^ color ^ white`, which makes overlaps
    /// visible as mixed colors.
    Xor,
}

impl DrawMode {
    pub fn from_combine_colors(combine: bool) -> Self {
        if combine {
            DrawMode::Xor
        } else {
            DrawMode::Overwrite
        }
    }

    pub fn combines_colors(&self) -> bool {
        *self == DrawMode::Xor
    }
}

/// Everything the user can tune about the chart. The value is replaced as a
/// whole, never edited in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayConfig {
    max_width: f64,
    spacing: u32,
    draw_mode: DrawMode,
}

impl DisplayConfig {
    /// `spacing` is raised to at least 1.
    pub fn new(max_width: f64, spacing: u32, draw_mode: DrawMode) -> Self {
        Self {
            max_width,
            spacing: spacing.max(1),
            draw_mode,
        }
    }

    /// Initial configuration for a data set: the largest value of all series
    /// fills the usable width.
    pub fn for_set(set: &SeriesSet) -> Self {
        Self::new(set.global_peak(), DEFAULT_SPACING, DrawMode::Overwrite)
    }

    pub fn with_max_width(self, max_width: f64) -> Self {
        Self::new(max_width, self.spacing, self.draw_mode)
    }

    pub fn with_spacing(self, spacing: u32) -> Self {
        Self::new(self.max_width, spacing, self.draw_mode)
    }

    pub fn with_draw_mode(self, draw_mode: DrawMode) -> Self {
        Self::new(self.max_width, self.spacing, draw_mode)
    }

    pub fn max_width(&self) -> f64 {
        self.max_width
    }

    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    /// A zero, negative or non-finite maximum cannot be used as divisor.
    pub fn has_valid_scale(&self) -> bool {
        self.max_width.is_finite() && self.max_width > 0.0
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_SPACING, DrawMode::Overwrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_config_uses_global_peak() {
        let set = SeriesSet::from_string("f", "5\n10\n#\n3\n7\n2");
        let config = DisplayConfig::for_set(&set);
        assert_eq!(config.max_width(), 10.0);
        assert_eq!(config.spacing(), DEFAULT_SPACING);
        assert_eq!(config.draw_mode(), DrawMode::Overwrite);
        assert!(config.has_valid_scale());
    }

    #[test]
    fn test_empty_set_has_no_valid_scale() {
        let config = DisplayConfig::for_set(&SeriesSet::new());
        assert_eq!(config.max_width(), 0.0);
        assert!(!config.has_valid_scale());
        assert!(!config.with_max_width(-1.0).has_valid_scale());
        assert!(!config.with_max_width(f64::INFINITY).has_valid_scale());
    }

    #[test]
    fn test_spacing_is_at_least_one() {
        let config = DisplayConfig::default().with_spacing(0);
        assert_eq!(config.spacing(), 1);
        assert_eq!(config.with_spacing(7).spacing(), 7);
    }

    #[test]
    fn test_draw_mode_from_checkbox() {
        assert_eq!(DrawMode::from_combine_colors(true), DrawMode::Xor);
        assert_eq!(DrawMode::from_combine_colors(false), DrawMode::Overwrite);
        assert!(DrawMode::Xor.combines_colors());
    }
}
