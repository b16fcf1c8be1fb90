mod logic;
mod ui;

pub use logic::parse_max_width;

/// Spacing values offered by the "Vertical Stretching" selector.
const SPACING_CHOICES: [u32; 3] = [1, 2, 3];

/// Control panel for the display configuration ("Preferences" window).
///
/// The widgets edit a local copy of the settings. Nothing reaches the chart
/// until "Repaint" is clicked.
#[derive(Debug)]
pub struct ControlPanel {
    pub open: bool,
    max_width_text: String,
    spacing: u32,
    combine_colors: bool,
    /// Diagnostic of the last rejected input.
    status: Option<String>,
}
