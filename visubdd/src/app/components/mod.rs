mod chart;
mod control_panel;
mod legend;

pub use chart::Chart;
pub use control_panel::{parse_max_width, ControlPanel};
pub use legend::Legend;
