use app_core::string_error::ErrorStringExt;
use shape_layout::{format_width, DisplayConfig};

/// Parse the text of the "Maximum BDD Width" field.
pub fn parse_max_width(text: &str) -> Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .err_to_string("you have to type only numbers into the maximum width field")
}

impl super::ControlPanel {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            open: true,
            max_width_text: format_width(config.max_width()),
            spacing: config.spacing(),
            combine_colors: config.draw_mode().combines_colors(),
            status: None,
        }
    }

    pub fn set_status(&mut self, status: Option<String>) {
        if let Some(msg) = &status {
            log::warn!("{msg}");
        }
        self.status = status;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
