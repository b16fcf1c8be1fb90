use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use shape_layout::{DisplayConfig, DrawMode};
use width_parser::SeriesSet;

use crate::Config;

/// BDD width visualizer: shows the width of BDDs per level as overlaid,
/// centered bar charts.
#[derive(Parser, Debug)]
#[command(name = "visubdd", version, about, long_about = None)]
pub struct Args {
    /// Input files, one or more sections of widths separated by lines holding `#`.
    #[arg(required = true, value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Pixel rows per BDD level (overrides the config file).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub spacing: Option<u32>,

    /// Start with overlapping bars combined (XOR) instead of overwritten.
    #[arg(long, action = ArgAction::SetTrue)]
    pub combine_colors: bool,

    /// Width that fills the whole chart (default: largest value of all files).
    #[arg(long)]
    pub max_width: Option<f64>,
}

impl Args {
    /// Initial display configuration: data-derived defaults, then the config
    /// file, then the command line.
    pub fn display_config(&self, series: &SeriesSet, config: &Config) -> DisplayConfig {
        let display = DisplayConfig::for_set(series)
            .with_spacing(self.spacing.unwrap_or(config.spacing))
            .with_draw_mode(DrawMode::from_combine_colors(
                self.combine_colors || config.combine_colors,
            ));
        match self.max_width {
            Some(max_width) => display.with_max_width(max_width),
            None => display,
        }
    }
}
