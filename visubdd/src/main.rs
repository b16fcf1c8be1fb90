#![warn(clippy::all, rust_2018_idioms)]

use std::process::ExitCode;

use clap::Parser;
use visubdd::{Args, Config, VisuApp};
use width_parser::SeriesSet;

const WINDOW_NAME: &str = "Visualization of BDD Shape";
const MIN_WINDOW_WIDTH: f32 = 200.0;
const MIN_WINDOW_HEIGHT: f32 = 150.0;

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage errors print the usage and exit with status 1, help and
            // version output is not an error.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match Config::from_config_file() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("unable to load config file \".visubdd\" from home directory: {err}");
            Config::default()
        }
    };

    // All files are read before any window opens, a single unreadable file
    // aborts the run.
    let series = match SeriesSet::from_paths(&args.files) {
        Ok(series) => series,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let display = args.display_config(&series, &config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };
    let result = eframe::run_native(
        WINDOW_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(VisuApp::new(cc, config, series, display)))),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("failed to run the user interface: {err}");
            ExitCode::FAILURE
        }
    }
}
