#![warn(clippy::all, rust_2018_idioms)]

mod app;
mod cli;

pub use app::config::Config;
pub use app::VisuApp;
pub use cli::Args;
