#![warn(clippy::all, rust_2018_idioms)]

//! Turns ranked width series into drawing commands.
//!
//! Nothing in here knows about a windowing toolkit: the layout engine talks
//! to a [`RenderTarget`], which can be a recorder, the [`PixelCanvas`]
//! rasterizer, or anything the application provides.

pub mod canvas;
pub mod color;
pub mod config;
pub mod layout;
pub mod rank;
pub mod target;

pub use canvas::{PixelCanvas, TextLabel};
pub use color::{color_for_rank, Color};
pub use config::{DisplayConfig, DrawMode, DEFAULT_SPACING};
pub use layout::{format_width, line_width, BarGeometry, ChartLayout};
pub use rank::Ranking;
pub use target::{CommandList, DrawCommand, RenderTarget};
