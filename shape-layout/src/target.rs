use crate::{Color, DrawMode};

/// A drawing surface the layout engine emits primitives to. Coordinates are
/// pixels, with the origin in the top left corner.
pub trait RenderTarget {
    fn set_draw_mode(&mut self, mode: DrawMode);
    fn set_color(&mut self, color: Color);
    /// Draw a line including both end points.
    fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64);
    /// Draw text with its baseline starting at (x, y).
    fn draw_text(&mut self, text: &str, x: i64, y: i64);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetDrawMode(DrawMode),
    SetColor(Color),
    Line { x1: i64, y1: i64, x2: i64, y2: i64 },
    Text { text: String, x: i64, y: i64 },
}

/// Records every primitive in order.
#[derive(Clone, Debug, Default)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the line commands, each paired with the color it is drawn in.
    pub fn lines(&self) -> Vec<(Color, [i64; 4])> {
        let mut color = Color::Black;
        let mut lines = Vec::new();
        for cmd in self.commands.iter() {
            match cmd {
                DrawCommand::SetColor(c) => color = *c,
                DrawCommand::Line { x1, y1, x2, y2 } => lines.push((color, [*x1, *y1, *x2, *y2])),
                _ => (),
            }
        }
        lines
    }
}

impl RenderTarget for CommandList {
    fn set_draw_mode(&mut self, mode: DrawMode) {
        self.commands.push(DrawCommand::SetDrawMode(mode));
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn draw_line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }

    fn draw_text(&mut self, text: &str, x: i64, y: i64) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
        });
    }
}
