/// Colors used for the chart. The palette is small on purpose: more than six
/// overlaid series are unreadable anyway, so everything beyond is black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Green,
    Red,
    Blue,
    Magenta,
    Yellow,
    Pink,
    Black,
    White,
}

const PALETTE: [Color; 6] = [
    Color::Green,
    Color::Red,
    Color::Blue,
    Color::Magenta,
    Color::Yellow,
    Color::Pink,
];

/// Color of the series drawn at `rank` (0 = largest peak).
pub fn color_for_rank(rank: usize) -> Color {
    PALETTE.get(rank).copied().unwrap_or(Color::Black)
}

impl Color {
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Color::Green => [0, 255, 0],
            Color::Red => [255, 0, 0],
            Color::Blue => [0, 0, 255],
            Color::Magenta => [255, 0, 255],
            Color::Yellow => [255, 255, 0],
            Color::Pink => [255, 175, 175],
            Color::Black => [0, 0, 0],
            Color::White => [255, 255, 255],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::Pink => "pink",
            Color::Black => "black",
            Color::White => "white",
        }
    }
}
