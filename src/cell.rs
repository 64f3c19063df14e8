/// A position on the text grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// One visible glyph of the input text and its animation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The glyph currently displayed.
    pub glyph: char,

    /// The glyph as it was read. Substitution effects restore it once they're done.
    pub original_glyph: char,

    /// Where this cell rests in the laid out text.
    pub target: Coord,

    /// Where this cell is displayed this frame.
    pub pos: Coord,

    pub visible: bool,

    /// Whether the effect is still animating this cell.
    pub active: bool,

    pub bold: bool,

    /// Foreground palette index.
    pub color_fg: u8,

    /// Background palette index, if any.
    pub color_bg: Option<u8>,

    /// The gradient color assigned at load time, which effects go back to when they release a cell.
    pub base_fg: u8,
}

impl Cell {
    /// Palette index used for cells before any gradient is applied.
    pub const DEFAULT_FG: u8 = 15;

    pub fn new(glyph: char, target: Coord) -> Self {
        Self {
            glyph,
            original_glyph: glyph,
            target,
            pos: target,
            visible: false,
            active: true,
            bold: false,
            color_fg: Self::DEFAULT_FG,
            color_bg: None,
            base_fg: Self::DEFAULT_FG,
        }
    }

    /// Show the cell at its resting position.
    pub(crate) fn rest(&mut self) {
        self.visible = true;
        self.pos = self.target;
    }

    /// Rest the cell and hand it back to the gradient: not bold, gradient color, done animating.
    pub(crate) fn settle(&mut self) {
        self.rest();
        self.bold = false;
        self.color_fg = self.base_fg;
        self.active = false;
    }
}
