use crate::geometry::Size;
use unicode_width::UnicodeWidthChar;

/// Largest grid the compositor will keep, per side.
pub const MAX_SIDE: i32 = 1024;

/// One terminal cell of a composed frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenCell {
    pub glyph: char,
    pub fg: Option<u8>,
    pub bg: Option<u8>,
    pub bold: bool,
}

impl ScreenCell {
    pub const BLANK: ScreenCell = ScreenCell { glyph: ' ', fg: None, bg: None, bold: false };

    /// Placeholder for the column taken by the right half of a wide glyph.
    pub const CONTINUATION: ScreenCell = ScreenCell { glyph: '\0', fg: None, bg: None, bold: false };

    pub fn is_blank(&self) -> bool {
        self.glyph == ' '
    }

    pub fn is_continuation(&self) -> bool {
        self.glyph == '\0'
    }

    /// Columns this cell's glyph takes on screen, 1 or 2.
    pub fn width(&self) -> i32 {
        self.glyph.width().unwrap_or(1).clamp(1, 2) as i32
    }
}

impl Default for ScreenCell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// A flat, row major grid covering the whole terminal.
///
/// Sized once up front and addressed by index.
#[derive(Clone, Debug)]
pub struct ScreenBuffer {
    width: i32,
    height: i32,
    cells: Vec<ScreenCell>,
}

impl ScreenBuffer {
    /// Create a blank buffer for a terminal of `size`, clamped to [MAX_SIDE] on each side.
    pub fn new(size: Size) -> Self {
        let width = size.width.clamp(0, MAX_SIDE);
        let height = size.height.clamp(0, MAX_SIDE);
        Self { width, height, cells: vec![ScreenCell::BLANK; (width * height) as usize] }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.height || col >= self.width {
            return None;
        }
        Some((row * self.width + col) as usize)
    }

    pub fn get(&self, row: i32, col: i32) -> Option<&ScreenCell> {
        self.index(row, col).map(|index| &self.cells[index])
    }

    /// Write a cell. Positions outside the buffer are ignored and reported as `false`.
    pub fn set(&mut self, row: i32, col: i32, cell: ScreenCell) -> bool {
        match self.index(row, col) {
            Some(index) => {
                self.cells[index] = cell;
                true
            }
            None => false,
        }
    }

    /// Write a glyph, keeping wide glyphs whole.
    ///
    /// A wide glyph that doesn't fit is not written. Any wide glyph the new one overlaps is blanked.
    pub fn put(&mut self, row: i32, col: i32, cell: ScreenCell) -> bool {
        let width = cell.width();
        if self.index(row, col).is_none() || self.index(row, col + width - 1).is_none() {
            return false;
        }
        for col in col..col + width {
            self.release(row, col);
        }
        self.set(row, col, cell);
        if width == 2 {
            self.set(row, col + 1, ScreenCell::CONTINUATION);
        }
        true
    }

    /// Blank the other half of a wide glyph overlapping `(row, col)`.
    fn release(&mut self, row: i32, col: i32) {
        let Some(existing) = self.get(row, col) else {
            return;
        };
        if existing.is_continuation() {
            self.set(row, col - 1, ScreenCell::BLANK);
        } else if existing.width() == 2 {
            self.set(row, col + 1, ScreenCell::BLANK);
        }
    }

    /// Blank out a rectangle, clipped to the buffer.
    pub fn clear_rect(&mut self, row: i32, col: i32, height: i32, width: i32) {
        let (top, bottom) = (row.max(0), (row + height).min(self.height));
        let (left, right) = (col.max(0), (col + width).min(self.width));
        if left >= right {
            return;
        }
        for row in top..bottom {
            let start = (row * self.width) as usize;
            self.cells[start + left as usize..start + right as usize].fill(ScreenCell::BLANK);
        }
    }

    /// The cells of a row.
    pub fn row(&self, row: i32) -> &[ScreenCell] {
        let start = (row * self.width) as usize;
        &self.cells[start..start + self.width as usize]
    }
}
