use crate::cell::{Cell, Coord};
use crate::geometry::Size;
use tracing::warn;
use unicode_width::UnicodeWidthChar;

/// The most cells a single run tracks. Characters past this are dropped.
pub const MAX_CELLS: usize = 65_536;

/// How raw text is turned into cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub tab_width: usize,

    /// Wrap onto the next row when a glyph would land past this column.
    pub wrap_width: Option<usize>,

    pub max_cells: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { tab_width: 4, wrap_width: None, max_cells: MAX_CELLS }
    }
}

/// Text broken into cells, plus the size of the area it spans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadedText {
    pub cells: Vec<Cell>,
    pub size: Size,

    /// Whether the input was cut short at the cell ceiling.
    pub truncated: bool,
}

/// Lay out `text` into cells.
///
/// Blank characters advance the column without producing a cell. Tabs advance to the next tab stop. Control
/// characters are skipped.
pub fn load_text(text: &str, options: &LoadOptions) -> LoadedText {
    let tab_width = options.tab_width.max(1);
    let mut cells = Vec::with_capacity(options.max_cells.min(text.len()));
    let mut truncated = false;
    let mut row = 0;
    let mut max_col = 0;

    'lines: for line in text.lines() {
        let mut col = 0;
        for glyph in line.chars() {
            match glyph {
                '\t' => col += tab_width - (col % tab_width),
                ' ' => col += 1,
                glyph => {
                    let Some(width) = glyph.width().filter(|width| *width > 0) else {
                        continue;
                    };
                    if glyph.is_whitespace() {
                        col += width;
                        continue;
                    }
                    if cells.len() >= options.max_cells {
                        truncated = true;
                        max_col = max_col.max(col);
                        row += 1;
                        break 'lines;
                    }
                    if options.wrap_width.is_some_and(|wrap| col >= wrap) {
                        max_col = max_col.max(col);
                        row += 1;
                        col = 0;
                    }
                    cells.push(Cell::new(glyph, Coord::new(row as i32, col as i32)));
                    col += width;
                }
            }
        }
        max_col = max_col.max(col);
        row += 1;
    }

    if truncated {
        warn!(max_cells = options.max_cells, "input exceeds the cell limit, remaining characters dropped");
    }
    LoadedText { cells, size: Size::new(max_col as i32, row as i32), truncated }
}
