//! Frame composition.
//!
//! Each frame the canvas area of a persistent screen buffer is cleared, the background is painted into it, the
//! visible cells are drawn on top and the whole terminal is streamed out with the fewest style changes possible.

mod buffer;

pub use buffer::{MAX_SIDE, ScreenBuffer, ScreenCell};

use crate::background::{BackgroundCell, BackgroundConfig, Viewport};
use crate::cell::Cell;
use crate::color::{ColorOptions, SgrStyle, write_transition};
use crate::geometry::{Geometry, Size};
use std::io::{self, Write};

const CURSOR_HOME: &[u8] = b"\x1b[H";
const RESET: &[u8] = b"\x1b[0m";

/// What went into a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Visible cells drawn onto the screen.
    pub cells_drawn: usize,
    /// Visible cells that landed outside the canvas or terminal.
    pub cells_dropped: usize,
    /// Background glyphs painted into empty spots, including those text was then drawn over.
    pub background_cells: usize,
    /// Style changes written.
    pub style_changes: usize,
    /// Bytes written for the whole frame.
    pub bytes_written: usize,
}

/// Composes cells and background into frames.
pub struct Compositor {
    geometry: Geometry,
    background: BackgroundConfig,
    options: ColorOptions,
    screen: ScreenBuffer,
    background_cells: Vec<BackgroundCell>,
    output: Vec<u8>,
}

impl Compositor {
    pub fn new(geometry: Geometry, background: BackgroundConfig, options: ColorOptions) -> Self {
        Self {
            geometry,
            background,
            options,
            screen: ScreenBuffer::new(geometry.terminal),
            background_cells: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Compose and write out one frame.
    pub fn render_frame<W: Write>(&mut self, cells: &[Cell], frame: i32, out: &mut W) -> io::Result<RenderStats> {
        let mut stats = RenderStats::default();
        let geometry = self.geometry;
        let canvas_top = geometry.canvas_offset_y;
        let canvas_left = geometry.canvas_offset_x;
        let in_canvas = |row: i32, col: i32| {
            row >= canvas_top
                && row < canvas_top + geometry.canvas.height
                && col >= canvas_left
                && col < canvas_left + geometry.canvas.width
        };

        self.screen.clear_rect(canvas_top, canvas_left, geometry.canvas.height, geometry.canvas.width);

        // Background first, into empty spots only
        let screen = Size::new(self.screen.width(), self.screen.height());
        let viewport = Viewport::on_screen(geometry.canvas, canvas_top, canvas_left, screen);
        self.background.paint(frame, geometry.canvas, viewport, &mut self.background_cells);
        for cell in &self.background_cells {
            let (row, col) = geometry.canvas_to_terminal(cell.row, cell.col);
            if !in_canvas(row, col) || !self.screen.get(row, col).is_some_and(ScreenCell::is_blank) {
                continue;
            }
            let painted = ScreenCell { glyph: cell.glyph, fg: Some(cell.fg), bg: None, bold: cell.bold };
            if self.screen.set(row, col, painted) {
                stats.background_cells += 1;
            }
        }

        for cell in cells.iter().filter(|cell| cell.visible) {
            let (row, col) = geometry.to_terminal(cell.pos.row, cell.pos.col);
            let drawn = ScreenCell { glyph: cell.glyph, fg: Some(cell.color_fg), bg: cell.color_bg, bold: cell.bold };
            let last_col = col + drawn.width() - 1;
            if in_canvas(row, col) && in_canvas(row, last_col) && self.screen.put(row, col, drawn) {
                stats.cells_drawn += 1;
            } else {
                stats.cells_dropped += 1;
            }
        }

        self.output.clear();
        self.output.extend_from_slice(CURSOR_HOME);
        stats.style_changes = self.write_rows()?;
        out.write_all(&self.output)?;
        out.flush()?;
        stats.bytes_written = self.output.len();
        Ok(stats)
    }

    /// Stream the screen into the output buffer, returning the number of style changes.
    fn write_rows(&mut self) -> io::Result<usize> {
        let mut changes = 0;
        let mut emitted = SgrStyle::default();
        let mut glyph_buffer = [0; 4];

        for row in 0..self.screen.height() {
            if row > 0 {
                self.output.push(b'\n');
            }
            for cell in self.screen.row(row) {
                if cell.is_continuation() {
                    continue;
                }
                if cell.is_blank() {
                    if emitted.bg.is_some() {
                        self.output.extend_from_slice(RESET);
                        emitted = SgrStyle::default();
                        changes += 1;
                    }
                    self.output.push(b' ');
                    continue;
                }
                let style = SgrStyle::new(cell.fg, cell.bg, cell.bold).resolve(&self.options);
                if style != emitted {
                    write_transition(&mut self.output, &emitted, &style)?;
                    emitted = style;
                    changes += 1;
                }
                self.output.extend_from_slice(cell.glyph.encode_utf8(&mut glyph_buffer).as_bytes());
            }
        }
        if !emitted.is_plain() {
            self.output.extend_from_slice(RESET);
            changes += 1;
        }
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::BackgroundKind;
    use crate::cell::Coord;
    use crate::geometry::Anchor;
    use proptest::prelude::*;
    use unicode_width::UnicodeWidthStr;

    fn geometry(terminal: Size, text: Size) -> Geometry {
        Geometry::new(terminal, terminal, text, Anchor::Nw, Anchor::Nw)
    }

    fn shown(glyph: char, row: i32, col: i32, fg: u8) -> Cell {
        let mut cell = Cell::new(glyph, Coord::new(row, col));
        cell.visible = true;
        cell.color_fg = fg;
        cell
    }

    fn render(compositor: &mut Compositor, cells: &[Cell], frame: i32) -> (String, RenderStats) {
        let mut out = Vec::new();
        let stats = compositor.render_frame(cells, frame, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), stats)
    }

    /// Drop escape sequences, leaving the glyphs and newlines.
    fn strip_escapes(output: &str) -> String {
        let mut text = String::new();
        let mut chars = output.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                text.push(c);
            }
        }
        text
    }

    #[test]
    fn frame_layout() {
        let mut compositor = Compositor::new(
            geometry(Size::new(4, 2), Size::new(2, 1)),
            BackgroundConfig::default(),
            ColorOptions::default(),
        );
        let cells = [shown('h', 0, 0, 196), shown('i', 0, 1, 196)];
        let (output, stats) = render(&mut compositor, &cells, 0);
        assert_eq!(output, "\x1b[H\x1b[38;5;196mhi  \n    \x1b[0m");
        assert_eq!(stats.cells_drawn, 2);
        assert_eq!(stats.style_changes, 2);
        assert_eq!(stats.bytes_written, output.len());
    }

    #[test]
    fn style_only_changes_on_transitions() {
        let mut compositor = Compositor::new(
            geometry(Size::new(3, 1), Size::new(3, 1)),
            BackgroundConfig::default(),
            ColorOptions::default(),
        );
        let mut cells = vec![shown('a', 0, 0, 21), shown('b', 0, 1, 21), shown('c', 0, 2, 46)];
        cells[2].bold = true;
        let (output, _) = render(&mut compositor, &cells, 0);
        assert_eq!(output, "\x1b[H\x1b[38;5;21mab\x1b[1m\x1b[38;5;46mc\x1b[0m");
    }

    #[test]
    fn no_color_keeps_bold_only() {
        let options = ColorOptions { no_color: true, reduced_palette: false };
        let mut compositor =
            Compositor::new(geometry(Size::new(2, 1), Size::new(2, 1)), BackgroundConfig::default(), options);
        let mut cells = vec![shown('a', 0, 0, 21), shown('b', 0, 1, 46)];
        cells[1].bold = true;
        let (output, _) = render(&mut compositor, &cells, 0);
        assert_eq!(output, "\x1b[Ha\x1b[1mb\x1b[0m");
    }

    #[test]
    fn backgrounds_stop_at_blanks() {
        let mut compositor = Compositor::new(
            geometry(Size::new(3, 1), Size::new(3, 1)),
            BackgroundConfig::default(),
            ColorOptions::default(),
        );
        let mut cells = vec![shown('a', 0, 0, 21), shown('c', 0, 2, 21)];
        cells[0].color_bg = Some(17);
        let (output, _) = render(&mut compositor, &cells, 0);
        assert_eq!(output, "\x1b[H\x1b[38;5;21m\x1b[48;5;17ma\x1b[0m \x1b[38;5;21mc\x1b[0m");
    }

    #[test]
    fn off_screen_cells_are_dropped() {
        let mut compositor = Compositor::new(
            geometry(Size::new(3, 2), Size::new(3, 2)),
            BackgroundConfig::default(),
            ColorOptions::default(),
        );
        let cells = [shown('a', -1, 0, 15), shown('b', 0, 3, 15), shown('c', 2, 1, 15), shown('d', 1, 1, 15)];
        let (output, stats) = render(&mut compositor, &cells, 0);
        assert_eq!(strip_escapes(&output), "   \n d ");
        assert_eq!(stats.cells_drawn, 1);
        assert_eq!(stats.cells_dropped, 3);
    }

    #[test]
    fn cells_outside_the_canvas_are_dropped() {
        let terminal = Size::new(6, 1);
        let geometry = Geometry::new(terminal, Size::new(2, 1), Size::new(2, 1), Anchor::C, Anchor::Nw);
        let mut compositor = Compositor::new(geometry, BackgroundConfig::default(), ColorOptions::default());
        let cells = [shown('a', 0, 0, 15), shown('z', 0, 3, 15)];
        let (output, stats) = render(&mut compositor, &cells, 0);
        assert_eq!(strip_escapes(&output), "  a   ");
        assert_eq!(stats.cells_dropped, 1);
    }

    #[test]
    fn background_never_covers_text() {
        let size = Size::new(20, 6);
        let background = BackgroundConfig { kind: BackgroundKind::Plasma, intensity: 100 };
        let mut compositor = Compositor::new(geometry(size, size), background, ColorOptions::default());
        let cells: Vec<_> = "TEXT".chars().enumerate().map(|(i, c)| shown(c, 2, i as i32 + 3, 15)).collect();
        let (output, stats) = render(&mut compositor, &cells, 9);
        let rows: Vec<_> = strip_escapes(&output).split('\n').map(str::to_string).collect();
        assert_eq!(&rows[2][3..7], "TEXT");
        assert!(stats.background_cells > 0);
        assert!(stats.background_cells <= 20 * 6);
    }

    #[test]
    fn oversized_canvas_only_paints_the_screen() {
        let terminal = Size::new(80, 24);
        let geometry = Geometry::new(terminal, Size::new(4000, 4000), Size::new(2, 1), Anchor::C, Anchor::C);
        let background = BackgroundConfig { kind: BackgroundKind::Plasma, intensity: 100 };
        let mut compositor = Compositor::new(geometry, background, ColorOptions::default());
        let (output, stats) = render(&mut compositor, &[shown('o', 0, 0, 15), shown('k', 0, 1, 15)], 4);
        assert!(stats.background_cells <= 80 * 24);
        assert_eq!(compositor.background_cells.len(), stats.background_cells);
        assert_eq!(stats.cells_drawn, 2);
        assert_eq!(strip_escapes(&output).split('\n').count(), 24);
    }

    #[test]
    fn canvas_is_cleared_between_frames() {
        let size = Size::new(3, 1);
        let mut compositor = Compositor::new(geometry(size, size), BackgroundConfig::default(), ColorOptions::default());
        render(&mut compositor, &[shown('a', 0, 0, 15)], 0);
        let (output, _) = render(&mut compositor, &[shown('b', 0, 2, 15)], 1);
        assert_eq!(strip_escapes(&output), "  b");
    }

    #[test]
    fn wide_glyphs_take_two_columns() {
        let size = Size::new(4, 1);
        let mut compositor = Compositor::new(geometry(size, size), BackgroundConfig::default(), ColorOptions::default());
        let cells = [shown('日', 0, 0, 15), shown('x', 0, 2, 15)];
        let (output, _) = render(&mut compositor, &cells, 0);
        assert_eq!(strip_escapes(&output), "日x ");
    }

    #[test]
    fn wide_glyph_at_the_right_edge_is_dropped() {
        let size = Size::new(3, 2);
        let mut compositor = Compositor::new(geometry(size, size), BackgroundConfig::default(), ColorOptions::default());
        let (output, stats) = render(&mut compositor, &[shown('日', 0, 2, 15), shown('本', 1, 1, 15)], 0);
        assert_eq!(strip_escapes(&output), "   \n 本");
        assert_eq!(stats.cells_drawn, 1);
        assert_eq!(stats.cells_dropped, 1);
    }

    #[test]
    fn narrow_glyph_over_a_wide_one() {
        let size = Size::new(4, 1);
        let mut compositor = Compositor::new(geometry(size, size), BackgroundConfig::default(), ColorOptions::default());
        let (output, _) = render(&mut compositor, &[shown('日', 0, 0, 15), shown('x', 0, 1, 15)], 0);
        assert_eq!(strip_escapes(&output), " x  ");
    }

    proptest! {
        #[test]
        fn output_stays_within_terminal(
            width in 1i32..40,
            height in 1i32..12,
            positions in prop::collection::vec(
                (-20i32..60, -20i32..60, any::<u8>(), any::<bool>(), any::<bool>()),
                0..64,
            ),
        ) {
            let size = Size::new(width, height);
            let mut compositor = Compositor::new(
                geometry(size, size),
                BackgroundConfig { kind: BackgroundKind::Stars, intensity: 80 },
                ColorOptions::default(),
            );
            let cells: Vec<_> = positions
                .iter()
                .map(|&(row, col, fg, bold, wide)| {
                    let mut cell = shown(if wide { '日' } else { 'x' }, row, col, fg);
                    cell.bold = bold;
                    cell
                })
                .collect();
            let (output, stats) = render(&mut compositor, &cells, 3);
            let text = strip_escapes(&output);
            let rows: Vec<_> = text.split('\n').collect();
            prop_assert_eq!(rows.len(), height as usize);
            for row in rows {
                prop_assert_eq!(row.width(), width as usize);
            }
            let inside = positions
                .iter()
                .filter(|&&(row, col, _, _, wide)| {
                    let last_col = if wide { col + 1 } else { col };
                    row >= 0 && row < height && col >= 0 && last_col < width
                })
                .count();
            prop_assert_eq!(stats.cells_drawn, inside);
            prop_assert_eq!(stats.cells_drawn + stats.cells_dropped, cells.len());
        }
    }
}
