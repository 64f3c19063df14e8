use super::common::{Effect, FrameContext, reset};
use super::glyphs;
use crate::cell::Cell;

/// Matrix effect - digital rain streams down each column, leaving the text behind
pub(crate) struct Matrix;

impl Effect for Matrix {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let trail_length = 8;
        let fall_delay = 3; // frames per row
        let linger_frames = 60;
        let frame = ctx.frame;
        let height = ctx.text.height;

        for cell in cells.iter_mut() {
            reset(cell);
            let (row, col) = (cell.target.row, cell.target.col);
            let column_start = col * 12 + (col * 7) % 20;
            if frame < column_start {
                continue;
            }

            let drop_row = (frame - column_start) / fall_delay - height;
            let trail = drop_row - row;

            if trail > 2 {
                // The rain has passed
                cell.rest();
                if frame > column_start + (height + trail_length) * fall_delay + linger_frames {
                    cell.settle();
                }
                continue;
            }
            if trail < -trail_length {
                continue;
            }

            cell.rest();
            if trail >= -2 {
                cell.glyph = glyphs::matrix_glyph(col * 31 + row * 17 + frame / 4);
            }
            // Head of the drop is white, then the trail darkens
            (cell.color_fg, cell.bold) = match trail {
                0.. => (15, true),
                -2.. => (46, true),
                -4.. => (40, false),
                _ => (22, false),
            };
        }
    }
}
