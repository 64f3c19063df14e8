use super::common::{Effect, FrameContext, reset};
use crate::cell::Cell;

/// Beams effect - light beams sweep across rows, then down columns, leaving the text lit behind them
pub(crate) struct Beams;

impl Effect for Beams {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let beam_width = 2;
        let beam_delay = 15;
        let column_beams_start = 60;
        let cleanup_frame = 150;
        let frame = ctx.frame;
        let (width, height) = (ctx.text.width, ctx.text.height);

        for cell in cells.iter_mut() {
            reset(cell);
            if frame > cleanup_frame {
                cell.settle();
                continue;
            }
            let (row, col) = (cell.target.row, cell.target.col);
            let mut lit = false;

            // Row beams: three groups sweeping left to right, each covering a band of rows
            for group in 0..3 {
                let start = group * beam_delay;
                if frame < start {
                    continue;
                }
                let beam = (frame - start) * 2 - width;
                let beam_row = group * (height / 3);
                if (row - beam_row).abs() > 1 {
                    continue;
                }
                if beam >= col - beam_width && beam <= col + beam_width {
                    lit = true;
                    cell.bold = true;
                }
                if beam > col + beam_width {
                    cell.visible = true;
                }
            }

            // Column beams: two groups falling top to bottom once the rows are done
            for group in 0..2 {
                let start = column_beams_start + group * beam_delay;
                if frame < start {
                    continue;
                }
                let beam = frame - start - height;
                let beam_col = group * (width / 2) + width / 4;
                if (col - beam_col).abs() > 2 {
                    continue;
                }
                if beam >= row - beam_width && beam <= row + beam_width {
                    lit = true;
                    cell.bold = true;
                }
                if beam > row + beam_width {
                    cell.visible = true;
                }
            }

            if lit {
                cell.visible = true;
            }
        }
    }
}
