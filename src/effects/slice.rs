use super::common::{Effect, FrameContext, reset};
use crate::cell::Cell;

/// Slice effect - four blades cut across the text from different angles, revealing it
pub(crate) struct Slice;

impl Effect for Slice {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let slices = 4;
        let slice_width = 3;
        let slice_delay = 20;
        let cleanup_frame = 120;
        let diagonal_lead = (ctx.text.width + ctx.text.height) / 2;

        for cell in cells.iter_mut() {
            reset(cell);
            if ctx.frame > cleanup_frame {
                cell.settle();
                continue;
            }
            let (row, col) = (cell.target.row, cell.target.col);
            let mut revealed = false;

            for slice in 0..slices {
                let start = slice * slice_delay;
                if ctx.frame < start {
                    continue;
                }
                let time = ctx.frame - start;
                // blade position and the cell's coordinate along the blade's axis
                let (blade, coordinate) = match slice {
                    0 => (time * 2, col),
                    1 => (time, row),
                    2 => (time - diagonal_lead, col - row),
                    _ => (time - diagonal_lead, col + row),
                };
                if blade >= coordinate - slice_width && blade <= coordinate + slice_width {
                    revealed = true;
                    cell.bold = true;
                }
                if blade > coordinate + slice_width {
                    revealed = true;
                }
            }

            if revealed {
                cell.visible = true;
            }
        }
    }
}
