use super::common::{Effect, FrameContext, frame_rng, reset};
use crate::cell::Cell;

/// Burn effect - text burns in from the top, flickering along the burning edge
pub(crate) struct Burn;

impl Effect for Burn {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        // Rows behind the front by less than this still flicker
        let ember_rows = 3;
        let front = ctx.frame / 2;

        for (index, cell) in cells.iter_mut().enumerate() {
            reset(cell);
            let row = cell.target.row;
            if row > front {
                continue;
            }
            if front - row < ember_rows {
                cell.rest();
                cell.bold = frame_rng(ctx.seed, index, ctx.frame).u8(..5) == 0;
            } else {
                cell.settle();
            }
        }
    }
}
