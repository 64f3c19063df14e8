use super::common::{Effect, FrameContext, reset};
use crate::cell::Cell;

/// Wipe effect - a vertical edge sweeps left to right revealing the text
pub(crate) struct Wipe;

impl Effect for Wipe {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let wipe_col = ctx.frame * 2;

        for cell in cells.iter_mut() {
            reset(cell);
            let col = cell.target.col;
            if col > wipe_col {
                continue;
            }
            if col == wipe_col {
                // on the edge
                cell.rest();
                cell.bold = true;
            } else {
                cell.settle();
            }
        }
    }
}
