use super::common::{Effect, FrameContext, reset};
use crate::cell::Cell;

/// Slide effect - rows slide in from the left one after the other
pub(crate) struct Slide;

impl Effect for Slide {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let speed = 2;
        let row_delay = 5;

        for cell in cells.iter_mut() {
            reset(cell);
            let start = cell.target.row * row_delay;
            if ctx.frame < start {
                continue;
            }
            let col = -ctx.text.width + (ctx.frame - start) * speed;
            if col >= cell.target.col {
                cell.settle();
                continue;
            }
            cell.visible = true;
            cell.pos.col = col;
            cell.bold = true;
        }
    }
}
