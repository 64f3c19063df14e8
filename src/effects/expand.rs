use super::common::{Effect, FrameContext, distance, lerp, reset};
use crate::cell::Cell;
use crate::easing::Easing;

/// Expand effect - text grows outwards from its center
pub(crate) struct Expand;

impl Effect for Expand {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let speed = 0.5;
        let center_row = ctx.text.height / 2;
        let center_col = ctx.text.width / 2;

        for cell in cells.iter_mut() {
            reset(cell);
            let dx = cell.target.col - center_col;
            let dy = cell.target.row - center_row;
            let start = distance(dx, dy) as i32 * 5;
            if ctx.frame < start {
                continue;
            }
            let progress = (ctx.frame - start) as f32 * speed;
            if progress > 1.0 {
                cell.settle();
                continue;
            }
            cell.visible = true;
            cell.bold = true;
            let eased = ctx.ease(Easing::Linear, progress);
            cell.pos.row = lerp(center_row, cell.target.row, eased);
            cell.pos.col = lerp(center_col, cell.target.col, eased);
        }
    }
}
