use super::common::{Effect, FrameContext, reset};
use crate::cell::Cell;

/// Rain effect - characters drop from above the text into place, column by column
pub(crate) struct Rain;

impl Effect for Rain {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let height = ctx.text.height;

        for (index, cell) in cells.iter_mut().enumerate() {
            reset(cell);
            let start = cell.target.col * 5 + (index as i32 % 20) * 3;
            if ctx.frame < start {
                continue;
            }
            let row = -height + (ctx.frame - start);
            if row >= cell.target.row {
                cell.settle();
                continue;
            }
            let fallen = (row + height) as f32 / (cell.target.row + height) as f32;
            cell.visible = true;
            cell.pos.row = row;
            cell.bold = fallen < 0.5;
        }
    }
}
