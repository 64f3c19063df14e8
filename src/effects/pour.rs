use super::common::{Effect, FrameContext, reset};
use crate::cell::Cell;

/// Pour effect - text pours in like liquid, column by column, wobbling as it settles
pub(crate) struct Pour;

impl Effect for Pour {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let speed = 2;
        let column_delay = 8;
        let frame = ctx.frame;
        let height = ctx.text.height;

        for cell in cells.iter_mut() {
            reset(cell);
            let (row, col) = (cell.target.row, cell.target.col);
            let start = col * column_delay;
            if frame < start {
                continue;
            }
            if frame > start + height * 2 + 40 {
                cell.settle();
                continue;
            }

            let time = frame - start;
            let flow_row = time * speed - height;
            if flow_row < row {
                continue;
            }
            let spread = match (col * 31 + time / 5) % 100 {
                ..=19 => -1,
                81.. => 1,
                _ => 0,
            };
            let wobble = (frame as f32 * 0.3 + col as f32 * 0.5).sin() * 0.5;
            cell.visible = true;
            cell.pos.col = col + spread + wobble as i32;
            cell.bold = flow_row - row < 5;
        }
    }
}
