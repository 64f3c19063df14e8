use super::common::{Effect, FrameContext, reset};
use crate::cell::Cell;

/// Waves effect - a sine wave rolls through the columns as they fade in
pub(crate) struct Waves;

impl Effect for Waves {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let frequency = 0.3;
        let amplitude = 2.0;
        let settle_frame = 200;

        for cell in cells.iter_mut() {
            reset(cell);
            let col = cell.target.col;
            if ctx.frame <= col * 2 {
                continue;
            }
            if ctx.frame > settle_frame {
                cell.settle();
                continue;
            }
            let wave = (col as f32 * frequency + ctx.frame as f32 * 0.1).sin();
            cell.visible = true;
            cell.pos.row = cell.target.row + (wave * amplitude) as i32;
            // crests are bright
            cell.bold = (wave + 1.0) / 2.0 > 0.7;
        }
    }
}
