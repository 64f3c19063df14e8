use super::common::{Effect, FrameContext, frame_rng, lcg, reset};
use crate::cell::Cell;

/// Crumble effect - the text breaks apart and falls away as dust
///
/// Unlike the other effects this one ends with every cell hidden.
pub(crate) struct Crumble;

impl Effect for Crumble {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let duration = 80;
        let frame = ctx.frame;

        for (index, cell) in cells.iter_mut().enumerate() {
            reset(cell);
            let start = cell.target.row * 10 + cell.target.col * 3 + index as i32 % 15;
            if frame < start {
                // still intact
                cell.rest();
                continue;
            }
            if frame >= start + duration {
                cell.active = false;
                continue;
            }

            let progress = (frame - start) as f32 / duration as f32;
            let drift = if lcg(index) & 1 == 1 { 1.0 } else { -1.0 };
            cell.visible = true;
            cell.pos.row = cell.target.row + (progress * progress * 15.0) as i32;
            cell.pos.col = cell.target.col + (progress * 3.0 * drift) as i32;
            cell.bold = frame_rng(ctx.seed, index, frame).u8(..4) != 0;
        }
    }
}
