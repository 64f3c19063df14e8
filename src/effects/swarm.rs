use super::common::{Effect, FrameContext, lcg, lerp, reset};
use crate::cell::Cell;
use crate::easing::Easing;

/// Swarm effect - characters fly in from scattered positions around the text
pub(crate) struct Swarm;

impl Effect for Swarm {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let flight_frames = 60.0;
        let (width, height) = (ctx.width(), ctx.height());
        let progress = (ctx.frame as f32 / flight_frames).min(1.0);

        for (index, cell) in cells.iter_mut().enumerate() {
            reset(cell);
            if progress >= 1.0 {
                cell.settle();
                continue;
            }
            let seed = lcg(index) & 0x7fff_ffff;
            let start_col = seed % (width * 2) - width;
            let start_row = (seed / 97) % (height * 2) - height;

            cell.visible = true;
            cell.bold = true;
            let eased = ctx.ease(Easing::Linear, progress);
            cell.pos.col = lerp(start_col, cell.target.col, eased);
            cell.pos.row = lerp(start_row, cell.target.row, eased);
        }
    }
}
