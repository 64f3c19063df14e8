use super::common::{Effect, FrameContext, reset};
use crate::cell::Cell;

/// Typewriter effect - text is typed out in reading order, each key strike briefly bright
pub(crate) struct Typewriter;

impl Effect for Typewriter {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let speed = 2; // characters per frame
        let strike_frames = 3;

        for cell in cells.iter_mut() {
            reset(cell);
            let index = cell.target.row * ctx.text.width + cell.target.col;
            let typed_at = index / speed;
            if typed_at > ctx.frame {
                continue;
            }
            if ctx.frame - typed_at < strike_frames {
                cell.rest();
                cell.bold = true;
            } else {
                cell.settle();
            }
        }
    }
}
