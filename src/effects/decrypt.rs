use super::common::{Effect, FrameContext, frame_rng, reset};
use super::glyphs;
use crate::cell::Cell;

/// Decrypt effect - every character cycles through cipher glyphs before resolving, movie style
pub(crate) struct Decrypt;

impl Effect for Decrypt {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let duration = 60;
        let frame = ctx.frame;

        for (index, cell) in cells.iter_mut().enumerate() {
            reset(cell);
            let start = cell.target.row * 15 + cell.target.col * 3 + index as i32 % 30;
            if frame < start {
                continue;
            }
            let elapsed = frame - start;
            if elapsed >= duration {
                cell.settle();
                continue;
            }

            cell.rest();
            // A new glyph every fourth frame, starting with the first one after this cell began
            let tick = frame / 4;
            if tick * 4 >= start {
                cell.glyph = glyphs::cipher_glyph(&mut frame_rng(ctx.seed, index, tick));
            }
            let progress = elapsed as f32 / duration as f32;
            (cell.color_fg, cell.bold) = if progress < 0.5 {
                (196, true)
            } else if progress < 0.8 {
                (226, true)
            } else {
                (46, false)
            };
        }
    }
}
