use super::common::{Effect, FrameContext, reset};
use crate::cell::Cell;

/// Highlight effect - a specular glint runs diagonally across the text
pub(crate) struct Highlight;

impl Effect for Highlight {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let band = 8.0;
        let speed = 1.5;
        let sweep = ctx.frame as f32 * speed - (ctx.text.width + ctx.text.height) as f32;

        for cell in cells.iter_mut() {
            reset(cell);
            if sweep > ctx.text.width as f32 + band {
                cell.settle();
                continue;
            }
            cell.rest();
            let diagonal = (cell.target.col - cell.target.row) as f32;
            let offset = (sweep - diagonal).abs();
            if offset <= band {
                cell.bold = 1.0 - offset / band > 0.3;
            }
        }
    }
}
