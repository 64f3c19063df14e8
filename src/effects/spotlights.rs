use super::common::{Effect, FrameContext, reset};
use crate::cell::Cell;

const RADIUS: i32 = 6;

/// Frame after which every cell is lit for good.
const SEARCH_FRAMES: i32 = 80;

/// Spotlights effect - two spotlights roam the text, revealing whatever they pass over
pub(crate) struct Spotlights;

impl Spotlights {
    /// Whether either spotlight covers `(row, col)` at `frame`.
    fn lit(row: i32, col: i32, frame: i32, width: i32, height: i32) -> bool {
        let first = ((frame * 2) % width, frame % height);
        let second = (width - (frame * 2) % width, height - frame % height);
        [first, second].into_iter().any(|(x, y)| {
            let (dx, dy) = (col - x, row - y);
            dx * dx + dy * dy <= RADIUS * RADIUS
        })
    }
}

impl Effect for Spotlights {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let (width, height) = (ctx.width(), ctx.height());

        for cell in cells.iter_mut() {
            reset(cell);
            if ctx.frame > SEARCH_FRAMES {
                cell.settle();
                continue;
            }
            let (row, col) = (cell.target.row, cell.target.col);
            if Self::lit(row, col, ctx.frame, width, height) {
                cell.rest();
                cell.bold = true;
            } else if (0..ctx.frame).any(|frame| Self::lit(row, col, frame, width, height)) {
                // already found
                cell.rest();
            }
        }
    }
}
