use super::common::{Effect, FrameContext, frame_rng, reset};
use crate::cell::Cell;

/// Synthgrid effect - a retro neon grid with a scan line and perspective lines pulsing through the text
pub(crate) struct Synthgrid;

impl Effect for Synthgrid {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let grid_spacing = 6;
        let scan_speed = 2;
        let flicker_period = 8;
        let end_frame = 200;
        let frame = ctx.frame;
        let height = ctx.text.height;

        let scan_line = (frame * scan_speed) % (height + 20);
        let perspective_period = if height > 2 { height / 2 } else { 1 };
        let perspective_line = height - 1 - (frame / 3) % perspective_period;

        for (index, cell) in cells.iter_mut().enumerate() {
            reset(cell);
            if frame > end_frame {
                cell.settle();
                continue;
            }
            cell.rest();
            let (row, col) = (cell.target.row, cell.target.col);
            let on_grid = row % grid_spacing == 0 || col % grid_spacing == 0;

            if (row - scan_line).abs() <= 1 {
                (cell.color_fg, cell.bold) = (51, true);
            } else if row == perspective_line {
                (cell.color_fg, cell.bold) = (201, true);
            } else if on_grid {
                cell.color_fg = 25;
            }

            if on_grid && frame % flicker_period == 0 {
                cell.bold = frame_rng(ctx.seed, index, frame).u8(..10) < 3;
            }
        }
    }
}
