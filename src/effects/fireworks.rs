use super::common::{Effect, FrameContext, distance, reset};
use crate::cell::Cell;

const SHELLS: i32 = 5;
const SHELL_DELAY: i32 = 20;
const LAUNCH_FRAMES: i32 = 40;
const EXPLOSION_FRAMES: i32 = 50;
const SETTLE_FRAMES: i32 = 30;

/// Fireworks effect - shells launch from the bottom and burst into the text
pub(crate) struct Fireworks;

impl Effect for Fireworks {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let frame = ctx.frame;
        let (width, height) = (ctx.text.width, ctx.text.height);

        for cell in cells.iter_mut() {
            reset(cell);
            let (row, col) = (cell.target.row, cell.target.col);
            let shell = (col + row * 7) % SHELLS;
            let launch = shell * SHELL_DELAY;
            if frame < launch {
                continue;
            }

            let burst_col = shell * width / SHELLS + width / (SHELLS * 2);
            let burst_row = height / 3 + (shell % 3) * (height / 6);
            let burst = launch + LAUNCH_FRAMES;

            if frame < burst {
                // Only the cells around the burst point make up the rising shell
                if (col - burst_col).abs() > 1 || (row - burst_row).abs() > 1 {
                    continue;
                }
                let progress = (frame - launch) as f32 / LAUNCH_FRAMES as f32;
                cell.visible = true;
                cell.pos.col = burst_col;
                cell.pos.row = height - 1 - ((height - 1 - burst_row) as f32 * progress) as i32;
                cell.color_fg = 226;
                cell.bold = true;
            } else if frame < burst + EXPLOSION_FRAMES {
                let dx = col - burst_col;
                let dy = row - burst_row;
                if distance(dx, dy) > 8.0 {
                    continue;
                }
                let elapsed = frame - burst;
                let progress = elapsed as f32 / EXPLOSION_FRAMES as f32;
                cell.visible = true;
                cell.pos.col = burst_col + (dx as f32 * progress) as i32;
                cell.pos.row = burst_row + (dy as f32 * progress) as i32;
                // white flash, then red, orange and a fading yellow
                (cell.color_fg, cell.bold) = match elapsed {
                    ..=7 => (15, true),
                    ..=17 => (196, true),
                    ..=29 => (208, true),
                    _ => (226, false),
                };
            } else if frame > burst + EXPLOSION_FRAMES + SETTLE_FRAMES {
                cell.settle();
            } else {
                cell.rest();
            }
        }
    }
}
