use super::common::{Effect, FrameContext, distance, reset};
use crate::cell::Cell;

pub(crate) const RING_COUNT: i32 = 5;
pub(crate) const RING_DELAY: i32 = 15;
pub(crate) const RING_WIDTH: i32 = 3;
pub(crate) const RING_SPEED: f32 = 0.8;

/// Rings effect - concentric rings ripple out from the center, each crest lighting up the text it crosses
pub(crate) struct Rings;

impl Effect for Rings {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let cleanup_frame = 150;
        let center_row = ctx.text.height / 2;
        let center_col = ctx.text.width / 2;
        let last_ring = (RING_COUNT - 1) * RING_DELAY;

        for cell in cells.iter_mut() {
            reset(cell);
            let radius = distance(cell.target.col - center_col, cell.target.row - center_row);

            // Done once the last ring's crest has moved past
            let done = ctx.frame >= last_ring
                && (ctx.frame - last_ring) as f32 > radius / RING_SPEED + RING_WIDTH as f32;
            if done || ctx.frame > cleanup_frame {
                cell.settle();
                continue;
            }

            for ring in 0..RING_COUNT {
                let start = ring * RING_DELAY;
                if ctx.frame < start {
                    break;
                }
                let ring_radius = (ctx.frame - start) as f32 * RING_SPEED;
                if ring_radius < radius {
                    continue;
                }
                cell.rest();
                if ring_radius <= radius + RING_WIDTH as f32 {
                    // on a crest
                    cell.bold = true;
                }
            }
        }
    }
}
