use super::common::{Effect, FrameContext, distance, lerp, reset};
use crate::cell::Cell;
use crate::easing::Easing;

/// Blackhole effect - the text is dragged into orbit around its center, then released
pub(crate) struct Blackhole;

impl Effect for Blackhole {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let pull_frames = 100;
        let return_frames = 60;
        let frame = ctx.frame;
        let center_row = ctx.text.height / 2;
        let center_col = ctx.text.width / 2;

        for (index, cell) in cells.iter_mut().enumerate() {
            reset(cell);
            if frame >= pull_frames + return_frames {
                cell.settle();
                continue;
            }
            cell.visible = true;
            let radius = distance(center_col - cell.target.col, center_row - cell.target.row);
            let orbit = |angle: f32, radius: f32| {
                (center_row + (angle.sin() * radius) as i32, center_col + (angle.cos() * radius) as i32)
            };

            if frame < pull_frames {
                if radius == 0.0 {
                    continue;
                }
                let progress = frame as f32 / pull_frames as f32;
                let angle = frame as f32 * 0.1 + index as f32 * 0.3;
                (cell.pos.row, cell.pos.col) = orbit(angle, radius * (1.0 - progress * 0.7));
                cell.bold = radius < 8.0;
            } else {
                let progress = (frame - pull_frames) as f32 / return_frames as f32;
                let eased = ctx.ease(Easing::OutCubic, progress);
                let angle = pull_frames as f32 * 0.1 + index as f32 * 0.3;
                let (orbit_row, orbit_col) = orbit(angle, radius * 0.3);
                cell.pos.row = lerp(orbit_row, cell.target.row, eased);
                cell.pos.col = lerp(orbit_col, cell.target.col, eased);
            }
        }
    }
}
