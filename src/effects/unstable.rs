use super::common::{Effect, FrameContext, lcg, lerp, reset};
use crate::cell::Cell;
use crate::easing::Easing;
use std::f32::consts::PI;

/// Unstable effect - the text blows apart towards the edges, then pulls itself back together
pub(crate) struct Unstable;

impl Effect for Unstable {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext) {
        let explosion_frames = 40;
        let reassembly_frames = 60;
        let unstable_color = 208;
        let frame = ctx.frame;
        let center_row = ctx.text.height / 2;
        let center_col = ctx.text.width / 2;
        let reach = ctx.text.width + ctx.text.height;

        for (index, cell) in cells.iter_mut().enumerate() {
            reset(cell);
            if frame >= explosion_frames + reassembly_frames {
                cell.settle();
                continue;
            }
            cell.visible = true;
            let angle = ((lcg(index) & 0xFFFF) as f32 / 65535.0) * 2.0 * PI;
            let scatter = |radius: i32| {
                (center_row + (angle.sin() * radius as f32) as i32, center_col + (angle.cos() * radius as f32) as i32)
            };

            if frame < explosion_frames {
                let progress = frame as f32 / explosion_frames as f32;
                (cell.pos.row, cell.pos.col) = scatter((progress * reach as f32) as i32);
                cell.color_fg = unstable_color;
                cell.bold = true;
            } else {
                let progress = (frame - explosion_frames) as f32 / reassembly_frames as f32;
                let eased = ctx.ease(Easing::OutCubic, progress);
                let (start_row, start_col) = scatter(reach);
                cell.pos.row = lerp(start_row, cell.target.row, eased);
                cell.pos.col = lerp(start_col, cell.target.col, eased);
                if progress < 0.5 {
                    cell.color_fg = unstable_color;
                    cell.bold = true;
                }
            }
        }
    }
}
