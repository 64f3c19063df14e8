use super::{BackgroundCell, BackgroundPattern, PatternContext};
use crate::color::{Hsv, hsv_to_rgb};

const GLYPHS: &[char] = &['.', ':', '+', '*', '#'];

/// Plasma background - overlapping sine fields slowly cycling through the hues
pub(crate) struct Plasma;

impl BackgroundPattern for Plasma {
    fn paint(&self, ctx: &PatternContext, out: &mut Vec<BackgroundCell>) {
        let time = ctx.frame as f32 * 0.05;
        let (width, height) = (ctx.canvas.width as f32, ctx.canvas.height as f32);
        // Only the strongest parts of the field are drawn at low intensity
        let cutoff = 1.0 - ctx.density;

        for row in ctx.viewport.rows() {
            for col in ctx.viewport.cols() {
                let x = col as f32 / width;
                let y = row as f32 / height;
                let (cx, cy) = (x - 0.5, y - 0.5);

                // Four phase shifted sine terms
                let value = (x * 10.0 + time).sin()
                    + (10.0 * (x * (time / 2.0).sin() + y * (time / 3.0).cos()) + time).sin()
                    + ((100.0 * (cx * cx + cy * cy) + 1.0).sqrt() + time).sin()
                    + ((x + y) * 6.0 + time * 1.3).sin();

                let level = (value + 4.0) / 8.0;
                if level <= cutoff {
                    continue;
                }
                let hue = level * 360.0 + ctx.frame as f32 * 0.5;
                let fg = hsv_to_rgb(Hsv::new(hue, 0.8, 0.7)).palette_index();
                let glyph = GLYPHS[((level * GLYPHS.len() as f32) as usize).min(GLYPHS.len() - 1)];
                out.push(BackgroundCell { row, col, glyph, fg, bold: false });
            }
        }
    }
}
