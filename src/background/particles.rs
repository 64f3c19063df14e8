use super::{BackgroundCell, BackgroundPattern, PatternContext, noise};

const GLYPHS: &[char] = &['.', '·', '•', '°'];
const COLORS: &[u8] = &[39, 45, 81, 117];
const MAX_PARTICLES: usize = 512;

/// Particles background - specks drifting in straight lines, wrapping around the canvas edges
pub(crate) struct Particles;

impl BackgroundPattern for Particles {
    fn paint(&self, ctx: &PatternContext, out: &mut Vec<BackgroundCell>) {
        let (width, height) = (ctx.canvas.width as f32, ctx.canvas.height as f32);
        let count = ((width * height * ctx.density * 0.03) as usize).clamp(1, MAX_PARTICLES);
        let frame = ctx.frame as f32;

        for particle in 0..count {
            let id = particle as f32;
            let start_x = noise(id, 0.0, 0.5) * width;
            let start_y = noise(id, 1.0, 0.5) * height;
            let velocity_x = (noise(id, 2.0, 0.5) - 0.5) * 0.6;
            let velocity_y = (noise(id, 3.0, 0.5) - 0.5) * 0.4;

            let col = ((start_x + velocity_x * frame).rem_euclid(width) as i32).min(ctx.canvas.width - 1);
            let row = ((start_y + velocity_y * frame).rem_euclid(height) as i32).min(ctx.canvas.height - 1);
            if !ctx.viewport.contains(row, col) {
                continue;
            }
            out.push(BackgroundCell {
                row,
                col,
                glyph: GLYPHS[particle % GLYPHS.len()],
                fg: COLORS[particle % COLORS.len()],
                bold: false,
            });
        }
    }
}
