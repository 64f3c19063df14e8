use super::{BackgroundCell, BackgroundPattern, PatternContext, noise};

const GLYPHS: &[char] = &['0', '1', ':', '.', '=', '*', '+', '-', '<', '>', '|'];

/// Rain background - faint streams of glyphs trickle down some of the columns
pub(crate) struct Rain;

impl BackgroundPattern for Rain {
    fn paint(&self, ctx: &PatternContext, out: &mut Vec<BackgroundCell>) {
        let max_columns = 0.6;
        let height = ctx.canvas.height;

        for col in ctx.viewport.cols() {
            let x = col as f32;
            if noise(x, 0.0, 7.0) >= ctx.density * max_columns {
                continue;
            }
            // Each stream gets its own speed, length and offset
            let speed = 1 + (noise(x, 1.0, 3.0) * 3.0) as i32;
            let length = 4 + (noise(x, 2.0, 5.0) * 6.0) as i32;
            let offset = (noise(x, 3.0, 11.0) * (height + length) as f32) as i32;
            let head = (ctx.frame * speed / 2 + offset) % (height + length);

            for row in (head - length + 1).max(ctx.viewport.top)..=head.min(ctx.viewport.bottom - 1) {
                let age = head - row;
                let glyph_seed = noise(x, row as f32, (ctx.frame / 4) as f32);
                let glyph = GLYPHS[(glyph_seed * GLYPHS.len() as f32) as usize % GLYPHS.len()];
                let (fg, bold) = match age {
                    0 => (46, true),
                    1..=2 => (34, false),
                    _ => (22, false),
                };
                out.push(BackgroundCell { row, col, glyph, fg, bold });
            }
        }
    }
}
