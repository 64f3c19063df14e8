use super::{BackgroundCell, BackgroundPattern, PatternContext, noise};
use std::f32::consts::TAU;

/// Stars background - a fixed field of stars, each twinkling at its own pace
pub(crate) struct Stars;

impl BackgroundPattern for Stars {
    fn paint(&self, ctx: &PatternContext, out: &mut Vec<BackgroundCell>) {
        let max_coverage = 0.1;
        let threshold = ctx.density * max_coverage;

        for row in ctx.viewport.rows() {
            for col in ctx.viewport.cols() {
                let (x, y) = (col as f32, row as f32);
                if noise(x, y, 0.0) >= threshold {
                    continue;
                }
                let phase = noise(x, y, 1.0) * TAU;
                let brightness = (ctx.frame as f32 * 0.1 + phase).sin();
                let (glyph, fg, bold) = match brightness {
                    b if b > 0.6 => ('*', 255, true),
                    b if b > 0.0 => ('+', 250, false),
                    _ => ('.', 240, false),
                };
                out.push(BackgroundCell { row, col, glyph, fg, bold });
            }
        }
    }
}
