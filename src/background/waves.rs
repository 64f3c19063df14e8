use super::{BackgroundCell, BackgroundPattern, PatternContext};

/// Waves background - two sine waves rolling across the canvas
pub(crate) struct Waves;

impl BackgroundPattern for Waves {
    fn paint(&self, ctx: &PatternContext, out: &mut Vec<BackgroundCell>) {
        let height = ctx.canvas.height;
        let middle = height as f32 / 2.0;
        let amplitude = (height as f32 / 4.0) * ctx.density.max(0.2);
        let time = ctx.frame as f32 * 0.1;

        // (phase, frequency, color)
        let layers = [(0.0, 0.2, 33), (2.1, 0.13, 39)];
        for col in ctx.viewport.cols() {
            for (index, (phase, frequency, fg)) in layers.into_iter().enumerate() {
                let offset = (col as f32 * frequency + time + phase).sin() * amplitude;
                let row = ((middle + offset) as i32).clamp(0, height - 1);
                if !ctx.viewport.rows().contains(&row) {
                    continue;
                }
                out.push(BackgroundCell { row, col, glyph: '~', fg, bold: index == 0 });
            }
        }
    }
}
