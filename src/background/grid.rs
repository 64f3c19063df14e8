use super::{BackgroundCell, BackgroundPattern, PatternContext};

/// Grid background - a retro grid scrolling upwards, with a pulse running down it
pub(crate) struct Grid;

impl BackgroundPattern for Grid {
    fn paint(&self, ctx: &PatternContext, out: &mut Vec<BackgroundCell>) {
        // Denser grids at higher intensity
        let spacing = 4 + ((1.0 - ctx.density) * 8.0) as i32;
        let scroll = ctx.frame / 4;
        let pulse_row = (ctx.frame / 2) % ctx.canvas.height;

        for row in ctx.viewport.rows() {
            let horizontal = (row + scroll) % spacing == 0;
            for col in ctx.viewport.cols() {
                let vertical = col % (spacing * 2) == 0;
                let glyph = match (horizontal, vertical) {
                    (true, true) => '┼',
                    (true, false) => '─',
                    (false, true) => '│',
                    (false, false) => continue,
                };
                let pulsing = row == pulse_row;
                out.push(BackgroundCell { row, col, glyph, fg: if pulsing { 201 } else { 25 }, bold: pulsing });
            }
        }
    }
}
