mod grid;
mod particles;
mod plasma;
mod rain;
mod stars;
mod waves;

use crate::geometry::Size;
use serde::Deserialize;
use std::ops::Range;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Which procedural pattern fills the blank parts of the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BackgroundKind {
    #[default]
    None,
    Stars,
    #[strum(to_string = "rain", serialize = "matrix")]
    #[serde(alias = "matrix")]
    Rain,
    Particles,
    Grid,
    Waves,
    Plasma,
}

/// The background to draw and how dense it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundConfig {
    pub kind: BackgroundKind,

    /// Density, from 0 (nothing) to 100.
    pub intensity: u8,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self { kind: BackgroundKind::None, intensity: 50 }
    }
}

/// A single background glyph, in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundCell {
    pub row: i32,
    pub col: i32,
    pub glyph: char,
    pub fg: u8,
    pub bold: bool,
}

/// The part of the canvas that ends up on screen, in canvas coordinates. Bottom and right are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Viewport {
    /// The whole canvas.
    pub fn full(canvas: Size) -> Self {
        Self { top: 0, left: 0, bottom: canvas.height.max(0), right: canvas.width.max(0) }
    }

    /// The canvas placed at `(row, col)` of a `screen` sized grid, cut down to what lands on it.
    pub fn on_screen(canvas: Size, row: i32, col: i32, screen: Size) -> Self {
        let full = Self::full(canvas);
        Self {
            top: full.top.max(-row),
            left: full.left.max(-col),
            bottom: full.bottom.min(screen.height - row),
            right: full.right.min(screen.width - col),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top >= self.bottom || self.left >= self.right
    }

    pub fn rows(&self) -> Range<i32> {
        self.top..self.bottom
    }

    pub fn cols(&self) -> Range<i32> {
        self.left..self.right
    }

    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.rows().contains(&row) && self.cols().contains(&col)
    }
}

/// What a pattern gets to draw a frame.
#[derive(Clone, Copy, Debug)]
pub struct PatternContext {
    pub frame: i32,

    /// Density as a fraction in `[0, 1]`.
    pub density: f32,

    pub canvas: Size,

    /// Only cells in here are painted.
    pub viewport: Viewport,
}

/// A procedural background.
///
/// Patterns hold no state: the same context always produces the same cells.
pub trait BackgroundPattern: Sync {
    fn paint(&self, ctx: &PatternContext, out: &mut Vec<BackgroundCell>);
}

impl BackgroundKind {
    /// Get the pattern for this kind, if it draws anything.
    pub fn pattern(self) -> Option<&'static dyn BackgroundPattern> {
        match self {
            Self::None => None,
            Self::Stars => Some(&stars::Stars),
            Self::Rain => Some(&rain::Rain),
            Self::Particles => Some(&particles::Particles),
            Self::Grid => Some(&grid::Grid),
            Self::Waves => Some(&waves::Waves),
            Self::Plasma => Some(&plasma::Plasma),
        }
    }
}

impl BackgroundConfig {
    /// Fill `out` with this frame's background cells inside `viewport`. `out` is cleared first.
    pub fn paint(&self, frame: i32, canvas: Size, viewport: Viewport, out: &mut Vec<BackgroundCell>) {
        out.clear();
        let density = f32::from(self.intensity.min(100)) / 100.0;
        if density <= 0.0 || canvas.width <= 0 || canvas.height <= 0 || viewport.is_empty() {
            return;
        }
        if let Some(pattern) = self.kind.pattern() {
            pattern.paint(&PatternContext { frame, density, canvas, viewport }, out);
        }
    }
}

/// Hash-like noise in `[0, 1)`, stable for the same inputs.
pub(crate) fn noise(x: f32, y: f32, t: f32) -> f32 {
    ((x * 12.9898 + y * 78.233 + t).sin() * 43758.5453).fract().abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn painted(kind: BackgroundKind, intensity: u8, frame: i32, canvas: Size) -> Vec<BackgroundCell> {
        let mut out = Vec::new();
        BackgroundConfig { kind, intensity }.paint(frame, canvas, Viewport::full(canvas), &mut out);
        out
    }

    #[rstest]
    fn patterns_stay_on_canvas(
        #[values(
            BackgroundKind::Stars,
            BackgroundKind::Rain,
            BackgroundKind::Particles,
            BackgroundKind::Grid,
            BackgroundKind::Waves,
            BackgroundKind::Plasma
        )]
        kind: BackgroundKind,
        #[values(0, 17, 250)] frame: i32,
    ) {
        let canvas = Size::new(40, 12);
        let cells = painted(kind, 100, frame, canvas);
        assert!(!cells.is_empty(), "{kind} painted nothing");
        for cell in &cells {
            assert!(cell.row >= 0 && cell.row < canvas.height, "{kind} row {}", cell.row);
            assert!(cell.col >= 0 && cell.col < canvas.width, "{kind} col {}", cell.col);
            assert_ne!(cell.glyph, ' ');
        }
    }

    #[rstest]
    #[case(BackgroundKind::Stars)]
    #[case(BackgroundKind::Rain)]
    #[case(BackgroundKind::Particles)]
    #[case(BackgroundKind::Grid)]
    #[case(BackgroundKind::Waves)]
    #[case(BackgroundKind::Plasma)]
    fn patterns_are_stateless(#[case] kind: BackgroundKind) {
        let canvas = Size::new(30, 10);
        assert_eq!(painted(kind, 60, 42, canvas), painted(kind, 60, 42, canvas));
    }

    #[rstest]
    #[case(BackgroundKind::Stars)]
    #[case(BackgroundKind::Plasma)]
    #[case(BackgroundKind::Particles)]
    fn zero_intensity_paints_nothing(#[case] kind: BackgroundKind) {
        assert!(painted(kind, 0, 10, Size::new(30, 10)).is_empty());
    }

    #[test]
    fn intensity_controls_density() {
        let canvas = Size::new(60, 20);
        let sparse = painted(BackgroundKind::Plasma, 10, 5, canvas).len();
        let dense = painted(BackgroundKind::Plasma, 100, 5, canvas).len();
        assert!(sparse < dense);
    }

    #[rstest]
    #[case(BackgroundKind::Stars)]
    #[case(BackgroundKind::Rain)]
    #[case(BackgroundKind::Particles)]
    #[case(BackgroundKind::Grid)]
    #[case(BackgroundKind::Waves)]
    #[case(BackgroundKind::Plasma)]
    fn patterns_only_paint_the_viewport(#[case] kind: BackgroundKind) {
        let canvas = Size::new(4000, 4000);
        let viewport = Viewport::on_screen(canvas, -1960, -1990, Size::new(80, 24));
        assert_eq!(viewport, Viewport { top: 1960, left: 1990, bottom: 1984, right: 2070 });
        let mut out = Vec::new();
        BackgroundConfig { kind, intensity: 100 }.paint(30, canvas, viewport, &mut out);
        assert!(out.len() <= 80 * 24 * 2);
        assert!(out.iter().all(|cell| viewport.contains(cell.row, cell.col)), "{kind} left the viewport");
    }

    #[test]
    fn viewport_off_screen_is_empty() {
        let viewport = Viewport::on_screen(Size::new(10, 10), 30, 0, Size::new(80, 24));
        assert!(viewport.is_empty());
        let mut out = Vec::new();
        BackgroundConfig { kind: BackgroundKind::Plasma, intensity: 100 }.paint(0, Size::new(10, 10), viewport, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn none_paints_nothing() {
        assert!(painted(BackgroundKind::None, 100, 3, Size::new(10, 10)).is_empty());
    }

    #[test]
    fn empty_canvas() {
        assert!(painted(BackgroundKind::Grid, 100, 3, Size::new(0, 0)).is_empty());
    }

    #[test]
    fn matrix_is_an_alias_for_rain() {
        assert_eq!("matrix".parse::<BackgroundKind>().unwrap(), BackgroundKind::Rain);
        assert_eq!("Plasma".parse::<BackgroundKind>().unwrap(), BackgroundKind::Plasma);
    }

    #[test]
    fn noise_is_in_range() {
        for i in 0..200 {
            let value = noise(i as f32, (i * 3) as f32, i as f32 * 0.5);
            assert!((0.0..1.0).contains(&value));
        }
    }
}
