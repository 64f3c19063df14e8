pub mod gradient;
pub mod presets;

use std::fmt;
use std::io::{self, Write};

pub use gradient::{Gradient, GradientDirection, gradient_position, interpolate_gradient};
pub use presets::{GradientParseError, GradientPreset, generate_auto_gradient, parse_gradient_colors};

/// Levels of the 6x6x6 cube in the 256 color palette.
const CUBE_LEVELS: [i32; 6] = [0, 95, 135, 175, 215, 255];

/// A 24 bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The closest entry in the 6x6x6 color cube of the 256 color palette.
    pub fn palette_index(self) -> u8 {
        rgb_to_palette_index(self.r.into(), self.g.into(), self.b.into())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A color in HSV space.
///
/// Hue is in degrees in `[0, 360)`, saturation and value are in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Quantize an RGB triple onto the 256 color palette cube.
///
/// Channels are clamped to `[0, 255]` and each one is snapped independently to the nearest cube level using
/// midpoint thresholds. The result is always in `[16, 231]`.
pub fn rgb_to_palette_index(r: i32, g: i32, b: i32) -> u8 {
    let quantize = |channel: i32| {
        let channel = channel.clamp(0, 255);
        let mut level = 0;
        for i in 1..CUBE_LEVELS.len() {
            let midpoint = CUBE_LEVELS[i - 1] + (CUBE_LEVELS[i] - CUBE_LEVELS[i - 1]) / 2;
            if channel > midpoint {
                level = i as i32;
            }
        }
        level
    };
    (16 + 36 * quantize(r) + 6 * quantize(g) + quantize(b)) as u8
}

/// Convert HSV to RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = if hsv.h.is_finite() { hsv.h.rem_euclid(360.0) } else { 0.0 };
    let s = if hsv.s.is_finite() { hsv.s.clamp(0.0, 1.0) } else { 0.0 };
    let v = if hsv.v.is_finite() { hsv.v.clamp(0.0, 1.0) } else { 0.0 };

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(((r + m) * 255.0).round() as u8, ((g + m) * 255.0).round() as u8, ((b + m) * 255.0).round() as u8)
}

/// Convert RGB to HSV.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r as f32 / 255.0;
    let g = rgb.g as f32 / 255.0;
    let b = rgb.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };
    Hsv::new(h.rem_euclid(360.0), s, max)
}

/// A fully saturated, fully bright color at `position` around the hue circle.
///
/// `position` is a fraction of a full turn, so `0.0` and `1.0` are both red.
pub fn color_wheel(position: f32) -> Rgb {
    hsv_to_rgb(Hsv::new(360.0 * position, 1.0, 1.0))
}

/// Blend two colors channel by channel.
///
/// `progress <= 0` yields `from` and `progress >= 1` yields `to`, exactly. In between, channels are truncated.
pub fn interpolate_rgb(from: Rgb, to: Rgb, progress: f32) -> Rgb {
    if progress.is_nan() || progress <= 0.0 {
        return from;
    }
    if progress >= 1.0 {
        return to;
    }
    let blend = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * progress) as u8;
    Rgb::new(blend(from.r, to.r), blend(from.g, to.g), blend(from.b, to.b))
}

/// Toggles that change how colors are written to the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorOptions {
    /// Never emit colors. Bold is still honored.
    pub no_color: bool,
    /// Fold every palette index into the 16 basic colors.
    pub reduced_palette: bool,
}

/// The visual attributes of a single terminal cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SgrStyle {
    pub fg: Option<u8>,
    pub bg: Option<u8>,
    pub bold: bool,
}

impl SgrStyle {
    pub const fn new(fg: Option<u8>, bg: Option<u8>, bold: bool) -> Self {
        Self { fg, bg, bold }
    }

    /// Whether this style is the terminal's default rendition.
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the output toggles to this style.
    pub fn resolve(self, options: &ColorOptions) -> Self {
        if options.no_color {
            return Self::new(None, None, self.bold);
        }
        if options.reduced_palette {
            return Self::new(self.fg.map(|c| c % 16), self.bg.map(|c| c % 16), self.bold);
        }
        self
    }

    /// Whether going from `self` to `next` requires dropping an attribute, which SGR can only do via a reset.
    fn loses_attributes(&self, next: &Self) -> bool {
        (self.bold && !next.bold) || (self.fg.is_some() && next.fg.is_none()) || (self.bg.is_some() && next.bg.is_none())
    }
}

/// Write the shortest SGR sequence that moves the terminal from `current` into `next`.
///
/// Both styles must already be resolved against the output options.
pub fn write_transition<W: Write>(out: &mut W, current: &SgrStyle, next: &SgrStyle) -> io::Result<()> {
    if current == next {
        return Ok(());
    }
    let mut current = *current;
    if current.loses_attributes(next) {
        out.write_all(b"\x1b[0m")?;
        current = SgrStyle::default();
    }
    if next.bold && !current.bold {
        out.write_all(b"\x1b[1m")?;
    }
    if let Some(fg) = next.fg.filter(|fg| current.fg != Some(*fg)) {
        write!(out, "\x1b[38;5;{fg}m")?;
    }
    if let Some(bg) = next.bg.filter(|bg| current.bg != Some(*bg)) {
        write!(out, "\x1b[48;5;{bg}m")?;
    }
    Ok(())
}

/// Format the escape sequence that renders `fg`/`bg`/`bold` starting from the default rendition.
///
/// With no attributes left after applying `options` this is a plain reset.
pub fn format_color(fg: Option<u8>, bg: Option<u8>, bold: bool, options: &ColorOptions) -> String {
    let style = SgrStyle::new(fg, bg, bold).resolve(options);
    if style.is_plain() {
        return "\x1b[0m".to_string();
    }
    let mut buffer = Vec::new();
    // writing into a Vec can't fail
    let _ = write_transition(&mut buffer, &SgrStyle::default(), &style);
    String::from_utf8_lossy(&buffer).into_owned()
}
