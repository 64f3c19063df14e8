use super::gradient::{Gradient, GradientDirection, MAX_STOPS};
use super::Rgb;
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A named, ready to use gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GradientPreset {
    Rainbow,
    Fire,
    Ocean,
    Sunset,
    Forest,
    Ice,
    Neon,
    Pastel,
}

const RAINBOW: &[Rgb] = &[
    Rgb::new(255, 0, 0),
    Rgb::new(255, 127, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(75, 0, 130),
    Rgb::new(148, 0, 211),
];

const FIRE: &[Rgb] = &[
    Rgb::new(128, 0, 0),
    Rgb::new(255, 64, 0),
    Rgb::new(255, 128, 0),
    Rgb::new(255, 192, 0),
    Rgb::new(255, 255, 64),
    Rgb::new(255, 255, 192),
];

const OCEAN: &[Rgb] = &[
    Rgb::new(0, 32, 64),
    Rgb::new(0, 64, 128),
    Rgb::new(0, 128, 192),
    Rgb::new(64, 192, 224),
    Rgb::new(160, 232, 255),
];

const SUNSET: &[Rgb] = &[
    Rgb::new(64, 0, 64),
    Rgb::new(128, 0, 96),
    Rgb::new(255, 64, 64),
    Rgb::new(255, 128, 0),
    Rgb::new(255, 200, 64),
];

const FOREST: &[Rgb] = &[
    Rgb::new(0, 48, 0),
    Rgb::new(16, 96, 32),
    Rgb::new(64, 144, 48),
    Rgb::new(144, 200, 96),
    Rgb::new(200, 232, 160),
];

const ICE: &[Rgb] = &[
    Rgb::new(255, 255, 255),
    Rgb::new(200, 240, 255),
    Rgb::new(128, 208, 255),
    Rgb::new(64, 160, 224),
    Rgb::new(32, 96, 192),
];

const NEON: &[Rgb] = &[
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 64),
];

const PASTEL: &[Rgb] = &[
    Rgb::new(255, 179, 186),
    Rgb::new(255, 223, 186),
    Rgb::new(255, 255, 186),
    Rgb::new(186, 255, 201),
    Rgb::new(186, 225, 255),
];

impl GradientPreset {
    /// The color stops of this preset.
    pub fn stops(self) -> &'static [Rgb] {
        match self {
            Self::Rainbow => RAINBOW,
            Self::Fire => FIRE,
            Self::Ocean => OCEAN,
            Self::Sunset => SUNSET,
            Self::Forest => FOREST,
            Self::Ice => ICE,
            Self::Neon => NEON,
            Self::Pastel => PASTEL,
        }
    }

    /// The direction this preset looks best in.
    pub fn direction(self) -> GradientDirection {
        match self {
            Self::Rainbow | Self::Neon | Self::Pastel => GradientDirection::Horizontal,
            Self::Fire => GradientDirection::Radial,
            Self::Ocean | Self::Forest => GradientDirection::Vertical,
            Self::Sunset | Self::Ice => GradientDirection::Diagonal,
        }
    }

    pub fn gradient(self) -> Gradient {
        Gradient::new(self.stops().to_vec(), self.direction())
    }
}

/// Colors that can be used by name in a gradient color list.
const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("orange", Rgb::new(255, 165, 0)),
    ("purple", Rgb::new(128, 0, 128)),
    ("pink", Rgb::new(255, 192, 203)),
    ("gray", Rgb::new(128, 128, 128)),
    ("grey", Rgb::new(128, 128, 128)),
];

/// Errors that can occur when parsing a gradient color list.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GradientParseError {
    #[error("gradient color list is empty")]
    Empty,

    #[error("invalid hex color '{0}': expected #rrggbb")]
    InvalidHex(String),

    #[error("unknown color name '{0}'")]
    UnknownName(String),

    #[error("too many gradient colors: {0} given, at most {max} supported", max = MAX_STOPS)]
    TooManyStops(usize),
}

fn parse_color(input: &str) -> Result<Rgb, GradientParseError> {
    if let Some(hex) = input.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GradientParseError::InvalidHex(input.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| GradientParseError::InvalidHex(input.to_string()))
        };
        return Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?));
    }
    let lower = input.to_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, color)| *color)
        .ok_or_else(|| GradientParseError::UnknownName(input.to_string()))
}

/// Parse a comma separated list of `#rrggbb` colors and/or color names into gradient stops.
pub fn parse_gradient_colors(input: &str) -> Result<Vec<Rgb>, GradientParseError> {
    let entries: Vec<&str> = input.split(',').map(str::trim).filter(|entry| !entry.is_empty()).collect();
    if entries.is_empty() {
        return Err(GradientParseError::Empty);
    }
    if entries.len() > MAX_STOPS {
        return Err(GradientParseError::TooManyStops(entries.len()));
    }
    entries.into_iter().map(parse_color).collect()
}

/// Derive a gradient from a seed. The same seed always yields the same gradient.
pub fn generate_auto_gradient(seed: u64) -> Gradient {
    let mut rng = fastrand::Rng::with_seed(seed);
    let presets: Vec<_> = GradientPreset::iter().collect();
    let directions: Vec<_> = GradientDirection::iter().collect();
    let preset = presets[rng.usize(..presets.len())];
    let direction = directions[rng.usize(..directions.len())];
    let mut gradient = Gradient::new(preset.stops().to_vec(), direction);
    if direction == GradientDirection::Angle {
        gradient.angle = rng.u32(0..360) as f32;
    }
    gradient
}

/// Rich green spectrum, radiating from the center.
pub(crate) fn matrix_gradient() -> Gradient {
    let stops = vec![
        Rgb::new(0, 64, 0),
        Rgb::new(0, 128, 0),
        Rgb::new(64, 192, 64),
        Rgb::new(128, 255, 128),
        Rgb::new(192, 255, 192),
    ];
    Gradient::new(stops, GradientDirection::Radial)
}

/// Terminal green, diagonally.
pub(crate) fn decrypt_gradient() -> Gradient {
    let stops = vec![Rgb::new(0, 80, 0), Rgb::new(0, 160, 0), Rgb::new(64, 255, 64), Rgb::new(128, 255, 128)];
    Gradient::new(stops, GradientDirection::Diagonal)
}

/// Blue through cyan into white, in a direction picked from the seed.
pub(crate) fn default_gradient(seed: u64) -> Gradient {
    let stops = vec![
        Rgb::new(0, 64, 128),
        Rgb::new(0, 96, 192),
        Rgb::new(0, 128, 255),
        Rgb::new(64, 192, 255),
        Rgb::new(128, 224, 255),
        Rgb::new(192, 240, 255),
        Rgb::new(224, 248, 255),
        Rgb::new(255, 255, 255),
    ];
    let mut rng = fastrand::Rng::with_seed(seed);
    let directions: Vec<_> = GradientDirection::iter().collect();
    let direction = directions[rng.usize(..directions.len())];
    let mut gradient = Gradient::new(stops, direction);
    if direction == GradientDirection::Angle {
        gradient.angle = rng.u32(0..360) as f32;
    }
    gradient
}
