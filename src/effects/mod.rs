mod common;
mod glyphs;

// Individual effect modules
mod beams;
mod blackhole;
mod burn;
mod crumble;
mod decrypt;
mod expand;
mod fireworks;
mod highlight;
mod matrix;
mod pour;
mod rain;
mod rings;
mod slice;
mod slide;
mod spotlights;
mod swarm;
mod synthgrid;
mod typewriter;
mod unstable;
mod waves;
mod wipe;

pub use common::{Effect, FrameContext};

use crate::cell::Cell;
use crate::color::presets::{decrypt_gradient, default_gradient, matrix_gradient};
use crate::color::{Gradient, GradientPreset};
use crate::geometry::Size;
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The effects that can be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EffectKind {
    Beams,
    Typewriter,
    Wipe,
    Spotlights,
    Burn,
    Swarm,
    Waves,
    Rain,
    Slide,
    Expand,
    Matrix,
    Fireworks,
    Decrypt,
    Highlight,
    Unstable,
    Crumble,
    Slice,
    Pour,
    Blackhole,
    Rings,
    Synthgrid,
}

/// An effect name that isn't in the registry.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown effect '{name}', available effects: {available}", available = EffectKind::names().join(", "))]
pub struct UnknownEffect {
    pub name: String,
}

impl EffectKind {
    /// Get the effect implementation for this kind.
    pub fn effect(self) -> &'static dyn Effect {
        match self {
            Self::Beams => &beams::Beams,
            Self::Typewriter => &typewriter::Typewriter,
            Self::Wipe => &wipe::Wipe,
            Self::Spotlights => &spotlights::Spotlights,
            Self::Burn => &burn::Burn,
            Self::Swarm => &swarm::Swarm,
            Self::Waves => &waves::Waves,
            Self::Rain => &rain::Rain,
            Self::Slide => &slide::Slide,
            Self::Expand => &expand::Expand,
            Self::Matrix => &matrix::Matrix,
            Self::Fireworks => &fireworks::Fireworks,
            Self::Decrypt => &decrypt::Decrypt,
            Self::Highlight => &highlight::Highlight,
            Self::Unstable => &unstable::Unstable,
            Self::Crumble => &crumble::Crumble,
            Self::Slice => &slice::Slice,
            Self::Pour => &pour::Pour,
            Self::Blackhole => &blackhole::Blackhole,
            Self::Rings => &rings::Rings,
            Self::Synthgrid => &synthgrid::Synthgrid,
        }
    }

    /// Look an effect up by name.
    pub fn from_name(name: &str) -> Result<Self, UnknownEffect> {
        name.parse().map_err(|_| UnknownEffect { name: name.to_string() })
    }

    /// The names of every registered effect, in registry order.
    pub fn names() -> Vec<&'static str> {
        Self::iter().map(Into::into).collect()
    }

    /// Whether this effect's end state leaves the text hidden.
    pub fn dissolves(self) -> bool {
        matches!(self, Self::Crumble)
    }

    /// The gradient this effect uses when none is requested.
    pub fn default_gradient(self, seed: u64) -> Gradient {
        match self {
            Self::Matrix => matrix_gradient(),
            Self::Fireworks => GradientPreset::Fire.gradient(),
            Self::Decrypt => decrypt_gradient(),
            _ => default_gradient(seed),
        }
    }
}

/// Compute every cell's state for `ctx.frame`.
pub fn apply_effect(kind: EffectKind, cells: &mut [Cell], ctx: &FrameContext) {
    kind.effect().apply(cells, ctx);
}

/// Whether every cell has finished animating.
pub fn is_complete(cells: &[Cell]) -> bool {
    !cells.iter().any(|cell| cell.active)
}

/// Color every cell from `gradient`, sampled over the text area, and remember it as the cell's base color.
///
/// Without a gradient cells keep the default foreground.
pub fn apply_initial_gradient(cells: &mut [Cell], gradient: Option<&Gradient>, text: Size) {
    for cell in cells.iter_mut() {
        let color = match gradient {
            Some(gradient) => gradient.palette_index_at(cell.target.row, cell.target.col, text.width, text.height),
            None => Cell::DEFAULT_FG,
        };
        cell.color_fg = color;
        cell.base_fg = color;
        cell.bold = false;
    }
}

/// Recolor the cells that finished animating from `gradient` and drop their bold.
pub fn apply_final_gradient(cells: &mut [Cell], gradient: Option<&Gradient>, text: Size) {
    let Some(gradient) = gradient else {
        return;
    };
    for cell in cells.iter_mut().filter(|cell| !cell.active) {
        cell.color_fg = gradient.palette_index_at(cell.target.row, cell.target.col, text.width, text.height);
        cell.bold = false;
    }
}
