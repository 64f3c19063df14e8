//! Terminal text effects.
//!
//! Text is split into cells, an effect moves and recolors those cells frame by frame, and a compositor merges
//! them with an optional procedural background into 256 color escape sequences.

pub mod background;
pub mod cell;
pub mod color;
pub mod config;
pub mod driver;
pub mod easing;
pub mod effects;
pub mod geometry;
pub mod input;
pub mod render;

pub use background::{BackgroundConfig, BackgroundKind};
pub use cell::{Cell, Coord};
pub use config::{Config, ConfigError, Plan};
pub use driver::{Animator, RunSummary};
pub use effects::{EffectKind, FrameContext, UnknownEffect, apply_effect, is_complete};
pub use geometry::{Anchor, Geometry, Size};
pub use render::{Compositor, RenderStats};
