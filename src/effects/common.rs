use crate::cell::Cell;
use crate::easing::Easing;
use crate::geometry::Size;

/// Everything an effect knows about the frame it is computing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameContext {
    /// Frames elapsed since the animation started.
    pub frame: i32,

    /// Size of the laid out text.
    pub text: Size,

    /// Seed for effects that flicker or substitute glyphs.
    pub seed: u64,

    /// Replaces the curve motion effects move cells along.
    pub easing: Option<Easing>,
}

impl FrameContext {
    pub fn new(frame: i32, text: Size, seed: u64) -> Self {
        Self { frame, text, seed, easing: None }
    }

    pub fn with_easing(self, easing: Option<Easing>) -> Self {
        Self { easing, ..self }
    }

    /// Ease `progress` along the configured curve, or `default` when none was configured.
    pub(crate) fn ease(&self, default: Easing, progress: f32) -> f32 {
        self.easing.unwrap_or(default).apply(progress)
    }

    /// Text width, never zero.
    pub(crate) fn width(&self) -> i32 {
        self.text.width.max(1)
    }

    /// Text height, never zero.
    pub(crate) fn height(&self) -> i32 {
        self.text.height.max(1)
    }
}

/// A text effect.
///
/// Implementations compute each cell's state for `ctx.frame` only from the cell's load time fields (target,
/// original glyph, gradient color, index), never from what a previous frame left behind. Any frame can be
/// computed on a freshly loaded set of cells.
pub trait Effect: Sync {
    fn apply(&self, cells: &mut [Cell], ctx: &FrameContext);
}

/// Put a cell back into its load time state: hidden and still animating.
pub(crate) fn reset(cell: &mut Cell) {
    cell.glyph = cell.original_glyph;
    cell.pos = cell.target;
    cell.visible = false;
    cell.active = true;
    cell.bold = false;
    cell.color_fg = cell.base_fg;
}

/// The classic `rand()` LCG step applied to a cell index, on wrapping 32 bit math.
pub(crate) fn lcg(index: usize) -> i32 {
    (index as i32).wrapping_mul(1_103_515_245).wrapping_add(12_345)
}

/// A generator that is the same every time it's asked for the same seed, cell and tick.
pub(crate) fn frame_rng(seed: u64, index: usize, tick: i32) -> fastrand::Rng {
    let mut mixed = seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    mixed ^= (tick as u32 as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F).rotate_left(31);
    fastrand::Rng::with_seed(mixed)
}

/// Length of an integer offset.
pub(crate) fn distance(dx: i32, dy: i32) -> f32 {
    ((dx * dx + dy * dy) as f32).sqrt()
}

/// Move `from` towards `to` by `progress`, truncating the step.
pub(crate) fn lerp(from: i32, to: i32, progress: f32) -> i32 {
    from + ((to - from) as f32 * progress) as i32
}
