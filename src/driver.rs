use crate::cell::Cell;
use crate::config::Plan;
use crate::effects::{FrameContext, apply_effect, apply_final_gradient, apply_initial_gradient, is_complete};
use crate::geometry::{Geometry, Size};
use crate::input::{LoadOptions, LoadedText, MAX_CELLS, load_text};
use crate::render::{Compositor, MAX_SIDE};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Frames always played, even when the effect finishes sooner.
pub const MIN_FRAMES: u32 = 60;

/// How a run ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames rendered.
    pub frames: u32,
    /// Whether every cell finished animating.
    pub completed: bool,
    /// Whether the run was stopped from outside.
    pub interrupted: bool,
    pub bytes_written: usize,
}

/// Work out where the canvas and the text go.
///
/// A zero canvas side takes the terminal's, or the text's when terminal dimensions are ignored, in which case the
/// terminal is treated as being exactly as large as the canvas. Canvas sides are capped at [MAX_SIDE].
pub fn layout(plan: &Plan, text: Size, terminal: Size) -> Geometry {
    let fallback = if plan.ignore_terminal_dimensions { text } else { terminal };
    let side = |requested: i32, default: i32| (if requested > 0 { requested } else { default }).min(MAX_SIDE);
    let canvas = Size::new(side(plan.canvas.width, fallback.width), side(plan.canvas.height, fallback.height));
    let terminal = if plan.ignore_terminal_dimensions { canvas } else { terminal };
    Geometry::new(terminal, canvas, text, plan.anchor_canvas, plan.anchor_text)
}

/// Lay out `input` into cells the way `plan` asks for.
pub fn load_input(input: &str, plan: &Plan, terminal: Size) -> LoadedText {
    let wrap_width = plan.wrap_text.then(|| {
        let width = if plan.canvas.width > 0 { plan.canvas.width } else { terminal.width };
        width.max(1) as usize
    });
    load_text(input, &LoadOptions { tab_width: plan.tab_width, wrap_width, max_cells: MAX_CELLS })
}

/// Plays an effect over a set of cells.
pub struct Animator {
    plan: Plan,
    cells: Vec<Cell>,
    text: Size,
    compositor: Compositor,
}

impl Animator {
    pub fn new(plan: Plan, loaded: LoadedText, terminal: Size) -> Self {
        let LoadedText { mut cells, size: text, .. } = loaded;
        let geometry = layout(&plan, text, terminal);
        debug!(?geometry, "layout computed");
        apply_initial_gradient(&mut cells, plan.gradient.as_ref(), text);
        let compositor = Compositor::new(geometry, plan.background, plan.color);
        Self { plan, cells, text, compositor }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Play the animation into `out`, pacing frames in real time.
    pub fn run<W: Write>(&mut self, out: &mut W, stop: &AtomicBool) -> io::Result<RunSummary> {
        self.run_with(out, stop, std::thread::sleep)
    }

    /// Play the animation into `out`, calling `sleep` between frames.
    pub fn run_with<W, S>(&mut self, out: &mut W, stop: &AtomicBool, mut sleep: S) -> io::Result<RunSummary>
    where
        W: Write,
        S: FnMut(Duration),
    {
        let frame_time = Duration::from_secs(1) / self.plan.frame_rate.max(1);
        let mut summary = RunSummary::default();
        info!(
            effect = %self.plan.effect,
            cells = self.cells.len(),
            background = %self.plan.background.kind,
            seed = self.plan.seed,
            "starting animation"
        );

        for frame in 0..self.plan.max_frames {
            if stop.load(Ordering::Relaxed) {
                info!(frame, "animation interrupted");
                summary.interrupted = true;
                break;
            }
            let frame = frame as i32;
            let ctx = FrameContext::new(frame, self.text, self.plan.seed).with_easing(self.plan.easing);
            apply_effect(self.plan.effect, &mut self.cells, &ctx);

            let complete = is_complete(&self.cells);
            if complete {
                apply_final_gradient(&mut self.cells, self.plan.gradient.as_ref(), self.text);
            }
            let stats = self.compositor.render_frame(&self.cells, frame, out)?;
            trace!(frame, ?stats, "frame rendered");
            summary.frames += 1;
            summary.bytes_written += stats.bytes_written;

            if complete && frame as u32 > MIN_FRAMES {
                info!(frame, "animation complete");
                summary.completed = true;
                break;
            }
            sleep(frame_time);
        }

        if !summary.completed && !summary.interrupted {
            warn!(max_frames = self.plan.max_frames, "frame limit reached before the effect finished");
        }
        if self.plan.final_newline {
            out.write_all(b"\n")?;
            out.flush()?;
        }
        Ok(summary)
    }
}
