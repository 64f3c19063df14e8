use anyhow::Context;
use clap::Parser;
use crossterm::{cursor, execute};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tte::config::Config;
use tte::driver::{Animator, load_input};
use tte::{EffectKind, Size};

/// Terminal size used when it can't be probed.
const FALLBACK_TERMINAL: Size = Size::new(80, 24);

/// Animate text read from stdin with visual effects.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// The effect to play.
    effect: Option<String>,

    /// Frames per second.
    #[arg(long)]
    frame_rate: Option<u32>,

    /// Canvas width, 0 to fit the terminal.
    #[arg(long)]
    canvas_width: Option<i32>,

    /// Canvas height, 0 to fit the terminal.
    #[arg(long)]
    canvas_height: Option<i32>,

    /// Where the canvas sits in the terminal: sw, s, se, e, ne, n, nw, w or c.
    #[arg(long)]
    anchor_canvas: Option<String>,

    /// Where the text sits in the canvas: sw, s, se, e, ne, n, nw, w or c.
    #[arg(long)]
    anchor_text: Option<String>,

    /// Size the canvas to the text instead of the terminal.
    #[arg(long)]
    ignore_terminal_dimensions: bool,

    /// Wrap lines that don't fit.
    #[arg(long)]
    wrap_text: bool,

    /// Spaces per tab stop.
    #[arg(long)]
    tab_width: Option<usize>,

    /// Only use the 16 basic colors.
    #[arg(long)]
    xterm_colors: bool,

    /// Don't use colors at all.
    #[arg(long)]
    no_color: bool,

    /// Don't print a newline once the animation is over.
    #[arg(long)]
    no_final_newline: bool,

    /// Gradient preset: rainbow, fire, ocean, sunset, forest, ice, neon or pastel.
    #[arg(long)]
    gradient: Option<String>,

    /// Comma separated gradient colors, as #rrggbb or names.
    #[arg(long)]
    gradient_colors: Option<String>,

    /// Gradient direction: horizontal, vertical, diagonal, radial or angle.
    #[arg(long)]
    gradient_direction: Option<String>,

    /// Gradient angle in degrees.
    #[arg(long, allow_negative_numbers = true)]
    gradient_angle: Option<f32>,

    /// Derive a gradient from the seed.
    #[arg(long)]
    auto_gradient: bool,

    /// Don't color the text with a gradient.
    #[arg(long)]
    no_gradient: bool,

    /// Seed for anything random. Runs with the same seed are identical.
    #[arg(long)]
    seed: Option<u64>,

    /// Background pattern: none, stars, rain, particles, grid, waves or plasma.
    #[arg(long)]
    background: Option<String>,

    /// Background density, from 0 to 100.
    #[arg(long)]
    background_intensity: Option<u8>,

    /// Stop after this many frames even if the effect isn't done.
    #[arg(long)]
    max_frames: Option<u32>,

    /// Easing curve for effects that move text, for example `out-bounce` or `in-out-sine`.
    #[arg(long)]
    easing: Option<String>,

    /// YAML file with default settings. Command line flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the available effects and exit.
    #[arg(long)]
    list_effects: bool,

    /// Log filter, for example `debug` or `tte=trace`. Logs go to stderr.
    #[arg(long, env = "TTE_LOG", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// The settings given on the command line. Flags that weren't passed are left unset.
    fn overrides(&self) -> Config {
        Config {
            effect: self.effect.clone(),
            frame_rate: self.frame_rate,
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            anchor_canvas: self.anchor_canvas.clone(),
            anchor_text: self.anchor_text.clone(),
            ignore_terminal_dimensions: self.ignore_terminal_dimensions.then_some(true),
            wrap_text: self.wrap_text.then_some(true),
            tab_width: self.tab_width,
            xterm_colors: self.xterm_colors.then_some(true),
            no_color: self.no_color.then_some(true),
            no_final_newline: self.no_final_newline.then_some(true),
            gradient: self.gradient.clone(),
            gradient_colors: self.gradient_colors.clone(),
            gradient_direction: self.gradient_direction.clone(),
            gradient_angle: self.gradient_angle,
            auto_gradient: self.auto_gradient.then_some(true),
            no_gradient: self.no_gradient.then_some(true),
            seed: self.seed,
            background: self.background.clone(),
            background_intensity: self.background_intensity,
            max_frames: self.max_frames,
            easing: self.easing.clone(),
        }
    }
}

/// Hides the cursor and shows it again when dropped.
struct CursorGuard;

impl CursorGuard {
    fn hide() -> io::Result<Self> {
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show);
    }
}

fn init_logging(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter).with_context(|| format!("invalid log filter '{filter}'"))?;
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
    Ok(())
}

fn terminal_size() -> Size {
    match crossterm::terminal::size() {
        Ok((width, height)) if width > 0 && height > 0 => Size::new(width.into(), height.into()),
        Ok(_) => FALLBACK_TERMINAL,
        Err(e) => {
            warn!("could not read terminal size, assuming 80x24: {e}");
            FALLBACK_TERMINAL
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.list_effects {
        for name in EffectKind::names() {
            println!("{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let file_config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    // Everything is validated before the terminal is touched
    let plan = file_config.merge(cli.overrides()).into_plan(fastrand::u64(..))?;
    debug!(?plan, "configuration resolved");

    if io::stdin().is_terminal() {
        warn!("reading text from a terminal, end input with Ctrl-D");
    }
    let input = io::read_to_string(io::stdin()).context("failed to read input")?;
    let terminal = terminal_size();
    let loaded = load_input(&input, &plan, terminal);

    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = stop.clone();
    ctrlc::set_handler(move || handler_stop.store(true, Ordering::Relaxed))
        .context("failed to install Ctrl-C handler")?;

    let mut animator = Animator::new(plan, loaded, terminal);
    let summary = {
        let _cursor = CursorGuard::hide().context("failed to hide cursor")?;
        let mut stdout = io::stdout().lock();
        animator.run(&mut stdout, &stop).context("failed to write frame")?
    };
    debug!(?summary, "animation finished");

    if summary.interrupted {
        return Ok(ExitCode::from(130));
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;
    run(cli)
}
