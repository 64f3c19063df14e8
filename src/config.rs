use crate::background::{BackgroundConfig, BackgroundKind};
use crate::color::{
    ColorOptions, Gradient, GradientDirection, GradientParseError, GradientPreset, generate_auto_gradient,
    parse_gradient_colors,
};
use crate::easing::Easing;
use crate::effects::{EffectKind, UnknownEffect};
use crate::geometry::{Anchor, Size};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum::IntoEnumIterator;

pub const DEFAULT_FRAME_RATE: u32 = 240;
pub const DEFAULT_MAX_FRAMES: u32 = 1000;
pub const DEFAULT_TAB_WIDTH: usize = 4;
pub const DEFAULT_BACKGROUND_INTENSITY: u8 = 50;

/// Run settings, as read from a config file or the command line.
///
/// Every field is optional so that layers can be stacked with [Config::merge].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    pub effect: Option<String>,
    pub frame_rate: Option<u32>,
    pub canvas_width: Option<i32>,
    pub canvas_height: Option<i32>,
    pub anchor_canvas: Option<String>,
    pub anchor_text: Option<String>,
    pub ignore_terminal_dimensions: Option<bool>,
    pub wrap_text: Option<bool>,
    pub tab_width: Option<usize>,
    pub xterm_colors: Option<bool>,
    pub no_color: Option<bool>,
    pub no_final_newline: Option<bool>,
    pub gradient: Option<String>,
    pub gradient_colors: Option<String>,
    pub gradient_direction: Option<String>,
    pub gradient_angle: Option<f32>,
    pub auto_gradient: Option<bool>,
    pub no_gradient: Option<bool>,
    pub seed: Option<u64>,
    pub background: Option<String>,
    pub background_intensity: Option<u8>,
    pub max_frames: Option<u32>,
    pub easing: Option<String>,
}

/// Errors that can occur when loading or validating the configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("no effect given")]
    MissingEffect,

    #[error(transparent)]
    UnknownEffect(#[from] UnknownEffect),

    #[error("invalid gradient colors: {0}")]
    Gradient(#[from] GradientParseError),

    #[error("invalid {key} '{value}': {reason}")]
    InvalidValue { key: &'static str, value: String, reason: String },
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidValue { key, value: value.to_string(), reason: reason.into() }
    }
}

/// Everything the animation needs, validated.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub effect: EffectKind,

    /// `None` leaves the text in the terminal's default color.
    pub gradient: Option<Gradient>,

    pub background: BackgroundConfig,
    pub color: ColorOptions,
    pub frame_rate: u32,
    pub max_frames: u32,

    /// Requested canvas size. Zero means fit to the terminal, or to the text when terminal dimensions are ignored.
    pub canvas: Size,

    pub anchor_canvas: Anchor,
    pub anchor_text: Anchor,
    pub ignore_terminal_dimensions: bool,
    pub wrap_text: bool,
    pub tab_width: usize,
    pub final_newline: bool,
    pub seed: u64,

    /// Curve for motion effects, instead of their own.
    pub easing: Option<Easing>,
}

fn parse_named<T: FromStr>(key: &'static str, value: Option<&str>, valid: &str) -> Result<Option<T>, ConfigError> {
    value
        .map(|value| value.parse::<T>().map_err(|_| ConfigError::invalid(key, value, format!("expected one of {valid}"))))
        .transpose()
}

impl Config {
    /// Read a YAML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Layer `overrides` on top of this config. Values set in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            effect: overrides.effect.or(self.effect),
            frame_rate: overrides.frame_rate.or(self.frame_rate),
            canvas_width: overrides.canvas_width.or(self.canvas_width),
            canvas_height: overrides.canvas_height.or(self.canvas_height),
            anchor_canvas: overrides.anchor_canvas.or(self.anchor_canvas),
            anchor_text: overrides.anchor_text.or(self.anchor_text),
            ignore_terminal_dimensions: overrides.ignore_terminal_dimensions.or(self.ignore_terminal_dimensions),
            wrap_text: overrides.wrap_text.or(self.wrap_text),
            tab_width: overrides.tab_width.or(self.tab_width),
            xterm_colors: overrides.xterm_colors.or(self.xterm_colors),
            no_color: overrides.no_color.or(self.no_color),
            no_final_newline: overrides.no_final_newline.or(self.no_final_newline),
            gradient: overrides.gradient.or(self.gradient),
            gradient_colors: overrides.gradient_colors.or(self.gradient_colors),
            gradient_direction: overrides.gradient_direction.or(self.gradient_direction),
            gradient_angle: overrides.gradient_angle.or(self.gradient_angle),
            auto_gradient: overrides.auto_gradient.or(self.auto_gradient),
            no_gradient: overrides.no_gradient.or(self.no_gradient),
            seed: overrides.seed.or(self.seed),
            background: overrides.background.or(self.background),
            background_intensity: overrides.background_intensity.or(self.background_intensity),
            max_frames: overrides.max_frames.or(self.max_frames),
            easing: overrides.easing.or(self.easing),
        }
    }

    /// Validate every setting and resolve names, without touching the terminal.
    ///
    /// `fallback_seed` is used when no seed was configured.
    pub fn into_plan(self, fallback_seed: u64) -> Result<Plan, ConfigError> {
        let effect = EffectKind::from_name(self.effect.as_deref().ok_or(ConfigError::MissingEffect)?)?;
        let seed = self.seed.unwrap_or(fallback_seed);

        let frame_rate = self.frame_rate.unwrap_or(DEFAULT_FRAME_RATE);
        if frame_rate == 0 {
            return Err(ConfigError::invalid("frame rate", frame_rate, "must be greater than zero"));
        }
        let max_frames = self.max_frames.unwrap_or(DEFAULT_MAX_FRAMES);
        if max_frames == 0 {
            return Err(ConfigError::invalid("max frames", max_frames, "must be greater than zero"));
        }
        let tab_width = self.tab_width.unwrap_or(DEFAULT_TAB_WIDTH);
        if tab_width == 0 {
            return Err(ConfigError::invalid("tab width", tab_width, "must be at least 1"));
        }
        let canvas = Size::new(self.canvas_width.unwrap_or(0), self.canvas_height.unwrap_or(0));
        for (key, value) in [("canvas width", canvas.width), ("canvas height", canvas.height)] {
            if value < 0 {
                return Err(ConfigError::invalid(key, value, "must not be negative"));
            }
        }
        let intensity = self.background_intensity.unwrap_or(DEFAULT_BACKGROUND_INTENSITY);
        if intensity > 100 {
            return Err(ConfigError::invalid("background intensity", intensity, "must be between 0 and 100"));
        }

        let anchors = "sw, s, se, e, ne, n, nw, w, c";
        let anchor_canvas = parse_named("canvas anchor", self.anchor_canvas.as_deref(), anchors)?.unwrap_or_default();
        let anchor_text = parse_named("text anchor", self.anchor_text.as_deref(), anchors)?.unwrap_or_default();
        let background_kind: BackgroundKind = parse_named(
            "background",
            self.background.as_deref(),
            "none, stars, rain, particles, grid, waves, plasma",
        )?
        .unwrap_or_default();

        let easings = Easing::iter().map(|easing| easing.to_string()).collect::<Vec<_>>().join(", ");
        let easing = parse_named("easing", self.easing.as_deref(), &easings)?;

        let gradient = self.resolve_gradient(effect, seed)?;

        Ok(Plan {
            effect,
            gradient,
            background: BackgroundConfig { kind: background_kind, intensity },
            color: ColorOptions {
                no_color: self.no_color.unwrap_or(false),
                reduced_palette: self.xterm_colors.unwrap_or(false),
            },
            frame_rate,
            max_frames,
            canvas,
            anchor_canvas,
            anchor_text,
            ignore_terminal_dimensions: self.ignore_terminal_dimensions.unwrap_or(false),
            wrap_text: self.wrap_text.unwrap_or(false),
            tab_width,
            final_newline: !self.no_final_newline.unwrap_or(false),
            seed,
            easing,
        })
    }

    /// Pick the gradient: explicit colors, then a preset, then a seeded one, then the effect's own.
    fn resolve_gradient(&self, effect: EffectKind, seed: u64) -> Result<Option<Gradient>, ConfigError> {
        if self.no_gradient.unwrap_or(false) {
            return Ok(None);
        }
        let preset: Option<GradientPreset> = parse_named(
            "gradient preset",
            self.gradient.as_deref(),
            "rainbow, fire, ocean, sunset, forest, ice, neon, pastel",
        )?;
        let direction: Option<GradientDirection> = parse_named(
            "gradient direction",
            self.gradient_direction.as_deref(),
            "horizontal, vertical, diagonal, radial, angle",
        )?;

        let mut gradient = if let Some(colors) = &self.gradient_colors {
            Gradient::new(parse_gradient_colors(colors)?, GradientDirection::default())
        } else if let Some(preset) = preset {
            preset.gradient()
        } else if self.auto_gradient.unwrap_or(false) {
            generate_auto_gradient(seed)
        } else {
            effect.default_gradient(seed)
        };

        if let Some(direction) = direction {
            gradient.direction = direction;
        }
        if let Some(angle) = self.gradient_angle {
            if !angle.is_finite() {
                return Err(ConfigError::invalid("gradient angle", angle, "must be a finite number"));
            }
            gradient.angle = angle;
            // An angle on its own means angle mode
            if direction.is_none() {
                gradient.direction = GradientDirection::Angle;
            }
        }
        Ok(Some(gradient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use rstest::rstest;
    use std::io::Write;

    fn config(effect: &str) -> Config {
        Config { effect: Some(effect.to_string()), ..Default::default() }
    }

    #[test]
    fn defaults() {
        let plan = config("wipe").into_plan(3).unwrap();
        assert_eq!(plan.effect, EffectKind::Wipe);
        assert_eq!(plan.frame_rate, DEFAULT_FRAME_RATE);
        assert_eq!(plan.max_frames, DEFAULT_MAX_FRAMES);
        assert_eq!(plan.tab_width, 4);
        assert_eq!(plan.canvas, Size::new(0, 0));
        assert_eq!(plan.anchor_canvas, Anchor::C);
        assert_eq!(plan.background, BackgroundConfig::default());
        assert!(plan.final_newline);
        assert_eq!(plan.seed, 3);
        assert_eq!(plan.gradient, Some(EffectKind::Wipe.default_gradient(3)));
        assert_eq!(plan.easing, None);
    }

    #[test]
    fn easing_from_file() {
        let from_file = Config::from_yaml("effect: swarm\neasing: in-out-back\n").unwrap();
        let plan = from_file.into_plan(0).unwrap();
        assert_eq!(plan.easing, Some(Easing::InOutBack));
    }

    #[test]
    fn yaml_file_with_cli_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "effect: rain\nframe-rate: 60\nbackground: stars\nbackground-intensity: 20").unwrap();
        let from_file = Config::load(file.path()).unwrap();
        let cli = Config { frame_rate: Some(30), ..Default::default() };
        let plan = from_file.merge(cli).into_plan(0).unwrap();
        assert_eq!(plan.effect, EffectKind::Rain);
        assert_eq!(plan.frame_rate, 30);
        assert_eq!(plan.background, BackgroundConfig { kind: BackgroundKind::Stars, intensity: 20 });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = Config::from_yaml("effect: rain\nsparkles: true\n").unwrap_err();
        assert!(matches!(error, ConfigError::Yaml(_)));
    }

    #[test]
    fn empty_file_is_fine() {
        assert_eq!(Config::from_yaml("\n").unwrap(), Config::default());
    }

    #[test]
    fn missing_file() {
        let error = Config::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(error, ConfigError::Io { .. }));
    }

    #[rstest]
    #[case(Config { frame_rate: Some(0), ..config("wipe") })]
    #[case(Config { tab_width: Some(0), ..config("wipe") })]
    #[case(Config { max_frames: Some(0), ..config("wipe") })]
    #[case(Config { canvas_width: Some(-1), ..config("wipe") })]
    #[case(Config { background_intensity: Some(101), ..config("wipe") })]
    #[case(Config { anchor_text: Some("middle".into()), ..config("wipe") })]
    #[case(Config { background: Some("snow".into()), ..config("wipe") })]
    #[case(Config { gradient: Some("lava".into()), ..config("wipe") })]
    #[case(Config { gradient_direction: Some("spiral".into()), ..config("wipe") })]
    #[case(Config { easing: Some("wobbly".into()), ..config("wipe") })]
    fn invalid_values(#[case] config: Config) {
        assert!(matches!(config.into_plan(0).unwrap_err(), ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn effect_errors() {
        assert!(matches!(Config::default().into_plan(0).unwrap_err(), ConfigError::MissingEffect));
        assert!(matches!(config("sparkle").into_plan(0).unwrap_err(), ConfigError::UnknownEffect(_)));
        let bad_colors = Config { gradient_colors: Some("#12".into()), ..config("wipe") };
        assert!(matches!(bad_colors.into_plan(0).unwrap_err(), ConfigError::Gradient(_)));
    }

    #[test]
    fn gradient_precedence() {
        let all = Config {
            gradient_colors: Some("red,blue".into()),
            gradient: Some("fire".into()),
            auto_gradient: Some(true),
            ..config("matrix")
        };
        let gradient = all.clone().into_plan(0).unwrap().gradient.unwrap();
        assert_eq!(gradient.stops, vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]);

        let preset = Config { gradient_colors: None, ..all.clone() }.into_plan(0).unwrap().gradient;
        assert_eq!(preset, Some(GradientPreset::Fire.gradient()));

        let auto = Config { gradient_colors: None, gradient: None, ..all.clone() }.into_plan(9).unwrap().gradient;
        assert_eq!(auto, Some(generate_auto_gradient(9)));

        let disabled = Config { no_gradient: Some(true), ..all }.into_plan(0).unwrap().gradient;
        assert_eq!(disabled, None);
    }

    #[test]
    fn direction_and_angle_overrides() {
        let vertical = Config { gradient_direction: Some("vertical".into()), ..config("fireworks") };
        let gradient = vertical.into_plan(0).unwrap().gradient.unwrap();
        assert_eq!(gradient.direction, GradientDirection::Vertical);

        let angled = Config { gradient_angle: Some(45.0), ..config("fireworks") };
        let gradient = angled.into_plan(0).unwrap().gradient.unwrap();
        assert_eq!(gradient.direction, GradientDirection::Angle);
        assert_eq!(gradient.angle, 45.0);
    }

    #[test]
    fn output_toggles() {
        let plan = Config {
            no_color: Some(true),
            xterm_colors: Some(true),
            no_final_newline: Some(true),
            anchor_canvas: Some("northwest".into()),
            ..config("beams")
        }
        .into_plan(0)
        .unwrap();
        assert!(plan.color.no_color);
        assert!(plan.color.reduced_palette);
        assert!(!plan.final_newline);
        assert_eq!(plan.anchor_canvas, Anchor::Nw);
    }
}
