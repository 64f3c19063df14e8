//! Easing curves for eased motion.
//!
//! Every curve maps `t` in `[0, 1]` to a progress value that starts at 0 and ends at 1. Inputs outside that range
//! are clamped first. Back and elastic curves overshoot in between.

use std::f32::consts::PI;
use strum::{Display, EnumIter, EnumString};

/// An easing curve, named like `out-cubic` or `in-out-bounce`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
}

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f32 = (2.0 * PI) / 4.5;

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => in_pow(t, 2),
            Self::OutQuad => out_pow(t, 2),
            Self::InOutQuad => in_out_pow(t, 2),
            Self::InCubic => in_pow(t, 3),
            Self::OutCubic => out_pow(t, 3),
            Self::InOutCubic => in_out_pow(t, 3),
            Self::InQuart => in_pow(t, 4),
            Self::OutQuart => out_pow(t, 4),
            Self::InOutQuart => in_out_pow(t, 4),
            Self::InQuint => in_pow(t, 5),
            Self::OutQuint => out_pow(t, 5),
            Self::InOutQuint => in_out_pow(t, 5),
            Self::InSine => 1.0 - (t * PI / 2.0).cos(),
            Self::OutSine => (t * PI / 2.0).sin(),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::InExpo => {
                if t == 0.0 { 0.0 } else { 2f32.powf(10.0 * t - 10.0) }
            }
            Self::OutExpo => {
                if t == 1.0 { 1.0 } else { 1.0 - 2f32.powf(-10.0 * t) }
            }
            Self::InOutExpo if t == 0.0 || t == 1.0 => t,
            Self::InOutExpo => {
                if t < 0.5 {
                    2f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Self::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Self::InOutCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            Self::InBack => BACK_C3 * t * t * t - BACK_C1 * t * t,
            Self::OutBack => 1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2),
            Self::InOutBack => {
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2) + 2.0) / 2.0
                }
            }
            Self::InElastic | Self::OutElastic | Self::InOutElastic if t == 0.0 || t == 1.0 => t,
            Self::InElastic => -(2f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin(),
            Self::OutElastic => 2f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0,
            Self::InOutElastic => {
                if t < 0.5 {
                    -(2f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0
                } else {
                    (2f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0 + 1.0
                }
            }
            Self::InBounce => 1.0 - out_bounce(1.0 - t),
            Self::OutBounce => out_bounce(t),
            Self::InOutBounce => {
                if t < 0.5 {
                    (1.0 - out_bounce(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + out_bounce(2.0 * t - 1.0)) / 2.0
                }
            }
        }
    }
}

fn in_pow(t: f32, power: i32) -> f32 {
    t.powi(power)
}

fn out_pow(t: f32, power: i32) -> f32 {
    1.0 - (1.0 - t).powi(power)
}

fn in_out_pow(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        2f32.powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
    }
}

fn out_bounce(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn curves_are_anchored() {
        for easing in Easing::iter() {
            assert!(easing.apply(0.0).abs() < 1e-4, "{easing} at 0 = {}", easing.apply(0.0));
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-4, "{easing} at 1 = {}", easing.apply(1.0));
        }
    }

    #[test]
    fn inputs_are_clamped() {
        for easing in Easing::iter() {
            assert_eq!(easing.apply(-5.0), easing.apply(0.0));
            assert_eq!(easing.apply(9.0), easing.apply(1.0));
            assert_eq!(easing.apply(f32::NAN), easing.apply(0.0));
        }
    }

    #[test]
    fn names_are_kebab_case() {
        assert_eq!("in-out-bounce".parse::<Easing>().unwrap(), Easing::InOutBounce);
        assert_eq!("Out-Cubic".parse::<Easing>().unwrap(), Easing::OutCubic);
        assert_eq!(Easing::InOutSine.to_string(), "in-out-sine");
    }

    #[test]
    fn out_cubic_matches_closed_form() {
        for step in 0..=10 {
            let t = step as f32 / 10.0;
            let expected = 1.0 - (1.0 - t).powf(3.0);
            assert!((Easing::OutCubic.apply(t) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn names_parse() {
        assert_eq!("out-cubic".parse::<Easing>().unwrap(), Easing::OutCubic);
        assert_eq!(Easing::InOutBounce.to_string(), "in-out-bounce");
    }
}
