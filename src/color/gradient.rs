use super::{Rgb, interpolate_rgb};
use serde::Deserialize;
use std::f32::consts::SQRT_2;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The color returned when sampling a gradient with no stops.
pub const DEFAULT_COLOR: Rgb = Rgb::WHITE;

/// The maximum number of stops a gradient carries.
pub const MAX_STOPS: usize = 8;

/// How a canvas coordinate is mapped onto a position along a gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GradientDirection {
    /// Left to right.
    #[default]
    Horizontal,

    /// Top to bottom.
    Vertical,

    /// Top left to bottom right.
    Diagonal,

    /// Center outwards.
    Radial,

    /// Along an arbitrary angle, in degrees.
    Angle,
}

/// A multi stop color ramp.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub stops: Vec<Rgb>,
    pub direction: GradientDirection,

    /// Only used when `direction` is [GradientDirection::Angle].
    pub angle: f32,
}

impl Gradient {
    pub fn new(stops: Vec<Rgb>, direction: GradientDirection) -> Self {
        Self { stops, direction, angle: 0.0 }
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Sample the gradient at a cell within a `width` x `height` area.
    pub fn color_at(&self, row: i32, col: i32, width: i32, height: i32) -> Rgb {
        let position = gradient_position(row, col, width, height, self.direction, self.angle);
        interpolate_gradient(&self.stops, position)
    }

    /// Same as [Gradient::color_at] but quantized to the 256 color palette.
    pub fn palette_index_at(&self, row: i32, col: i32, width: i32, height: i32) -> u8 {
        self.color_at(row, col, width, height).palette_index()
    }
}

/// Sample a multi stop gradient at `position`.
///
/// The stops are spread over `stops.len() - 1` equal segments. No stops yields [DEFAULT_COLOR], a single stop
/// yields that stop everywhere and non finite or out of range positions clamp to the ends.
pub fn interpolate_gradient(stops: &[Rgb], position: f32) -> Rgb {
    match stops {
        [] => return DEFAULT_COLOR,
        [only] => return *only,
        _ => (),
    };
    let last = stops.len() - 1;
    if !position.is_finite() || position <= 0.0 {
        return stops[0];
    }
    if position >= 1.0 {
        return stops[last];
    }

    let segment_size = 1.0 / last as f32;
    let segment = (position / segment_size) as usize;
    if segment >= last {
        return stops[last];
    }
    let local = (position - segment as f32 * segment_size) / segment_size;
    interpolate_rgb(stops[segment], stops[segment + 1], local)
}

/// Fraction of `value` along an axis of `extent` cells. Degenerate axes map to 0.
fn axis_fraction(value: i32, extent: i32) -> f32 {
    if extent <= 1 { 0.0 } else { value as f32 / (extent - 1) as f32 }
}

/// Map a cell into a position in `[0, 1]` along a gradient.
///
/// Single row or single column areas never divide by zero. The degenerate axis contributes 0 to the linear and
/// radial modes, so a single line of text still varies along its length, while angle mode is 0 throughout. A 1x1
/// area is 0 in every mode.
pub fn gradient_position(
    row: i32,
    col: i32,
    width: i32,
    height: i32,
    direction: GradientDirection,
    angle: f32,
) -> f32 {
    let x = axis_fraction(col, width);
    let y = axis_fraction(row, height);
    let position = match direction {
        GradientDirection::Horizontal => x,
        GradientDirection::Vertical => y,
        GradientDirection::Diagonal => (x + y) / 2.0,
        GradientDirection::Radial => {
            let center_x = (width - 1).max(0) as f32 / 2.0;
            let center_y = (height - 1).max(0) as f32 / 2.0;
            let max_distance = center_x.hypot(center_y);
            if max_distance == 0.0 {
                0.0
            } else {
                (col as f32 - center_x).hypot(row as f32 - center_y) / max_distance
            }
        }
        GradientDirection::Angle if width <= 1 || height <= 1 => 0.0,
        GradientDirection::Angle => {
            let radians = if angle.is_finite() { angle.to_radians() } else { 0.0 };
            // normalized coordinates live in [-1, 1], so the projection lives in [-sqrt(2), sqrt(2)]
            let projected = (2.0 * x - 1.0) * radians.cos() + (2.0 * y - 1.0) * radians.sin();
            (projected + SQRT_2) / (2.0 * SQRT_2)
        }
    };
    if position.is_finite() { position.clamp(0.0, 1.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn no_stops_is_white() {
        for position in [-1.0, 0.0, 0.3, 1.0, f32::NAN] {
            assert_eq!(interpolate_gradient(&[], position), Rgb::WHITE);
        }
    }

    #[test]
    fn single_stop_everywhere() {
        for position in [0.0, 0.25, 0.5, 0.999, 1.0] {
            assert_eq!(interpolate_gradient(&[GREEN], position), GREEN);
        }
    }

    #[rstest]
    #[case(0.0, RED)]
    #[case(0.5, GREEN)]
    #[case(1.0, BLUE)]
    #[case(-2.0, RED)]
    #[case(8.0, BLUE)]
    #[case(f32::NAN, RED)]
    #[case(f32::INFINITY, RED)]
    fn multi_stop_sampling(#[case] position: f32, #[case] expected: Rgb) {
        assert_eq!(interpolate_gradient(&[RED, GREEN, BLUE], position), expected);
    }

    #[test]
    fn segment_blending() {
        let color = interpolate_gradient(&[RED, GREEN, BLUE], 0.25);
        assert_eq!(color, Rgb::new(127, 127, 0));
    }

    #[rstest]
    #[case(GradientDirection::Horizontal, 0, 0, 0.0)]
    #[case(GradientDirection::Horizontal, 0, 9, 1.0)]
    #[case(GradientDirection::Vertical, 0, 0, 0.0)]
    #[case(GradientDirection::Vertical, 9, 0, 1.0)]
    #[case(GradientDirection::Diagonal, 9, 9, 1.0)]
    #[case(GradientDirection::Diagonal, 0, 9, 0.5)]
    #[case(GradientDirection::Radial, 0, 0, 1.0)]
    fn positions_on_square(
        #[case] direction: GradientDirection,
        #[case] row: i32,
        #[case] col: i32,
        #[case] expected: f32,
    ) {
        let position = gradient_position(row, col, 10, 10, direction, 0.0);
        assert!((position - expected).abs() < 1e-6, "{direction}: {position} != {expected}");
    }

    #[test]
    fn angle_zero_matches_horizontal_ordering() {
        let left = gradient_position(0, 0, 10, 10, GradientDirection::Angle, 0.0);
        let right = gradient_position(0, 9, 10, 10, GradientDirection::Angle, 0.0);
        assert!(left < right);
        let flipped_left = gradient_position(0, 0, 10, 10, GradientDirection::Angle, 180.0);
        let flipped_right = gradient_position(0, 9, 10, 10, GradientDirection::Angle, 180.0);
        assert!(flipped_left > flipped_right);
    }

    #[rstest]
    fn degenerate_areas_are_zero(
        #[values(
            GradientDirection::Horizontal,
            GradientDirection::Vertical,
            GradientDirection::Diagonal,
            GradientDirection::Radial,
            GradientDirection::Angle
        )]
        direction: GradientDirection,
    ) {
        assert_eq!(gradient_position(0, 0, 1, 1, direction, 45.0), 0.0);
        assert!(gradient_position(0, 0, 1, 5, direction, 45.0).is_finite());
        assert!(gradient_position(0, 3, 5, 1, direction, 45.0).is_finite());
    }

    #[rstest]
    #[case(1, 5)]
    #[case(5, 1)]
    #[case(1, 1)]
    fn angle_on_a_single_line_is_zero(#[case] width: i32, #[case] height: i32) {
        for angle in [0.0, 45.0, 90.0, 135.0, 270.0] {
            for (row, col) in [(0, 0), (height - 1, width - 1), (height / 2, width / 2)] {
                assert_eq!(gradient_position(row, col, width, height, GradientDirection::Angle, angle), 0.0);
            }
        }
    }

    #[test]
    fn radial_on_a_single_line_follows_the_line() {
        let center = gradient_position(0, 5, 11, 1, GradientDirection::Radial, 0.0);
        let edge = gradient_position(0, 10, 11, 1, GradientDirection::Radial, 0.0);
        assert_eq!(center, 0.0);
        assert_eq!(edge, 1.0);
    }

    #[test]
    fn single_line_still_varies_horizontally() {
        let start = gradient_position(0, 0, 11, 1, GradientDirection::Horizontal, 0.0);
        let end = gradient_position(0, 10, 11, 1, GradientDirection::Horizontal, 0.0);
        assert_eq!(start, 0.0);
        assert_eq!(end, 1.0);
    }

    proptest! {
        #[test]
        fn positions_are_total(
            row in -50i32..200,
            col in -50i32..200,
            width in 1i32..200,
            height in 1i32..200,
            angle in -720.0f32..720.0,
        ) {
            for direction in GradientDirection::iter() {
                let position = gradient_position(row, col, width, height, direction, angle);
                prop_assert!(position.is_finite());
                prop_assert!((0.0..=1.0).contains(&position));
            }
        }

        #[test]
        fn sampled_palette_index_is_in_cube(position in proptest::num::f32::ANY) {
            let index = interpolate_gradient(&[RED, GREEN, BLUE], position).palette_index();
            prop_assert!((16..=231).contains(&index));
        }
    }
}
