use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

/// A compass point used to place the canvas in the terminal and the text in the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Anchor {
    #[strum(to_string = "sw", serialize = "southwest")]
    #[serde(alias = "southwest")]
    Sw,

    #[strum(to_string = "s", serialize = "south")]
    #[serde(alias = "south")]
    S,

    #[strum(to_string = "se", serialize = "southeast")]
    #[serde(alias = "southeast")]
    Se,

    #[strum(to_string = "e", serialize = "east")]
    #[serde(alias = "east")]
    E,

    #[strum(to_string = "ne", serialize = "northeast")]
    #[serde(alias = "northeast")]
    Ne,

    #[strum(to_string = "n", serialize = "north")]
    #[serde(alias = "north")]
    N,

    #[strum(to_string = "nw", serialize = "northwest")]
    #[serde(alias = "northwest")]
    Nw,

    #[strum(to_string = "w", serialize = "west")]
    #[serde(alias = "west")]
    W,

    #[default]
    #[strum(to_string = "c", serialize = "center")]
    #[serde(alias = "center")]
    C,
}

impl Anchor {
    /// The offset of an `inner` sized box anchored inside an `outer` sized one.
    ///
    /// Offsets go negative when the inner box is larger.
    pub fn offset(self, outer: Size, inner: Size) -> (i32, i32) {
        let free_x = outer.width - inner.width;
        let free_y = outer.height - inner.height;
        let x = match self {
            Self::Sw | Self::Nw | Self::W => 0,
            Self::S | Self::N | Self::C => free_x / 2,
            Self::Se | Self::E | Self::Ne => free_x,
        };
        let y = match self {
            Self::Nw | Self::N | Self::Ne => 0,
            Self::E | Self::W | Self::C => free_y / 2,
            Self::Sw | Self::S | Self::Se => free_y,
        };
        (x, y)
    }
}

/// A width and height, in cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Where things are drawn: the terminal, the canvas inside it and the text inside the canvas.
///
/// Computed once after the text is loaded and read only afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Geometry {
    pub terminal: Size,
    pub canvas: Size,
    pub text: Size,
    pub canvas_offset_x: i32,
    pub canvas_offset_y: i32,
    pub text_offset_x: i32,
    pub text_offset_y: i32,
}

impl Geometry {
    /// Lay out `text` inside `canvas` inside `terminal`.
    pub fn new(terminal: Size, canvas: Size, text: Size, canvas_anchor: Anchor, text_anchor: Anchor) -> Self {
        let (canvas_offset_x, canvas_offset_y) = canvas_anchor.offset(terminal, canvas);
        let (text_offset_x, text_offset_y) = text_anchor.offset(canvas, text);
        Self { terminal, canvas, text, canvas_offset_x, canvas_offset_y, text_offset_x, text_offset_y }
    }

    /// Translate a text coordinate into a terminal coordinate.
    pub fn to_terminal(&self, row: i32, col: i32) -> (i32, i32) {
        (row + self.text_offset_y + self.canvas_offset_y, col + self.text_offset_x + self.canvas_offset_x)
    }

    /// Translate a canvas coordinate into a terminal coordinate.
    pub fn canvas_to_terminal(&self, row: i32, col: i32) -> (i32, i32) {
        (row + self.canvas_offset_y, col + self.canvas_offset_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Anchor::Nw, (0, 0))]
    #[case(Anchor::N, (35, 0))]
    #[case(Anchor::Ne, (70, 0))]
    #[case(Anchor::E, (70, 10))]
    #[case(Anchor::Se, (70, 20))]
    #[case(Anchor::S, (35, 20))]
    #[case(Anchor::Sw, (0, 20))]
    #[case(Anchor::W, (0, 10))]
    #[case(Anchor::C, (35, 10))]
    fn anchor_offsets(#[case] anchor: Anchor, #[case] expected: (i32, i32)) {
        assert_eq!(anchor.offset(Size::new(80, 24), Size::new(10, 4)), expected);
    }

    #[test]
    fn oversized_inner_goes_negative() {
        assert_eq!(Anchor::C.offset(Size::new(10, 10), Size::new(20, 14)), (-5, -2));
    }

    #[rstest]
    #[case("c", Anchor::C)]
    #[case("center", Anchor::C)]
    #[case("SouthWest", Anchor::Sw)]
    #[case("ne", Anchor::Ne)]
    fn anchors_parse(#[case] input: &str, #[case] expected: Anchor) {
        assert_eq!(input.parse::<Anchor>().unwrap(), expected);
    }

    #[test]
    fn translation_applies_both_offsets() {
        let geometry = Geometry::new(Size::new(80, 24), Size::new(40, 12), Size::new(10, 2), Anchor::C, Anchor::Nw);
        assert_eq!(geometry.canvas_offset_x, 20);
        assert_eq!(geometry.canvas_offset_y, 6);
        assert_eq!(geometry.to_terminal(1, 3), (7, 23));
    }
}
