//! The command alphabet.
//!
//! Each verb maps to a [`VerbSpec`]: how many parameters make one group and
//! what kind of geometry a group describes. Replay interprets the spec
//! generically instead of branching per letter.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadTo,
    SmoothQuadTo,
    ArcTo,
    ClosePath,
}

/// Uppercase letters are absolute, lowercase are relative to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Absolute,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// What one parameter group contributes to the cursor and envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Only the first pair counts; it becomes the cursor. Further pairs are
    /// ignored.
    Move,
    /// One pair per group; each pair becomes the cursor.
    Points,
    /// One value per group, replacing or offsetting a single axis.
    Axis(Axis),
    /// Every pair in the group is visited; the last pair is the endpoint.
    /// Relative pairs all offset from the cursor at the start of the group.
    Curve,
    /// Only the last pair of the group is a coordinate (radii, rotation and
    /// flags are not).
    Arc,
    /// No parameters, no coordinates.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbSpec {
    /// Number of values in one complete group
    pub arity: usize,
    pub geometry: Geometry,
}

impl Verb {
    pub const ALL: [Verb; 10] = [
        Verb::MoveTo,
        Verb::LineTo,
        Verb::HorizontalLineTo,
        Verb::VerticalLineTo,
        Verb::CurveTo,
        Verb::SmoothCurveTo,
        Verb::QuadTo,
        Verb::SmoothQuadTo,
        Verb::ArcTo,
        Verb::ClosePath,
    ];

    pub const fn spec(self) -> VerbSpec {
        let (arity, geometry) = match self {
            Verb::MoveTo => (2, Geometry::Move),
            Verb::LineTo | Verb::SmoothQuadTo => (2, Geometry::Points),
            Verb::HorizontalLineTo => (1, Geometry::Axis(Axis::X)),
            Verb::VerticalLineTo => (1, Geometry::Axis(Axis::Y)),
            Verb::CurveTo => (6, Geometry::Curve),
            Verb::SmoothCurveTo | Verb::QuadTo => (4, Geometry::Curve),
            Verb::ArcTo => (7, Geometry::Arc),
            Verb::ClosePath => (0, Geometry::Close),
        };
        VerbSpec { arity, geometry }
    }

    /// Decode a command letter. `None` for letters outside the alphabet.
    pub fn from_letter(letter: char) -> Option<(Verb, Mode)> {
        let mode = if letter.is_ascii_uppercase() {
            Mode::Absolute
        } else {
            Mode::Relative
        };
        let verb = match letter.to_ascii_uppercase() {
            'M' => Verb::MoveTo,
            'L' => Verb::LineTo,
            'H' => Verb::HorizontalLineTo,
            'V' => Verb::VerticalLineTo,
            'C' => Verb::CurveTo,
            'S' => Verb::SmoothCurveTo,
            'Q' => Verb::QuadTo,
            'T' => Verb::SmoothQuadTo,
            'A' => Verb::ArcTo,
            'Z' => Verb::ClosePath,
            _ => return None,
        };
        Some((verb, mode))
    }

    pub fn letter(self, mode: Mode) -> char {
        let upper = match self {
            Verb::MoveTo => 'M',
            Verb::LineTo => 'L',
            Verb::HorizontalLineTo => 'H',
            Verb::VerticalLineTo => 'V',
            Verb::CurveTo => 'C',
            Verb::SmoothCurveTo => 'S',
            Verb::QuadTo => 'Q',
            Verb::SmoothQuadTo => 'T',
            Verb::ArcTo => 'A',
            Verb::ClosePath => 'Z',
        };
        match mode {
            Mode::Absolute => upper,
            Mode::Relative => upper.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter(Mode::Absolute))
    }
}
