//! Bounding records: the envelope accumulator and rectangle bounds.

use std::fmt;

use glam::{DVec2, dvec2};

use crate::errors::BoundsError;

/// Why a rectangle coordinate or size was refused
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    NaN,
    /// Positive or negative infinity
    Infinite,
}

impl NumericError {
    /// Pass `val` through if it can take part in an envelope.
    #[inline]
    pub fn check(val: f64) -> Result<f64, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(val)
        }
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "not a number"),
            NumericError::Infinite => write!(f, "not finite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Axis-aligned bounding box, stored as min/max per axis.
///
/// Only [`EnvelopeBuilder::build`] and [`Rect::bounds`] produce envelopes
/// from data, so `min <= max` holds on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Envelope {
    /// Create an envelope from its four edges.
    ///
    /// Edges given in the wrong order are swapped.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Envelope {
            min_x: min_x.min(max_x),
            max_x: min_x.max(max_x),
            min_y: min_y.min(max_y),
            max_y: min_y.max(max_y),
        }
    }

    pub fn min(&self) -> DVec2 {
        dvec2(self.min_x, self.min_y)
    }

    pub fn max(&self) -> DVec2 {
        dvec2(self.max_x, self.max_y)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn size(&self) -> DVec2 {
        self.max() - self.min()
    }

    /// Midpoint of the envelope on each axis
    pub fn center(&self) -> DVec2 {
        (self.min() + self.max()) * 0.5
    }

    /// Smallest envelope covering both `self` and `other`
    pub fn union(&self, other: &Envelope) -> Envelope {
        Envelope {
            min_x: self.min_x.min(other.min_x),
            max_x: self.max_x.max(other.max_x),
            min_y: self.min_y.min(other.min_y),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Check if a point lies inside or on the edge of the envelope
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: [{}, {}], y: [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// Accumulates visited points into an [`Envelope`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvelopeBuilder {
    min: DVec2,
    max: DVec2,
}

impl Default for EnvelopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvelopeBuilder {
    /// Create an empty builder (will expand on first point)
    pub fn new() -> Self {
        EnvelopeBuilder {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if no point has been added yet
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include another envelope
    pub fn expand_envelope(&mut self, envelope: &Envelope) {
        self.expand_point(envelope.min());
        self.expand_point(envelope.max());
    }

    /// Finish accumulation. `None` if nothing was ever added.
    pub fn build(&self) -> Option<Envelope> {
        if self.is_empty() {
            return None;
        }
        Some(Envelope {
            min_x: self.min.x,
            max_x: self.max.x,
            min_y: self.min.y,
            max_y: self.max.y,
        })
    }
}

/// Rectangle given by its top-left corner and size, as in an SVG `<rect>`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle with validation (rejects NaN/infinite fields)
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Rect, BoundsError> {
        let field = |field: &'static str, val: f64| {
            NumericError::check(val).map_err(|source| BoundsError::InvalidRect { field, source })
        };
        Ok(Rect {
            x: field("x", x)?,
            y: field("y", y)?,
            width: field("width", width)?,
            height: field("height", height)?,
        })
    }

    /// True when the rectangle has positive area.
    ///
    /// Callers use this to skip degenerate rectangles before combining
    /// bounds.
    pub fn is_renderable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn bounds(&self) -> Envelope {
        Envelope::new(self.x, self.x + self.width, self.y, self.y + self.height)
    }

    pub fn center(&self) -> DVec2 {
        dvec2(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Envelope of the rectangle `(x, y, width, height)`
pub fn rect_bounds(x: f64, y: f64, width: f64, height: f64) -> Envelope {
    Rect { x, y, width, height }.bounds()
}
