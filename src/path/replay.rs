//! Replay commands against a cursor, collecting visited points.
//!
//! # Key Concepts
//!
//! - **Cursor**: the current position. Relative commands offset from it.
//!   Only endpoints move it; control points never do.
//!
//! - **Group**: one complete parameter set of a verb (`arity` values from
//!   the verb table). A command may repeat its group any number of times.
//!
//! - **Curve anchor**: every pair of a relative curve group offsets from the
//!   cursor as it stood before the group, not from the previous pair.
//!   The cursor then moves to the group's last complete pair.
//!
//! - **Overflow**: a point whose coordinates overflow to infinity is left
//!   out of the envelope and does not move the cursor.
//!
//! - **Approximation**: curve control points go into the envelope even
//!   though the rendered curve may not reach them.

use glam::{DVec2, dvec2};

use super::tokenize::Command;
use super::verb::{Axis, Geometry, Mode};
use crate::log::{debug, warn};
use crate::types::{Envelope, EnvelopeBuilder};

/// The current drawing position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    position: DVec2,
}

impl Cursor {
    /// Cursor at (0,0), where every path starts
    pub fn origin() -> Self {
        Self::default()
    }

    pub fn at(position: DVec2) -> Self {
        Cursor { position }
    }

    pub fn position(self) -> DVec2 {
        self.position
    }

    /// Absolute position of `p` read in `mode` against this cursor
    fn resolve(self, mode: Mode, p: DVec2) -> DVec2 {
        match mode {
            Mode::Absolute => p,
            Mode::Relative => self.position + p,
        }
    }

    /// Set (absolute) or offset (relative) one axis
    fn along(self, mode: Mode, axis: Axis, value: f64) -> DVec2 {
        let mut p = self.position;
        let coord = match axis {
            Axis::X => &mut p.x,
            Axis::Y => &mut p.y,
        };
        match mode {
            Mode::Absolute => *coord = value,
            Mode::Relative => *coord += value,
        }
        p
    }
}

/// Replay a command sequence from the origin.
///
/// Returns `None` when no coordinate was visited.
pub fn replay(commands: &[Command]) -> Option<Envelope> {
    let mut envelope = EnvelopeBuilder::new();
    let mut cursor = Cursor::origin();
    for command in commands {
        cursor = step(cursor, command, &mut envelope);
    }
    envelope.build()
}

/// Apply one command: expand `envelope` with every point it visits and
/// return the cursor after it.
pub fn step(cursor: Cursor, command: &Command, envelope: &mut EnvelopeBuilder) -> Cursor {
    let spec = command.verb.spec();
    let mode = command.mode;
    let params = command.params.as_slice();
    debug!(command = %command, ?cursor, "step");

    match spec.geometry {
        Geometry::Move => {
            let Some(pair) = params.chunks_exact(2).next() else {
                return cursor;
            };
            if params.len() > 2 {
                debug!(extra = params.len() - 2, "ignoring values after move pair");
            }
            let p = cursor.resolve(mode, pair_at(pair));
            visit(envelope, p).map_or(cursor, Cursor::at)
        }
        Geometry::Points => {
            let pairs = params.chunks_exact(2);
            if !pairs.remainder().is_empty() {
                debug!(verb = %command.verb, "ignoring dangling coordinate");
            }
            pairs.fold(cursor, |cursor, pair| {
                let p = cursor.resolve(mode, pair_at(pair));
                visit(envelope, p).map_or(cursor, Cursor::at)
            })
        }
        Geometry::Axis(axis) => params.iter().fold(cursor, |cursor, &value| {
            let p = cursor.along(mode, axis, value);
            visit(envelope, p).map_or(cursor, Cursor::at)
        }),
        Geometry::Curve => params.chunks(spec.arity).fold(cursor, |anchor, group| {
            if group.len() < spec.arity {
                debug!(verb = %command.verb, len = group.len(), "partial curve group");
            }
            // The last complete pair is the endpoint, even in a short group
            let endpoint = group
                .chunks_exact(2)
                .map(|pair| anchor.resolve(mode, pair_at(pair)))
                .fold(None, |_, p| Some(visit(envelope, p)));
            match endpoint {
                Some(Some(p)) => Cursor::at(p),
                _ => anchor,
            }
        }),
        Geometry::Arc => {
            let groups = params.chunks_exact(spec.arity);
            if !groups.remainder().is_empty() {
                debug!(len = groups.remainder().len(), "ignoring partial arc group");
            }
            groups.fold(cursor, |cursor, group| {
                let p = cursor.resolve(mode, pair_at(&group[spec.arity - 2..]));
                visit(envelope, p).map_or(cursor, Cursor::at)
            })
        }
        Geometry::Close => cursor,
    }
}

/// Add `p` to the envelope. Points that overflowed to infinity are skipped
/// and yield `None`.
fn visit(envelope: &mut EnvelopeBuilder, p: DVec2) -> Option<DVec2> {
    if !p.is_finite() {
        warn!(x = p.x, y = p.y, "skipping non-finite point");
        return None;
    }
    envelope.expand_point(p);
    Some(p)
}

fn pair_at(pair: &[f64]) -> DVec2 {
    dvec2(pair[0], pair[1])
}
