//! Approximate bounding boxes for SVG path data.
//!
//! A path string is tokenized into commands, replayed against a cursor, and
//! every coordinate visited along the way (curve control points included) is
//! folded into an [`Envelope`]. Control points make the result a superset of
//! the rendered curve's true bounds; that approximation is intentional.
//!
//! ```
//! let bounds = pathbox::extract_bounds("M10,10 l5,5 l-20,0").unwrap();
//! assert_eq!((bounds.min_x, bounds.max_x), (-5.0, 15.0));
//! assert_eq!((bounds.min_y, bounds.max_y), (10.0, 15.0));
//! ```

use pest_derive::Parser;

pub mod errors;
pub mod log;
pub mod path;
pub mod types;

pub use errors::BoundsError;
pub use path::{Command, Cursor, Mode, Verb, replay, tokenize};
pub use types::{Envelope, EnvelopeBuilder, NumericError, Rect, rect_bounds};

#[derive(Parser)]
#[grammar = "path_data.pest"]
pub struct PathDataParser;

/// Compute the bounding envelope of a path string.
///
/// Returns `None` when the string yields no coordinates at all. Malformed
/// input never fails: unreadable tokens are skipped and the rest of the path
/// is still processed.
pub fn extract_bounds(path_data: &str) -> Option<Envelope> {
    let commands = tokenize(path_data);
    replay(&commands)
}

/// Like [`extract_bounds`], for callers whose path string may be absent
/// (e.g. a `d` attribute that was never set).
pub fn try_extract_bounds(path_data: Option<&str>) -> Result<Option<Envelope>, BoundsError> {
    let path_data = path_data.ok_or(BoundsError::InvalidInput)?;
    Ok(extract_bounds(path_data))
}
