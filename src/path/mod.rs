//! Path data: tokenizing the command string and replaying it for bounds.

mod replay;
mod tokenize;
mod verb;

pub use replay::{Cursor, replay, step};
pub use tokenize::{Command, tokenize};
pub use verb::{Axis, Geometry, Mode, Verb, VerbSpec};
