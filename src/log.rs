//! Conditional logging macros.
//!
//! With the `tracing` feature, `debug!` and `warn!` are `tracing`'s own
//! macros. Without it they expand to nothing, so the tokenizer and replay
//! loops carry no logging cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
