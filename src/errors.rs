//! Error types with diagnostics using miette
//!
//! Malformed path data never produces an error; it is skipped during
//! tokenization. These errors cover what the caller hands us directly.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised for caller-supplied input that cannot be processed at all
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("path data is absent")]
    #[diagnostic(
        code(pathbox::invalid_input),
        help("pass an empty string for a path without geometry")
    )]
    InvalidInput,

    #[error("invalid rectangle {field}: {source}")]
    #[diagnostic(code(pathbox::invalid_rect))]
    InvalidRect {
        field: &'static str,
        #[source]
        source: NumericError,
    },
}
