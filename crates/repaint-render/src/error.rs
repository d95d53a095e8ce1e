//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur when compiling the substitution pattern.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The alternation built from the field names did not compile.
    ///
    /// Field names are escaped before being joined into the pattern, so in
    /// practice this only fires for pathological inputs (e.g. a field name
    /// long enough to blow the compiled-regex size limit).
    #[error("invalid substitution pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
