//! Resolution-time errors.

use thiserror::Error;

/// Error returned when a selection cannot be resolved against a spec.
///
/// A failed resolution produces no tokens at all; callers are expected to
/// surface the axis and value rather than render a guessed fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The selection names an option that its axis does not declare.
    #[error("invalid option '{value}' for axis '{axis}' (expected one of: {})", .expected.join(", "))]
    InvalidVariantOption {
        axis: String,
        value: String,
        expected: Vec<String>,
    },
}

impl ResolveError {
    /// The axis the offending value was supplied for.
    pub fn axis(&self) -> &str {
        match self {
            ResolveError::InvalidVariantOption { axis, .. } => axis,
        }
    }

    /// The offending value.
    pub fn value(&self) -> &str {
        match self {
            ResolveError::InvalidVariantOption { value, .. } => value,
        }
    }
}
