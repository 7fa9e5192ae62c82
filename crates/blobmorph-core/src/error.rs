//! Error types for the morph engine.

use serde::{Deserialize, Serialize};

/// Errors raised by shape preparation and the keyframe engine.
///
/// Every variant is detected synchronously by the call that introduced the
/// bad value; there are no deferred or partial failures, and no recovery —
/// an operation returns a full valid shape or one of these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MorphError {
    /// A closed shape needs at least three points.
    #[error("shape has {got} points, needs at least 3")]
    TooFewPoints { got: usize },

    /// Normalization can only add points.
    #[error("cannot divide a shape of {from} points down to {to}")]
    CannotRemovePoints { from: usize, to: usize },

    /// Malformed shape contents (non-finite coordinate, negative handle).
    #[error("invalid shape: {reason}")]
    InvalidShape { reason: String },

    /// A keyframe spec failed validation; `index` is the 0-based position
    /// of the first offending spec.
    #[error("invalid keyframe at index {index}: {reason}")]
    InvalidKeyframe { index: usize, reason: String },

    /// Unrecognized timing-function name.
    #[error("unknown timing function: {name}")]
    TimingNotFound { name: String },

    /// Interpolating shapes of different lengths. The normalizer prevents
    /// this, so seeing it means an internal invariant broke.
    #[error("shape length mismatch: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },
}

impl MorphError {
    /// Coarse category for logging/metrics.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { .. } => "defect",
            _ => "validation",
        }
    }

    /// Whether the error reports bad caller input (true) or a broken
    /// internal invariant (false).
    #[inline]
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Self::ShapeMismatch { .. })
    }
}
