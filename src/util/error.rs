//! Error types for circstat.

use thiserror::Error;

/// Result alias for circstat operations.
pub type CircStatResult<T> = std::result::Result<T, CircStatError>;

/// Errors that can occur when running circstat operations.
///
/// Numerical degeneracies (out-of-domain inverse trig, all-NaN lanes,
/// zero-weight bins) are reported as NaN or sentinel values in the
/// output, never as errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CircStatError {
    /// The two array shapes cannot be broadcast to a common shape.
    #[error("cannot broadcast shape {lhs:?} against shape {rhs:?}")]
    BroadcastMismatch {
        /// Shape of the first operand.
        lhs: Vec<usize>,
        /// Shape of the second operand.
        rhs: Vec<usize>,
    },
    /// The requested axis does not exist for the (broadcast) input.
    #[error("axis {axis} is out of bounds for an array of dimension {ndim}")]
    AxisOutOfBounds {
        /// Requested axis, negative values counting from the end.
        axis: isize,
        /// Number of dimensions of the broadcast input.
        ndim: usize,
    },
    /// The bin-edge sequence is malformed.
    #[error("invalid bin edges: {reason}")]
    InvalidBinEdges {
        /// What the validation rejected.
        reason: &'static str,
    },
}
