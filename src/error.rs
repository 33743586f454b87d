//! Error types for the transform engine.

use thiserror::Error;

/// Errors reported by plan construction, execution, and the [`Engine`](crate::Engine).
///
/// Every variant is a caller contract violation detected before any computation starts, so
/// no output buffer is ever partially written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested transform length is less than 1.
    #[error("invalid transform length {0}: length must be at least 1")]
    InvalidLength(usize),

    /// A transform was requested before any plan was built.
    #[error("engine is not initialized")]
    NotInitialized,

    /// A buffer length does not match the planned length.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// The length required by the plan, by the paired buffer, or for odd interleaved
        /// buffers the next even length.
        expected: usize,
        /// The length that was provided.
        actual: usize,
    },

    /// No plan was supplied to the executor.
    #[error("invalid plan: no plan was built")]
    InvalidPlan,
}

impl Error {
    /// The stable numeric code for this error, as used across the C boundary.
    ///
    /// `0` is reserved for success.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidLength(_) => 1,
            Self::NotInitialized => 2,
            Self::LengthMismatch { .. } => 3,
            Self::InvalidPlan => 4,
        }
    }
}

/// Result type with [`Error`] as the default error.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Fails with [`Error::LengthMismatch`] unless `actual == expected`.
#[inline]
pub(crate) fn check_length(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch { expected, actual })
    }
}
