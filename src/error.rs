//! Error types for the SFMT library.

use thiserror::Error;

/// Errors produced by the bulk generation API.
///
/// Scalar extraction never fails. Calling [`Sfmt::next_u64`](crate::Sfmt::next_u64)
/// at an odd cursor is a programming error and panics instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SfmtError {
    /// Bulk generation was requested after scalar output had been consumed.
    #[error("bulk generation requires a fresh state (cursor at {idx}, expected {expected})")]
    StateNotFresh {
        /// Current 32-bit cursor position.
        idx: usize,
        /// Cursor position of a fresh state (`N32`).
        expected: usize,
    },
    /// Output buffer is shorter than the state array.
    #[error("buffer of length {len} is smaller than the minimum of {min}")]
    BufferTooSmall {
        /// Length of the supplied buffer.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },
    /// Output buffer length is not a whole number of 128-bit words.
    #[error("buffer length {len} is not a multiple of {multiple}")]
    BufferMisaligned {
        /// Length of the supplied buffer.
        len: usize,
        /// Required granularity.
        multiple: usize,
    },
}

impl SfmtError {
    /// Returns `true` for errors caused by the supplied buffer rather than
    /// by the generator state.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SfmtError::BufferTooSmall { .. } | SfmtError::BufferMisaligned { .. }
        )
    }
}
