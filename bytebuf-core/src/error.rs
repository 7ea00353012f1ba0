//! Error types and result handling for byte buffer operations.

use thiserror::Error;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes reported by [`ByteBuffer`](crate::ByteBuffer) operations.
///
/// Allocation failure is the only runtime condition. The remaining variants
/// are raised by the checked access tier when a caller passes an index,
/// position or range outside the live bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested storage could not be allocated.
    #[error("unable to allocate buffer storage of {capacity} bytes")]
    AllocationFailed {
        /// Size in bytes of the storage that failed to allocate
        capacity: usize,
    },

    /// Element index does not refer to a live byte.
    #[error("index {index} is out of bounds for buffer of length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of live bytes at the time of the call
        len: usize,
    },

    /// Insertion or erase position lies outside the live range.
    #[error("position {position} is out of bounds for buffer of length {len}")]
    PositionOutOfBounds {
        /// Requested position
        position: usize,
        /// Number of live bytes at the time of the call
        len: usize,
    },

    /// Erase range is reversed or extends past the live range.
    #[error("range {start}..{end} is invalid for buffer of length {len}")]
    InvalidRange {
        /// First byte of the range
        start: usize,
        /// One past the last byte of the range
        end: usize,
        /// Number of live bytes at the time of the call
        len: usize,
    },
}
