//! Storage allocation backed by Rust's global allocator.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::error::{Error, Result};

use super::raw::RawStorage;

/// Allocates zero-filled storage of exactly `capacity` bytes.
///
/// # Errors
///
/// Returns [`Error::AllocationFailed`] when `capacity` exceeds the maximum
/// layout size or the global allocator reports exhaustion.
///
/// # Returns
///
/// The new storage. For zero capacity an empty storage is returned without
/// calling the allocator.
pub(crate) fn allocate(capacity: usize) -> Result<RawStorage> {
    if capacity == 0 {
        return Ok(RawStorage::empty());
    }

    let layout =
        Layout::array::<u8>(capacity).map_err(|_| Error::AllocationFailed { capacity })?;

    // Zeroed so that every byte of the storage is initialized from the start
    let ptr = unsafe { alloc::alloc_zeroed(layout) };
    let ptr = NonNull::new(ptr).ok_or(Error::AllocationFailed { capacity })?;

    // SAFETY: we just allocated `ptr` for this layout and zero-filled it
    Ok(unsafe { RawStorage::from_raw_parts(ptr, capacity) })
}

/// Diverges after a failed allocation in an infallible context.
///
/// Used by trait implementations such as `Clone` that cannot return a
/// [`Result`]. Follows the standard collections: the global allocation error
/// handler runs when a layout exists, and an oversized request panics.
pub(crate) fn handle_failure(err: &Error) -> ! {
    let capacity = match err {
        Error::AllocationFailed { capacity } => *capacity,
        other => panic!("{other}"),
    };

    match Layout::array::<u8>(capacity) {
        Ok(layout) => alloc::handle_alloc_error(layout),
        Err(_) => panic!("capacity overflow: {capacity} bytes"),
    }
}
