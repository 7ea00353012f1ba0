//! Raw byte storage with RAII release.

use std::alloc::{self, Layout};
use std::ptr::{self, NonNull};

/// Exclusively owned heap block backing a [`ByteBuffer`](super::ByteBuffer).
///
/// Every byte in `[0, capacity)` is initialized: storage is zero-filled when
/// allocated and only ever written with real bytes afterwards. A zero
/// capacity means nothing was allocated and nothing will be released.
pub(crate) struct RawStorage {
    /// Start of the allocation, dangling when `capacity == 0`.
    ptr: NonNull<u8>,
    /// Size of the allocation in bytes.
    capacity: usize,
}

impl RawStorage {
    /// Storage that owns no allocation.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
        }
    }

    /// Wraps an allocation produced by the global allocator.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that:
    ///
    /// - `ptr` was returned by the global allocator for
    ///   `Layout::array::<u8>(capacity)` and `capacity > 0`
    /// - all `capacity` bytes have been initialized
    /// - no other owner will access or release the allocation
    pub(crate) unsafe fn from_raw_parts(ptr: NonNull<u8>, capacity: usize) -> Self {
        Self { ptr, capacity }
    }

    /// Size of the allocation in bytes.
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// The whole allocation as a byte slice.
    pub(crate) fn as_slice(&self) -> &[u8] {
        // SAFETY: `ptr` is valid for `capacity` initialized bytes (or dangling
        // with zero length) and we hold exclusive ownership.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.capacity) }
    }

    /// The whole allocation as a mutable byte slice.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: see `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.capacity) }
    }

    /// Copies `bytes` into this storage starting at `offset`.
    ///
    /// Source and destination never overlap: `bytes` is a shared borrow that
    /// cannot alias `&mut self`.
    ///
    /// # Safety
    ///
    /// `offset + bytes.len()` must not exceed the capacity.
    pub(crate) unsafe fn write(&mut self, offset: usize, bytes: &[u8]) {
        unsafe {
            ptr::copy_nonoverlapping(
                bytes.as_ptr(),
                self.ptr.as_ptr().add(offset),
                bytes.len(),
            );
        }
    }

    /// Moves `count` bytes from `src` to `dest` inside this storage.
    ///
    /// The two ranges may overlap.
    ///
    /// # Safety
    ///
    /// Both `src + count` and `dest + count` must not exceed the capacity.
    pub(crate) unsafe fn shift(&mut self, src: usize, dest: usize, count: usize) {
        let base = self.ptr.as_ptr();
        unsafe {
            ptr::copy(base.add(src), base.add(dest), count);
        }
    }

    /// Zero-fills `count` bytes starting at `offset`.
    ///
    /// # Safety
    ///
    /// `offset + count` must not exceed the capacity.
    pub(crate) unsafe fn zero(&mut self, offset: usize, count: usize) {
        unsafe {
            self.ptr.as_ptr().add(offset).write_bytes(0, count);
        }
    }
}

// SAFETY: RawStorage exclusively owns plain bytes; nothing is shared with
// other owners and there is no interior mutability.
unsafe impl Send for RawStorage {}

// SAFETY: Shared references only permit reads of initialized bytes.
unsafe impl Sync for RawStorage {}

impl Drop for RawStorage {
    /// Returns the allocation to the global allocator exactly once.
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }

        // SAFETY: the allocation was made with `Layout::array::<u8>(capacity)`,
        // which is exactly size `capacity` with alignment 1.
        unsafe {
            let layout = Layout::from_size_align_unchecked(self.capacity, 1);
            alloc::dealloc(self.ptr.as_ptr(), layout);
        }
    }
}
