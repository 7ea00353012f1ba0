//! Growable byte buffer with explicit capacity control.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Bound, Deref, DerefMut, RangeBounds};

use crate::error::{Error, Result};
use crate::options::Fill;
use crate::source::ByteSource;

use super::allocator::{allocate, handle_failure};
use super::raw::RawStorage;

/// Largest capacity a [`ByteBuffer`] can ever request.
pub const MAX_CAPACITY: usize = isize::MAX as usize;

/// A contiguous, exclusively owned, heap-backed byte sequence.
///
/// The buffer tracks three cursors: the start of storage, the end of the live
/// bytes (`len`) and the end of the allocation (`capacity`). Growth never
/// over-allocates: every reallocation requests exactly the size the operation
/// needs. Bytes between `len` and `capacity` are allocated but unspecified.
///
/// Operations that may allocate return a [`Result`] and leave the buffer
/// untouched when allocation fails. Position-taking operations come in a
/// checked form returning an [`Error`] and an `unsafe` unchecked form for
/// callers that already uphold the bounds.
///
/// ```
/// use bytebuf_core::{ByteBuffer, Fill};
///
/// let mut buf = ByteBuffer::from_source("abc")?;
/// buf.reserve(200)?;
/// assert_eq!(buf.capacity(), 200);
///
/// buf.resize(3, Fill::SHRINK)?;
/// assert_eq!(buf.capacity(), 3);
/// assert_eq!(buf.as_slice(), b"abc");
/// # Ok::<(), bytebuf_core::Error>(())
/// ```
pub struct ByteBuffer {
    /// Owned allocation; its capacity is the buffer capacity.
    storage: RawStorage,
    /// Number of live bytes, never above the storage capacity.
    len: usize,
}

impl ByteBuffer {
    /// Creates an empty buffer without allocating.
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::empty(),
            len: 0,
        }
    }

    /// Allocates a buffer holding exactly `size` bytes.
    ///
    /// With [`Fill::INITIALIZE`] every byte is zero. Otherwise the content is
    /// unspecified. Size and capacity are both `size`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the storage cannot be allocated.
    pub fn with_size(size: usize, fill: Fill) -> Result<Self> {
        let mut buffer = Self {
            storage: allocate(size)?,
            len: size,
        };

        if fill.is_initialize() {
            // SAFETY: the storage holds exactly `size` bytes
            unsafe { buffer.storage.zero(0, size) };
        }

        Ok(buffer)
    }

    /// Creates a buffer holding a copy of `source`.
    ///
    /// Size and capacity both equal the source length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the storage cannot be allocated.
    pub fn from_source<S>(source: &S) -> Result<Self>
    where
        S: ByteSource + ?Sized,
    {
        let mut buffer = Self::new();
        buffer.assign(source)?;
        Ok(buffer)
    }

    /// Fallible deep copy of the live bytes.
    ///
    /// The copy's capacity equals this buffer's length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the storage cannot be allocated.
    pub fn try_clone(&self) -> Result<Self> {
        Self::from_source(self.as_slice())
    }

    /// Moves the contents out, leaving this buffer empty with no allocation.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Number of live bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when there are no live bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the owned allocation in bytes.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Implementation ceiling for [`capacity`](Self::capacity).
    pub fn max_capacity(&self) -> usize {
        MAX_CAPACITY
    }

    /// The live bytes as a read-only view.
    ///
    /// The view borrows the buffer, so no reallocating mutation can happen
    /// while it is alive.
    pub fn as_slice(&self) -> &[u8] {
        &self.storage.as_slice()[..self.len]
    }

    /// The live bytes as a mutable view.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        let len = self.len;
        &mut self.storage.as_mut_slice()[..len]
    }

    /// Bounds-checked access to the byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&u8> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Bounds-checked mutable access to the byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut u8> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// First live byte, if any.
    pub fn front(&self) -> Option<&u8> {
        self.as_slice().first()
    }

    /// Mutable first live byte, if any.
    pub fn front_mut(&mut self) -> Option<&mut u8> {
        self.as_mut_slice().first_mut()
    }

    /// Last live byte, if any.
    pub fn back(&self) -> Option<&u8> {
        self.as_slice().last()
    }

    /// Mutable last live byte, if any.
    pub fn back_mut(&mut self) -> Option<&mut u8> {
        self.as_mut_slice().last_mut()
    }

    /// Drops every live byte while keeping the allocation.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Ensures the capacity is at least `capacity` bytes.
    ///
    /// Reallocates to exactly `capacity` when the current allocation is
    /// smaller and preserves the live bytes. Never shrinks and never changes
    /// the length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the storage cannot be allocated.
    pub fn reserve(&mut self, capacity: usize) -> Result<()> {
        if self.capacity() >= capacity {
            return Ok(());
        }

        self.reallocate(capacity)
    }

    /// Sets the length to `new_len`.
    ///
    /// - [`Fill::SHRINK`] with `new_len == 0` releases the allocation.
    /// - [`Fill::SHRINK`] otherwise, or a `new_len` above the capacity,
    ///   reallocates to exactly `new_len` bytes keeping the common prefix.
    /// - In every other case only the length moves.
    ///
    /// With [`Fill::INITIALIZE`] the bytes exposed by growth are zeroed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the storage cannot be allocated.
    pub fn resize(&mut self, new_len: usize, fill: Fill) -> Result<()> {
        let old_len = self.len;

        if fill.is_shrink() && new_len == 0 {
            self.release();
            return Ok(());
        }

        let exact = fill.is_shrink() && self.capacity() != new_len;
        if exact || self.capacity() < new_len {
            self.reallocate(new_len)?;
        }

        self.len = new_len;

        if fill.is_initialize() && old_len < new_len {
            // SAFETY: `new_len <= capacity` after the reallocation above
            unsafe { self.storage.zero(old_len, new_len - old_len) };
        }

        Ok(())
    }

    /// Reallocates so the capacity equals the length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the storage cannot be allocated.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        self.resize(self.len, Fill::SHRINK)
    }

    /// Replaces the contents with a copy of `source`.
    ///
    /// Existing storage is reused when it can hold the source; otherwise the
    /// buffer reallocates to exactly the source length, discarding any spare
    /// capacity it had.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the storage cannot be allocated.
    pub fn assign<S>(&mut self, source: &S) -> Result<()>
    where
        S: ByteSource + ?Sized,
    {
        let bytes = source.as_bytes();
        let new_len = bytes.len();

        if new_len > self.capacity() {
            self.storage = allocate(new_len)?;
        }

        // SAFETY: the capacity is at least `new_len`
        unsafe { self.storage.write(0, bytes) };
        self.len = new_len;

        Ok(())
    }

    /// Inserts the bytes of `source` before `position`.
    ///
    /// `position == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfBounds`] if `position > len`, or
    /// [`Error::AllocationFailed`] if growing the storage fails.
    pub fn insert<S>(&mut self, position: usize, source: &S) -> Result<()>
    where
        S: ByteSource + ?Sized,
    {
        if position > self.len {
            return Err(Error::PositionOutOfBounds {
                position,
                len: self.len,
            });
        }

        // SAFETY: position was checked against the live range
        unsafe { self.insert_unchecked(position, source) }
    }

    /// Inserts the bytes of `source` before `position` without checking it.
    ///
    /// When the capacity is too small the buffer reallocates to exactly the
    /// new length and copies prefix, inserted bytes and suffix into it.
    /// Otherwise the suffix is shifted right in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if growing the storage fails.
    ///
    /// # Safety
    ///
    /// `position` must not exceed [`len`](Self::len).
    pub unsafe fn insert_unchecked<S>(&mut self, position: usize, source: &S) -> Result<()>
    where
        S: ByteSource + ?Sized,
    {
        let bytes = source.as_bytes();
        let count = bytes.len();
        let new_len = self.len + count;
        let suffix = self.len - position;

        if self.capacity() < new_len {
            let mut storage = allocate(new_len)?;
            let old = self.storage.as_slice();

            // SAFETY: `storage` holds `new_len` bytes, which covers the prefix
            // at 0 and the suffix at `position + count`
            unsafe {
                storage.write(0, &old[..position]);
                storage.write(position + count, &old[position..self.len]);
            }

            self.storage = storage;
        } else {
            // SAFETY: `position + count + suffix == new_len <= capacity`
            unsafe { self.storage.shift(position, position + count, suffix) };
        }

        // SAFETY: the gap `[position, position + count)` lies inside capacity
        unsafe { self.storage.write(position, bytes) };
        self.len = new_len;

        Ok(())
    }

    /// Appends the bytes of `source` after the live range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if growing the storage fails.
    pub fn append<S>(&mut self, source: &S) -> Result<()>
    where
        S: ByteSource + ?Sized,
    {
        // SAFETY: `len` is always a valid insertion position
        unsafe { self.insert_unchecked(self.len, source) }
    }

    /// Removes the byte at `position`, shifting the rest left by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfBounds`] if `position >= len`.
    ///
    /// # Returns
    ///
    /// The position of the byte that now follows the removed one.
    pub fn erase(&mut self, position: usize) -> Result<usize> {
        if position >= self.len {
            return Err(Error::PositionOutOfBounds {
                position,
                len: self.len,
            });
        }

        // SAFETY: position refers to a live byte
        Ok(unsafe { self.erase_unchecked(position) })
    }

    /// Removes the byte at `position` without checking it.
    ///
    /// # Safety
    ///
    /// `position` must be below [`len`](Self::len).
    pub unsafe fn erase_unchecked(&mut self, position: usize) -> usize {
        unsafe { self.erase_range_unchecked(position, position + 1) }
    }

    /// Removes the bytes in `range`, shifting the remainder left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the range is reversed or extends
    /// past the live bytes.
    ///
    /// # Returns
    ///
    /// The position of the first byte following the removed range.
    pub fn erase_range<R>(&mut self, range: R) -> Result<usize>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;

        let start = match range.start_bound() {
            Bound::Included(&start) => Some(start),
            Bound::Excluded(&start) => start.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1),
            Bound::Excluded(&end) => Some(end),
            Bound::Unbounded => Some(len),
        };

        match (start, end) {
            (Some(start), Some(end)) if start <= end && end <= len => {
                // SAFETY: `start <= end <= len` was just checked
                Ok(unsafe { self.erase_range_unchecked(start, end) })
            }
            (start, end) => Err(Error::InvalidRange {
                start: start.unwrap_or(usize::MAX),
                end: end.unwrap_or(usize::MAX),
                len,
            }),
        }
    }

    /// Removes the half-open range `[first, last)` without checking it.
    ///
    /// # Safety
    ///
    /// Requires `first <= last <= len`.
    pub unsafe fn erase_range_unchecked(&mut self, first: usize, last: usize) -> usize {
        let tail = self.len - last;

        // SAFETY: `last + tail == len <= capacity` and `first <= last`
        unsafe { self.storage.shift(last, first, tail) };
        self.len -= last - first;

        first
    }

    /// Exchanges contents and allocations with `other` in constant time.
    pub fn swap_with(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Moves the live bytes into a fresh allocation of exactly `capacity`.
    ///
    /// Keeps `min(len, capacity)` bytes; the old storage is released only
    /// after the new one was acquired.
    fn reallocate(&mut self, capacity: usize) -> Result<()> {
        let kept = self.len.min(capacity);
        let mut storage = allocate(capacity)?;

        // SAFETY: `kept <= capacity` of the new storage
        unsafe { storage.write(0, &self.storage.as_slice()[..kept]) };

        self.storage = storage;
        self.len = kept;

        Ok(())
    }

    /// Returns to the empty state, releasing the allocation.
    fn release(&mut self) {
        self.storage = RawStorage::empty();
        self.len = 0;
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ByteBuffer {
    /// Deep-copies the live bytes into storage of exactly `len` bytes.
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|err| handle_failure(&err))
    }

    /// Copy assignment: reuses the storage when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.assign(source) {
            handle_failure(&err);
        }
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl DerefMut for ByteBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsMut<[u8]> for ByteBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ByteBuffer {}

impl PartialEq<[u8]> for ByteBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[u8]> for ByteBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_slice() == *other
    }
}

impl Hash for ByteBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("bytes", &self.as_slice())
            .finish()
    }
}

impl<'a> IntoIterator for &'a ByteBuffer {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a> IntoIterator for &'a mut ByteBuffer {
    type Item = &'a mut u8;
    type IntoIter = std::slice::IterMut<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl TryFrom<&[u8]> for ByteBuffer {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_source(bytes)
    }
}

impl TryFrom<&str> for ByteBuffer {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::from_source(text)
    }
}
