//! Byte sources accepted by ingestion operations.

/// Anything that can expose its contents as a contiguous run of bytes.
///
/// [`ByteBuffer::assign`](crate::ByteBuffer::assign),
/// [`ByteBuffer::insert`](crate::ByteBuffer::insert) and
/// [`ByteBuffer::from_source`](crate::ByteBuffer::from_source) take any
/// implementor, so strings, slices, vectors and other buffers all feed the
/// same code path.
pub trait ByteSource {
    /// Read-only view of the bytes to ingest.
    fn as_bytes(&self) -> &[u8];

    /// Number of bytes this source yields.
    fn byte_len(&self) -> usize {
        self.as_bytes().len()
    }
}

impl<T> ByteSource for T
where
    T: AsRef<[u8]> + ?Sized,
{
    fn as_bytes(&self) -> &[u8] {
        self.as_ref()
    }
}
