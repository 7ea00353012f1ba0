//! # bytebuf-core
//!
//! A growable, contiguous byte buffer with manual capacity management.
//!
//! [`ByteBuffer`] behaves like a byte vector that never over-allocates: every
//! reallocation requests exactly the size the operation needs, and sizing
//! operations take a [`Fill`] policy that decides whether new bytes are
//! zeroed and whether storage is shrunk to fit. Ingestion operations accept
//! any [`ByteSource`], so strings, slices, vectors and other buffers share
//! one code path.

pub mod buffer;
pub mod error;
pub mod options;
pub mod source;

pub use buffer::{ByteBuffer, MAX_CAPACITY};
pub use error::{Error, Result};
pub use options::Fill;
pub use source::ByteSource;
