//! Growable byte buffer and the raw storage behind it.

mod allocator;
mod byte_buffer;
mod raw;


pub use byte_buffer::{ByteBuffer, MAX_CAPACITY};
