//! Byte-level input for the tag directory decoder
//!
//! Byte order strategies, the seekable reader trait and the byte sources
//! (local files, in-memory buffers, remote URLs) an extraction reads from.

pub mod seekable;
pub mod byte_order;
pub mod source;

pub use source::ByteSource;
