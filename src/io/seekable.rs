//! Seekable reader trait
//!
//! Every byte source is opened into something that can both read and seek,
//! because TIFF tag data lives at arbitrary offsets.

use std::io::{Read, Seek};

/// Reader that can both read and seek
///
/// `Send + Sync` so that batch extraction can hand readers to worker threads.
pub trait SeekableReader: Read + Seek + Send + Sync {}

impl<T: Read + Seek + Send + Sync> SeekableReader for T {}
