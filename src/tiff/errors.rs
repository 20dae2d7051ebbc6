//! Decode errors
//!
//! A `DecodeError` means the source could not be read as TIFF at all. It is
//! fatal for the extraction: no partial metadata is ever returned alongside
//! it. A missing or malformed individual tag is not an error and shows up
//! as `None` on the corresponding field instead.

use std::fmt;
use std::io;

/// Reasons a source cannot be decoded
#[derive(Debug)]
pub enum DecodeError {
    /// I/O error while reading the source
    Io(io::Error),
    /// The source could not be opened or fetched
    SourceUnavailable(String),
    /// Invalid byte order marker
    InvalidByteOrder(u16),
    /// Invalid BigTIFF header
    InvalidBigTiffHeader,
    /// Unsupported TIFF version
    UnsupportedVersion(u16),
    /// IFD offset outside the file
    InvalidIfdOffset { offset: u64, file_size: u64 },
    /// Data ends before a structure it references
    Truncated(String),
    /// The file has no readable image directory
    NoImageDirectory,
    /// Image dimensions not found
    MissingDimensions,
    /// Unrecognized compression scheme
    UnsupportedCompression(u64),
    /// Bad caller input (e.g. CLI arguments)
    InvalidArgument(String),
    /// Some files of a batch could not be decoded
    BatchFailed { failed: usize, total: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Io(e) => write!(f, "I/O error: {}", e),
            DecodeError::SourceUnavailable(msg) => write!(f, "Source unavailable: {}", msg),
            DecodeError::InvalidByteOrder(v) => write!(f, "Invalid byte order marker: {:#06x}", v),
            DecodeError::InvalidBigTiffHeader => write!(f, "Invalid BigTIFF header"),
            DecodeError::UnsupportedVersion(v) => write!(f, "Unsupported TIFF version: {}", v),
            DecodeError::InvalidIfdOffset { offset, file_size } => {
                write!(f, "Invalid IFD offset: {} (file size: {})", offset, file_size)
            }
            DecodeError::Truncated(what) => write!(f, "Truncated TIFF data: {}", what),
            DecodeError::NoImageDirectory => write!(f, "No image directory found"),
            DecodeError::MissingDimensions => write!(f, "Image dimensions not found"),
            DecodeError::UnsupportedCompression(c) => write!(f, "Unsupported compression method: {}", c),
            DecodeError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            DecodeError::BatchFailed { failed, total } => {
                write!(f, "{} of {} files could not be decoded", failed, total)
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof => DecodeError::Truncated(error.to_string()),
            _ => DecodeError::Io(error),
        }
    }
}

impl From<reqwest::Error> for DecodeError {
    fn from(error: reqwest::Error) -> Self {
        DecodeError::SourceUnavailable(error.without_url().to_string())
    }
}

/// Result type for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;
