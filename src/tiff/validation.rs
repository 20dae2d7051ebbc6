//! TIFF validation utilities
//!
//! Checks run while decoding so that malformed or truncated files fail with
//! a `DecodeError` instead of producing nonsense values.

use log::{debug, error, warn};
use std::io::SeekFrom;

use crate::io::byte_order::ByteOrderHandler;
use crate::io::seekable::SeekableReader;
use crate::tiff::constants::{header, tags};
use crate::tiff::errors::{DecodeError, DecodeResult};
use crate::tiff::ifd::IFD;
use crate::utils::tag_utils;

/// Validates that an IFD offset points inside the file, past the header
pub fn validate_ifd_offset(offset: u64, file_size: u64) -> DecodeResult<()> {
    if offset >= file_size || offset < header::MIN_IFD_OFFSET {
        return Err(DecodeError::InvalidIfdOffset { offset, file_size });
    }

    Ok(())
}

/// Validates that `size` bytes starting at `offset` lie inside the file
pub fn validate_data_range(offset: u64, size: u64, file_size: u64, what: &str) -> DecodeResult<()> {
    match offset.checked_add(size) {
        Some(end) if end <= file_size => Ok(()),
        _ => Err(DecodeError::Truncated(format!(
            "{} needs bytes {}..{} but the file has {}",
            what, offset, offset.saturating_add(size), file_size
        ))),
    }
}

/// Gets the total size of the source, restoring the read position
pub fn get_file_size(reader: &mut dyn SeekableReader) -> DecodeResult<u64> {
    let current_position = reader.stream_position()?;
    let file_size = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(current_position))?;
    Ok(file_size)
}

/// Validates the BigTIFF header fields following the version number
///
/// BigTIFF stores the offset size (must be 8) and a reserved zero.
pub fn validate_bigtiff_header(
    reader: &mut dyn SeekableReader,
    handler: &dyn ByteOrderHandler,
) -> DecodeResult<()> {
    let offset_size = handler.read_u16(reader)?;
    let zeros = handler.read_u16(reader)?;

    debug!("BigTIFF offset size: {}, reserved: {}", offset_size, zeros);

    if offset_size != header::BIGTIFF_OFFSET_SIZE || zeros != 0 {
        error!("Invalid BigTIFF header: offset_size={}, zeros={}", offset_size, zeros);
        return Err(DecodeError::InvalidBigTiffHeader);
    }

    Ok(())
}

/// Validates that the main image is something a TIFF decoder could open
///
/// The image must declare its dimensions, and a declared compression scheme
/// must be a registered one.
pub fn validate_main_ifd(ifd: &IFD) -> DecodeResult<()> {
    if ifd.get_dimensions().is_none() {
        error!("IFD #{} has no ImageWidth/ImageLength", ifd.number);
        return Err(DecodeError::MissingDimensions);
    }

    if let Some(code) = ifd.get_u64(tags::COMPRESSION) {
        match tag_utils::get_compression_name(code) {
            Some(name) => debug!("Compression: {} ({})", code, name),
            None => {
                warn!("Unrecognized compression code {}", code);
                return Err(DecodeError::UnsupportedCompression(code));
            }
        }
    }

    Ok(())
}
