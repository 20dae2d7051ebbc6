//! TIFF header utilities
//!
//! Byte order detection and classic/BigTIFF format detection.

use log::debug;

use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::seekable::SeekableReader;
use crate::tiff::constants::header;
use crate::tiff::errors::{DecodeError, DecodeResult};
use crate::tiff::validation;

/// Reads the byte order marker and returns it with its handler
pub fn detect_byte_order(reader: &mut dyn SeekableReader) -> DecodeResult<(ByteOrder, Box<dyn ByteOrderHandler>)> {
    let byte_order = ByteOrder::detect(reader)?;
    debug!("Detected byte order: {}", byte_order.name());

    Ok((byte_order, byte_order.create_handler()))
}

/// Reads the version number and reports whether the file is BigTIFF
///
/// For BigTIFF the offset-size and reserved fields are validated as well.
pub fn detect_tiff_format(
    reader: &mut dyn SeekableReader,
    handler: &dyn ByteOrderHandler,
) -> DecodeResult<bool> {
    let version = handler.read_u16(reader)?;
    debug!("TIFF version: {}", version);

    match version {
        header::BIG_TIFF_VERSION => {
            debug!("Detected BigTIFF format");
            validation::validate_bigtiff_header(reader, handler)?;
            Ok(true)
        },
        header::TIFF_VERSION => {
            debug!("Detected standard TIFF format");
            Ok(false)
        },
        _ => Err(DecodeError::UnsupportedVersion(version)),
    }
}
