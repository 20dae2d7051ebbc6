//! IFD layout utilities
//!
//! Offsets and sizes differ between classic TIFF (16/32-bit fields) and
//! BigTIFF (64-bit fields); these helpers keep that out of the reader.

use crate::io::byte_order::ByteOrderHandler;
use crate::io::seekable::SeekableReader;
use crate::tiff::errors::DecodeResult;

/// Reads an IFD offset: the header's first offset or an IFD's next offset
///
/// A next offset of 0 ends the chain.
pub fn read_ifd_offset(
    reader: &mut dyn SeekableReader,
    is_big_tiff: bool,
    handler: &dyn ByteOrderHandler,
) -> DecodeResult<u64> {
    if is_big_tiff {
        Ok(handler.read_u64(reader)?)
    } else {
        Ok(handler.read_u32(reader)? as u64)
    }
}

/// Reads the number of entries at the start of an IFD
pub fn read_entry_count(
    reader: &mut dyn SeekableReader,
    is_big_tiff: bool,
    handler: &dyn ByteOrderHandler,
) -> DecodeResult<u64> {
    if is_big_tiff {
        Ok(handler.read_u64(reader)?)
    } else {
        Ok(handler.read_u16(reader)? as u64)
    }
}

/// Size in bytes of one IFD entry
pub fn entry_size(is_big_tiff: bool) -> u64 {
    if is_big_tiff { 20 } else { 12 }
}

/// Size in bytes of the entry value field
pub fn value_field_size(is_big_tiff: bool) -> usize {
    if is_big_tiff { 8 } else { 4 }
}

/// Size in bytes of an IFD with `entry_count` entries, including the
/// entry count and the trailing next-IFD offset
pub fn calculate_ifd_size(entry_count: u64, is_big_tiff: bool) -> u64 {
    let (count_size, next_offset_size) = if is_big_tiff { (8, 8) } else { (2, 4) };
    count_size + entry_count.saturating_mul(entry_size(is_big_tiff)) + next_offset_size
}
