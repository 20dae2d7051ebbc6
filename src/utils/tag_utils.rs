//! TIFF tag utilities
//!
//! Field type sizes, inline-storage rules and decoding of raw tag data into
//! `TagValue`s.

use std::io::Read;

use byteorder::ReadBytesExt;
use log::debug;

use crate::io::byte_order::ByteOrderHandler;
use crate::io::seekable::SeekableReader;
use crate::tiff::constants::{compression, field_types};
use crate::tiff::errors::DecodeResult;
use crate::tiff::geotags;
use crate::tiff::types::TagValue;
use crate::utils::string_utils;

/// Size in bytes of one value of a field type, `None` for unknown types
pub fn get_field_type_size(field_type: u16) -> Option<u64> {
    match field_type {
        field_types::BYTE | field_types::ASCII | field_types::SBYTE | field_types::UNDEFINED => Some(1),
        field_types::SHORT | field_types::SSHORT => Some(2),
        field_types::LONG | field_types::SLONG | field_types::FLOAT | field_types::IFD => Some(4),
        field_types::RATIONAL | field_types::SRATIONAL | field_types::DOUBLE => Some(8),
        field_types::LONG8 | field_types::SLONG8 | field_types::IFD8 => Some(8),
        _ => None,
    }
}

/// Total byte size of an entry's data, `None` for unknown types or overflow
pub fn get_data_size(field_type: u16, count: u64) -> Option<u64> {
    get_field_type_size(field_type)?.checked_mul(count)
}

/// Whether data of `size` bytes fits in the entry's value field
///
/// Classic TIFF has 4 bytes available, BigTIFF 8.
pub fn is_value_inline(size: u64, is_big_tiff: bool) -> bool {
    if is_big_tiff {
        size <= 8
    } else {
        size <= 4
    }
}

/// Decodes `count` values of `field_type` from the reader's current position
///
/// The caller has already checked that the field type is known and that the
/// data lies inside the source.
pub fn read_tag_value(
    reader: &mut dyn SeekableReader,
    field_type: u16,
    count: u64,
    handler: &dyn ByteOrderHandler,
) -> DecodeResult<TagValue> {
    if field_type == field_types::ASCII {
        let mut buffer = vec![0u8; count as usize];
        reader.read_exact(&mut buffer)?;
        string_utils::trim_trailing_nulls(&mut buffer);
        return Ok(TagValue::Text(String::from_utf8_lossy(&buffer).into_owned()));
    }

    let mut values = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let value = match field_type {
            field_types::BYTE | field_types::UNDEFINED => reader.read_u8()? as f64,
            field_types::SBYTE => reader.read_i8()? as f64,
            field_types::SHORT => handler.read_u16(reader)? as f64,
            field_types::SSHORT => handler.read_i16(reader)? as f64,
            field_types::LONG | field_types::IFD => handler.read_u32(reader)? as f64,
            field_types::SLONG => handler.read_i32(reader)? as f64,
            field_types::RATIONAL => {
                let (num, den) = handler.read_rational(reader)?;
                num as f64 / den as f64
            },
            field_types::SRATIONAL => {
                let (num, den) = handler.read_srational(reader)?;
                num as f64 / den as f64
            },
            field_types::FLOAT => handler.read_f32(reader)? as f64,
            field_types::DOUBLE => handler.read_f64(reader)?,
            field_types::LONG8 | field_types::IFD8 => handler.read_u64(reader)? as f64,
            field_types::SLONG8 => handler.read_i64(reader)? as f64,
            _ => {
                debug!("read_tag_value called with unknown field type {}", field_type);
                f64::NAN
            }
        };
        values.push(value);
    }

    if values.len() == 1 {
        Ok(TagValue::Scalar(values[0]))
    } else {
        Ok(TagValue::Array(values))
    }
}

/// Name of a TIFF tag, or "Unknown"
pub fn get_tag_name(tag: u16) -> &'static str {
    geotags::get_tag_name(tag)
}

/// Name of a TIFF field type
pub fn get_field_type_name(field_type: u16) -> &'static str {
    match field_type {
        field_types::BYTE => "BYTE",
        field_types::ASCII => "ASCII",
        field_types::SHORT => "SHORT",
        field_types::LONG => "LONG",
        field_types::RATIONAL => "RATIONAL",
        field_types::SBYTE => "SBYTE",
        field_types::UNDEFINED => "UNDEFINED",
        field_types::SSHORT => "SSHORT",
        field_types::SLONG => "SLONG",
        field_types::SRATIONAL => "SRATIONAL",
        field_types::FLOAT => "FLOAT",
        field_types::DOUBLE => "DOUBLE",
        field_types::IFD => "IFD",
        field_types::LONG8 => "LONG8",
        field_types::SLONG8 => "SLONG8",
        field_types::IFD8 => "IFD8",
        _ => "Unknown",
    }
}

/// Name of a compression scheme, `None` if the code is not registered
pub fn get_compression_name(compression_code: u64) -> Option<&'static str> {
    let code = u16::try_from(compression_code).ok()?;
    let name = match code {
        compression::NONE => "None",
        compression::CCITT_RLE => "CCITT RLE",
        compression::CCITT_FAX3 => "CCITT Group 3 Fax",
        compression::CCITT_FAX4 => "CCITT Group 4 Fax",
        compression::LZW => "LZW",
        compression::JPEG_OLD => "Old JPEG",
        compression::JPEG => "JPEG",
        compression::DEFLATE => "Adobe Deflate",
        compression::JBIG_BW => "JBIG (B&W)",
        compression::JBIG_COLOR => "JBIG (Color)",
        compression::PACKBITS => "PackBits",
        compression::DEFLATE_OLD => "Deflate",
        compression::JPEG2000 => "JPEG 2000",
        compression::LERC => "LERC",
        compression::JPEG_LOSSY => "Lossy JPEG",
        compression::LZMA => "LZMA",
        compression::ZSTD => "Zstandard",
        compression::WEBP => "WebP",
        compression::JPEG_XL | compression::JPEG_XL_DNG => "JPEG XL",
        _ => return None,
    };
    Some(name)
}
