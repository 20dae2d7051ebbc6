//! TIFF file format parsing module
//!
//! Decodes the tag directories of TIFF and BigTIFF files, including the
//! GeoTIFF georeferencing tags and the GeoKey directory.

pub mod errors;
pub mod ifd;
pub mod types;
pub mod reader;
pub mod geotags;
pub mod geo_keys;
pub mod directory;
pub(crate) mod constants;
pub(crate) mod validation;
#[cfg(test)]
mod tests;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use directory::TagDirectory;
pub use errors::{DecodeError, DecodeResult};
pub use geo_keys::{parse_geo_key_directory, GeoKeyEntry};
pub use geotags::{get_key_name, get_tag_name, is_geotiff_tag};
pub use ifd::{IFD, IFDEntry};
pub use reader::TiffReader;
pub use types::{TagValue, TIFF};
