//! GeoTIFF metadata extraction
//!
//! Reads the tag directory of a TIFF/BigTIFF satellite image and derives its
//! footprint, technical parameters, capture time and likely satellite. A
//! footprint is only published when the file's coordinates are true
//! geographic latitude/longitude.

pub mod io;
pub mod tiff;
pub mod utils;
pub mod coordinate;
pub mod metadata;
pub mod commands;
pub mod api;

pub use crate::api::{ExtractionJob, ExtractorOptions, Inspection, MetadataExtractor};

pub use coordinate::{BoundingBox, CoordinateSystemVerdict, GeoPoint};
pub use io::ByteSource;
pub use metadata::ImageMetadata;
pub use tiff::{DecodeError, DecodeResult, TiffReader};
