//! Image metadata extraction
//!
//! Merges geometry, technical fields and the filename heuristic into one
//! `ImageMetadata` record. A record is only built from a successfully
//! decoded directory; there is no partially filled variant.

pub mod geometry;
pub mod satellite;
pub mod technical;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, info};

use crate::coordinate::{classify, BoundingBox, CoordinateSystemVerdict, GeoPoint};
use crate::tiff::directory::TagDirectory;

pub use geometry::extract_geometry;
pub use satellite::{identify_satellite, SatelliteFilenamePattern};
pub use technical::RawTechnicalFields;

/// Metadata published for one image
#[derive(Debug, Clone, PartialEq)]
pub struct ImageMetadata {
    /// Footprint and center, only when the box is geographic
    pub geometry: Option<(BoundingBox, GeoPoint)>,
    pub coordinate_verdict: CoordinateSystemVerdict,
    pub width: u32,
    pub height: u32,
    pub bands: u32,
    pub bit_depth: Option<u32>,
    pub resolution_meters_per_pixel: Option<u32>,
    pub captured_at: Option<DateTime<Utc>>,
    pub satellite_name: Option<String>,
    pub sensor_type: Option<String>,
    pub projection_label: Option<String>,
}

impl ImageMetadata {
    /// Builds the record for the image behind `directory`
    ///
    /// `filename` is the name the image was supplied under; it feeds only
    /// the satellite identification.
    pub fn from_directory(directory: &TagDirectory<'_>, filename: &str) -> Self {
        let raw_bbox = directory.bounding_box();
        let coordinate_verdict = classify(raw_bbox);

        let geometry = if coordinate_verdict.is_geographic() {
            extract_geometry(raw_bbox)
        } else {
            if raw_bbox.is_some() {
                info!("Bounding box of {} is not geographic, footprint withheld", filename);
            }
            None
        };

        let fields = RawTechnicalFields::from_directory(directory);
        debug!("Raw technical fields: {:?}", fields);
        let (satellite_name, sensor_type) = identify_satellite(filename);

        ImageMetadata {
            geometry,
            coordinate_verdict,
            width: fields.width,
            height: fields.height,
            bands: fields.bands(),
            bit_depth: fields.bit_depth(),
            resolution_meters_per_pixel: fields.resolution_meters_per_pixel(),
            captured_at: fields.captured_at(),
            satellite_name,
            sensor_type,
            projection_label: technical::projection_label(fields.has_geo_keys, coordinate_verdict),
        }
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.geometry.as_ref().map(|(bbox, _)| bbox)
    }

    pub fn center(&self) -> Option<&GeoPoint> {
        self.geometry.as_ref().map(|(_, center)| center)
    }

    /// Capture time as `YYYY-MM-DDTHH:MM:SS.sssZ`
    pub fn captured_at_iso(&self) -> Option<String> {
        self.captured_at.map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}
