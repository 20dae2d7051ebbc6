//! Single-file diagnostic command
//!
//! Prints what the extractor publishes for a file, plus the raw footprint
//! and GeoKeys it based that on.

use log::info;

use crate::api::{Inspection, MetadataExtractor};
use crate::commands::command_traits::Command;
use crate::io::source::ByteSource;
use crate::metadata::extract_geometry;
use crate::tiff::errors::DecodeResult;

/// Command for inspecting one GeoTIFF
pub struct InspectCommand {
    source: ByteSource,
    /// Name used for satellite identification
    filename: String,
    extractor: MetadataExtractor,
}

impl InspectCommand {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `input` - Local path or http(s) URL
    /// * `filename` - Original filename; defaults to the input's file name
    /// * `extractor` - Configured extractor
    pub fn new(input: &str, filename: Option<String>, extractor: MetadataExtractor) -> Self {
        let source = ByteSource::from_argument(input);
        let filename = filename
            .or_else(|| source.default_filename())
            .unwrap_or_default();

        InspectCommand { source, filename, extractor }
    }
}

impl Command for InspectCommand {
    fn execute(&self) -> DecodeResult<()> {
        info!("Inspecting {}", self.source.describe());
        let inspection = self.extractor.inspect(&self.source, &self.filename)?;

        print!("{}", format_inspection(&self.source.describe(), &inspection));
        Ok(())
    }
}

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "unknown".to_string())
}

/// Renders the diagnostic report for one file
pub fn format_inspection(source: &str, inspection: &Inspection) -> String {
    let metadata = &inspection.metadata;
    let mut result = format!("GeoTIFF Metadata: {}\n", source);

    result.push_str(&format!("  Format: {}, {}, {} IFD(s)\n",
                             if inspection.is_big_tiff { "BigTIFF" } else { "TIFF" },
                             inspection.byte_order.name(),
                             inspection.ifd_count));
    result.push_str(&format!("  Dimensions: {}x{}\n", metadata.width, metadata.height));
    result.push_str(&format!("  Bands: {}\n", metadata.bands));
    result.push_str(&format!("  Bit depth: {}\n", or_unknown(metadata.bit_depth)));
    result.push_str(&format!("  Resolution: {}\n",
                             or_unknown(metadata.resolution_meters_per_pixel.map(|r| format!("{} m/pixel", r)))));
    result.push_str(&format!("  Captured: {}\n", or_unknown(metadata.captured_at_iso())));

    let satellite = match (&metadata.satellite_name, &metadata.sensor_type) {
        (Some(name), Some(sensor)) => format!("{} ({})", name, sensor),
        (Some(name), None) => name.clone(),
        _ => "unknown".to_string(),
    };
    result.push_str(&format!("  Satellite: {}\n", satellite));
    result.push_str(&format!("  Projection: {}\n", metadata.projection_label.as_deref().unwrap_or("none")));

    result.push_str("\nFootprint:\n");
    match extract_geometry(inspection.raw_bounding_box) {
        Some((bbox, center)) => {
            result.push_str(&format!("  North: {}\n  South: {}\n  East: {}\n  West: {}\n",
                                     bbox.north, bbox.south, bbox.east, bbox.west));
            result.push_str(&format!("  Center: {}\n", center));
        },
        None => result.push_str("  No bounding box\n"),
    }
    result.push_str(&format!("  Coordinate system: {}\n", metadata.coordinate_verdict));

    match (inspection.region_label(), inspection.map_link()) {
        (Some(region), Some(link)) => {
            result.push_str(&format!("  Region: {}\n", region));
            result.push_str(&format!("  Map: {}\n", link));
        },
        _ if inspection.raw_bounding_box.is_some() => {
            result.push_str("  Footprint withheld: coordinates are not WGS84 latitude/longitude\n");
        },
        _ => {},
    }

    if !inspection.geotiff_tags.is_empty() {
        result.push_str(&format!("\nGeoTIFF tags: {}\n", inspection.geotiff_tags.join(", ")));
    }

    if !inspection.geo_keys.is_empty() {
        result.push_str(&format!("\nGeoKeys ({}):\n", inspection.geo_keys.len()));
        for key in &inspection.geo_keys {
            result.push_str(&format!("  {}\n", key));
        }
    }

    result
}
