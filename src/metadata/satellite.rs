//! Satellite and sensor identification from filenames
//!
//! A coarse heuristic over mission naming conventions. Unknown names are
//! expected and yield no identity.

use log::debug;

/// Filename substrings that identify a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatelliteFilenamePattern {
    /// Uppercase substrings, any of which matches
    pub substrings: &'static [&'static str],
    pub satellite_name: &'static str,
    pub sensor_type: &'static str,
}

/// Patterns in priority order: specific missions before generic names
pub const SATELLITE_PATTERNS: [SatelliteFilenamePattern; 7] = [
    SatelliteFilenamePattern { substrings: &["S2A"], satellite_name: "Sentinel-2A", sensor_type: "MSI" },
    SatelliteFilenamePattern { substrings: &["S2B"], satellite_name: "Sentinel-2B", sensor_type: "MSI" },
    SatelliteFilenamePattern {
        substrings: &["SENTINEL-2", "SENTINEL2", "S2_"],
        satellite_name: "Sentinel-2",
        sensor_type: "MSI",
    },
    SatelliteFilenamePattern {
        substrings: &["LC09", "LANDSAT-9", "LANDSAT9"],
        satellite_name: "Landsat-9",
        sensor_type: "OLI-2/TIRS-2",
    },
    SatelliteFilenamePattern {
        substrings: &["LC08", "LANDSAT-8", "LANDSAT8"],
        satellite_name: "Landsat-8",
        sensor_type: "OLI/TIRS",
    },
    SatelliteFilenamePattern {
        substrings: &["LE07", "LANDSAT-7", "LANDSAT7"],
        satellite_name: "Landsat-7",
        sensor_type: "ETM+",
    },
    SatelliteFilenamePattern { substrings: &["MOD", "MYD", "MCD"], satellite_name: "MODIS", sensor_type: "MODIS" },
];

impl SatelliteFilenamePattern {
    /// Whether an uppercased filename contains any of the substrings
    pub fn matches(&self, upper_filename: &str) -> bool {
        self.substrings.iter().any(|s| upper_filename.contains(s))
    }
}

/// First pattern matching the filename, case-insensitively
pub fn find_pattern(filename: &str) -> Option<&'static SatelliteFilenamePattern> {
    let upper = filename.to_uppercase();
    let pattern = SATELLITE_PATTERNS.iter().find(|p| p.matches(&upper));

    match pattern {
        Some(p) => debug!("Filename {} identified as {} ({})", filename, p.satellite_name, p.sensor_type),
        None => debug!("No satellite pattern matches filename {}", filename),
    }
    pattern
}

/// `(satellite_name, sensor_type)` for a filename; both `None` if unknown
pub fn identify_satellite(filename: &str) -> (Option<String>, Option<String>) {
    match find_pattern(filename) {
        Some(p) => (Some(p.satellite_name.to_string()), Some(p.sensor_type.to_string())),
        None => (None, None),
    }
}
