//! Center point of a footprint

use std::fmt;

/// A latitude/longitude pair
///
/// Always derived from a `BoundingBox`, never read from input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Link to the point on a web map
    pub fn map_link(&self) -> String {
        format!("https://www.google.com/maps?q={:.6},{:.6}", self.lat, self.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
