//! Footprint extraction
//!
//! The only place `BoundingBox`/`GeoPoint` values are created from file
//! data. No range checks happen here; whether the result may be published
//! is up to the classifier.

use crate::coordinate::{BoundingBox, GeoPoint};

/// Parses a raw `[west, south, east, north]` box and computes its center
pub fn extract_geometry(bbox: Option<[f64; 4]>) -> Option<(BoundingBox, GeoPoint)> {
    let bbox = BoundingBox::from_edges(bbox?);
    Some((bbox, bbox.center()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_box() {
        assert_eq!(extract_geometry(None), None);
    }

    #[test]
    fn test_center_point_law() {
        let (bbox, center) = extract_geometry(Some([32.6, 34.5, 33.1, 35.0])).unwrap();
        assert_eq!(bbox.west, 32.6);
        assert_eq!(bbox.north, 35.0);
        assert_eq!(center.lat, (bbox.north + bbox.south) / 2.0);
        assert_eq!(center.lon, (bbox.east + bbox.west) / 2.0);
        assert!((center.lat - 34.75).abs() < 1e-12);
        assert!((center.lon - 32.85).abs() < 1e-12);
    }

    #[test]
    fn test_projected_values_are_still_parsed() {
        let (bbox, center) = extract_geometry(Some([500_000.0, 4_000_000.0, 510_000.0, 4_010_000.0])).unwrap();
        assert_eq!(bbox.east, 510_000.0);
        assert_eq!(center, GeoPoint::new(4_005_000.0, 505_000.0));
    }
}
