//! Region labels for geographic centers
//!
//! Purely for people looking at a file: the label is printed by the
//! diagnostic CLI and logged, never stored.

use super::point::GeoPoint;

/// A named lat/lon rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionHeuristic {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    pub label: &'static str,
}

impl RegionHeuristic {
    const fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64, label: &'static str) -> Self {
        RegionHeuristic { lat_min, lat_max, lon_min, lon_max, label }
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.lat)
            && (self.lon_min..=self.lon_max).contains(&point.lon)
    }
}

/// Known regions, most specific first
pub const REGIONS: [RegionHeuristic; 3] = [
    RegionHeuristic::new(34.5, 35.8, 32.2, 34.7, "Cyprus"),
    RegionHeuristic::new(29.0, 38.0, 25.0, 37.0, "Eastern Mediterranean"),
    RegionHeuristic::new(35.0, 72.0, -25.0, 45.0, "Europe"),
];

/// Label for a geographic center: the first matching region, or the
/// coordinates with compass suffixes
pub fn region_label(point: &GeoPoint) -> String {
    match REGIONS.iter().find(|region| region.contains(point)) {
        Some(region) => region.label.to_string(),
        None => format!("Other ({})", format_degrees(point)),
    }
}

/// `34.7500°N, 32.8500°E` style formatting
pub fn format_degrees(point: &GeoPoint) -> String {
    let ns = if point.lat >= 0.0 { 'N' } else { 'S' };
    let ew = if point.lon >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}°{}, {:.4}°{}", point.lat.abs(), ns, point.lon.abs(), ew)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        // Cyprus lies inside the Eastern Mediterranean box as well
        assert_eq!(region_label(&GeoPoint::new(34.75, 32.85)), "Cyprus");
        assert_eq!(region_label(&GeoPoint::new(31.0, 30.0)), "Eastern Mediterranean");
        assert_eq!(region_label(&GeoPoint::new(48.85, 2.35)), "Europe");
    }

    #[test]
    fn test_other_label_uses_compass_suffixes() {
        assert_eq!(region_label(&GeoPoint::new(-33.8688, 151.2093)), "Other (33.8688°S, 151.2093°E)");
        assert_eq!(region_label(&GeoPoint::new(40.7128, -74.006)), "Other (40.7128°N, 74.0060°W)");
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(&GeoPoint::new(34.75, 32.85)), "34.7500°N, 32.8500°E");
    }
}
