//! Four-edge bounding box

use std::fmt;

use super::point::GeoPoint;

/// A rectangular extent given by its four edges
///
/// Edges are stored as read. `north >= south` is not enforced and
/// `west > east` (an anti-meridian crossing) is representable; the values
/// only mean degrees when the classifier says the box is geographic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        BoundingBox { north, south, east, west }
    }

    /// Builds a box from the decoder's `[west, south, east, north]` order
    pub fn from_edges(edges: [f64; 4]) -> Self {
        let [west, south, east, north] = edges;
        BoundingBox { north, south, east, west }
    }

    /// Center by simple averaging of opposite edges
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new((self.north + self.south) / 2.0, (self.east + self.west) / 2.0)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N={} S={} E={} W={}", self.north, self.south, self.east, self.west)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_order() {
        let bbox = BoundingBox::from_edges([32.6, 34.5, 33.1, 35.0]);
        assert_eq!(bbox, BoundingBox::new(35.0, 34.5, 33.1, 32.6));
    }

    #[test]
    fn test_center_is_average() {
        let bbox = BoundingBox::from_edges([32.6, 34.5, 33.1, 35.0]);
        let center = bbox.center();
        assert_eq!(center.lat, (35.0 + 34.5) / 2.0);
        assert_eq!(center.lon, (33.1 + 32.6) / 2.0);
    }

    #[test]
    fn test_inverted_box_still_has_center() {
        let bbox = BoundingBox::from_edges([10.0, 20.0, 0.0, 10.0]);
        assert_eq!(bbox.center(), GeoPoint::new(15.0, 5.0));
    }
}
