//! Coordinate system classification
//!
//! Decides whether a raw model-space box is true geographic lat/lon. The
//! verdict gates publication of any footprint: only a `Geographic` box may
//! ever leave the extractor as a `BoundingBox`/`GeoPoint` pair.

use std::fmt;
use std::ops::RangeInclusive;

use log::debug;

const LATITUDE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE: RangeInclusive<f64> = -180.0..=180.0;

/// Outcome of classifying a raw bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystemVerdict {
    /// Every edge lies within lat/lon range
    Geographic,
    /// At least one edge is out of range (or not a number)
    Projected,
    /// The file has no bounding box
    Absent,
}

impl CoordinateSystemVerdict {
    pub fn is_geographic(&self) -> bool {
        matches!(self, CoordinateSystemVerdict::Geographic)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoordinateSystemVerdict::Geographic => "Geographic",
            CoordinateSystemVerdict::Projected => "Projected",
            CoordinateSystemVerdict::Absent => "Absent",
        }
    }
}

impl fmt::Display for CoordinateSystemVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies a raw `[west, south, east, north]` box
///
/// Closed-range test on each edge independently. NaN is never in range.
pub fn classify(bbox: Option<[f64; 4]>) -> CoordinateSystemVerdict {
    let Some([west, south, east, north]) = bbox else {
        return CoordinateSystemVerdict::Absent;
    };

    let geographic = LATITUDE.contains(&south)
        && LATITUDE.contains(&north)
        && LONGITUDE.contains(&west)
        && LONGITUDE.contains(&east);

    let verdict = if geographic {
        CoordinateSystemVerdict::Geographic
    } else {
        CoordinateSystemVerdict::Projected
    };
    debug!("Box [{}, {}, {}, {}] classified as {}", west, south, east, north, verdict);
    verdict
}
