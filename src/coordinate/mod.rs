//! Geographic footprint types and coordinate-system classification
//!
//! `BoundingBox` and `GeoPoint` are produced only by the geometry extractor;
//! whether they may be shown to anyone is decided by the classifier.

mod bbox;
mod point;
pub mod classifier;
pub mod region;

pub use self::bbox::BoundingBox;
pub use self::point::GeoPoint;
pub use self::classifier::{classify, CoordinateSystemVerdict};
pub use self::region::{region_label, RegionHeuristic};
