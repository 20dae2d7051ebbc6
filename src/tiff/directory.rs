//! Tag directory accessor
//!
//! A read-only view over the main image of a decoded TIFF. This is the only
//! surface the metadata extraction looks at: image dimensions, the raw
//! bounding box derived from the georeferencing tags, and tag values by
//! name. A missing tag is `None`, never an error.

use log::debug;

use crate::tiff::constants::tags;
use crate::tiff::errors::{DecodeError, DecodeResult};
use crate::tiff::geotags;
use crate::tiff::ifd::IFD;
use crate::tiff::types::{TagValue, TIFF};

/// Read-only view over the main IFD of a TIFF
#[derive(Debug, Clone, Copy)]
pub struct TagDirectory<'a> {
    ifd: &'a IFD,
    width: u32,
    height: u32,
}

impl<'a> TagDirectory<'a> {
    /// Wraps the main IFD of a decoded TIFF
    ///
    /// Fails only if the TIFF has no image directory or the image has no
    /// usable dimensions, which the reader already rejects.
    pub fn new(tiff: &'a TIFF) -> DecodeResult<Self> {
        let ifd = tiff.main_ifd().ok_or(DecodeError::NoImageDirectory)?;
        Self::from_ifd(ifd)
    }

    /// Wraps a single IFD
    pub fn from_ifd(ifd: &'a IFD) -> DecodeResult<Self> {
        let (width, height) = ifd.get_dimensions().ok_or(DecodeError::MissingDimensions)?;
        let width = u32::try_from(width).map_err(|_| DecodeError::MissingDimensions)?;
        let height = u32::try_from(height).map_err(|_| DecodeError::MissingDimensions)?;

        Ok(TagDirectory { ifd, width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples per pixel; the TIFF default of 1 applies when the tag is absent
    pub fn samples_per_pixel(&self) -> u32 {
        u32::try_from(self.ifd.get_samples_per_pixel()).unwrap_or(1)
    }

    /// Resolved value of a tag by name, e.g. `"BitsPerSample"`
    pub fn raw_tag(&self, name: &str) -> Option<&'a TagValue> {
        let tag = geotags::get_tag_id(name)?;
        self.raw_tag_by_id(tag)
    }

    /// Resolved value of a tag by numeric id
    pub fn raw_tag_by_id(&self, tag: u16) -> Option<&'a TagValue> {
        self.ifd.get_value(tag)
    }

    /// Whether the image carries a GeoKey directory
    pub fn has_geo_keys(&self) -> bool {
        self.ifd.has_tag(tags::GEO_KEY_DIRECTORY)
    }

    /// The underlying IFD
    pub fn ifd(&self) -> &'a IFD {
        self.ifd
    }

    /// Model-space extent of the image as `[west, south, east, north]`
    ///
    /// Derived from a tiepoint plus pixel scale, or from the model
    /// transformation matrix. The values are in whatever units the file's
    /// coordinate system uses; nothing here says they are degrees.
    pub fn bounding_box(&self) -> Option<[f64; 4]> {
        let corners = self.corners_from_tiepoint().or_else(|| self.corners_from_transformation())?;
        let [x0, y0, x1, y1] = corners;

        let bbox = [x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)];
        if bbox.iter().all(|v| v.is_finite()) {
            Some(bbox)
        } else {
            debug!("Bounding box has non-finite edges: {:?}", bbox);
            None
        }
    }

    /// Opposite corners `[x0, y0, x1, y1]` from ModelTiepoint + ModelPixelScale
    fn corners_from_tiepoint(&self) -> Option<[f64; 4]> {
        let tiepoint = self.raw_tag_by_id(tags::MODEL_TIEPOINT)?.numbers()?;
        let scale = self.raw_tag_by_id(tags::MODEL_PIXEL_SCALE)?.numbers()?;
        if tiepoint.len() < 6 || scale.len() < 2 {
            return None;
        }

        let (i, j, x, y) = (tiepoint[0], tiepoint[1], tiepoint[3], tiepoint[4]);
        let (sx, sy) = (scale[0], scale[1]);

        let x0 = x - i * sx;
        let y0 = y + j * sy;
        let x1 = x0 + self.width as f64 * sx;
        let y1 = y0 - self.height as f64 * sy;

        Some([x0, y0, x1, y1])
    }

    /// Opposite corners `[x0, y0, x1, y1]` from the 4x4 ModelTransformation
    fn corners_from_transformation(&self) -> Option<[f64; 4]> {
        let m = self.raw_tag_by_id(tags::MODEL_TRANSFORMATION)?.numbers()?;
        if m.len() < 16 {
            return None;
        }

        let apply = |i: f64, j: f64| (m[0] * i + m[1] * j + m[3], m[4] * i + m[5] * j + m[7]);
        let (x0, y0) = apply(0.0, 0.0);
        let (x1, y1) = apply(self.width as f64, self.height as f64);

        Some([x0, y0, x1, y1])
    }
}
