//! Technical field normalization
//!
//! Turns raw tag values into the typed fields of `ImageMetadata`. Every
//! field is best-effort: a missing or malformed tag becomes `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::coordinate::CoordinateSystemVerdict;
use crate::tiff::directory::TagDirectory;
use crate::tiff::types::TagValue;

/// Label for images whose GeoKeys sit on a geographic box
pub const GEOGRAPHIC_LABEL: &str = "Geographic";
/// Label for images without a publishable geographic footprint
pub const NON_GEOGRAPHIC_LABEL: &str = "Non-geographic";

lazy_static! {
    /// EXIF-style date prefix `YYYY:MM:DD`
    static ref EXIF_DATE: Option<Regex> = Regex::new(r"^(\d{4}):(\d{2}):(\d{2})").ok();
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Raw technical tags of the main image, read once
#[derive(Debug, Clone, PartialEq)]
pub struct RawTechnicalFields {
    pub width: u32,
    pub height: u32,
    /// SamplesPerPixel, 1 when absent
    pub samples_per_pixel: u32,
    pub bit_depth: Option<TagValue>,
    pub pixel_scale: Option<TagValue>,
    pub date_time: Option<String>,
    pub has_geo_keys: bool,
}

impl RawTechnicalFields {
    pub fn from_directory(directory: &TagDirectory<'_>) -> Self {
        RawTechnicalFields {
            width: directory.width(),
            height: directory.height(),
            samples_per_pixel: directory.samples_per_pixel(),
            bit_depth: directory.raw_tag("BitsPerSample").cloned(),
            pixel_scale: directory.raw_tag("ModelPixelScale").cloned(),
            date_time: directory
                .raw_tag("DateTime")
                .and_then(TagValue::as_text)
                .map(str::to_string),
            has_geo_keys: directory.has_geo_keys(),
        }
    }

    pub fn bands(&self) -> u32 {
        band_count(self.samples_per_pixel)
    }

    pub fn bit_depth(&self) -> Option<u32> {
        bit_depth(self.bit_depth.as_ref())
    }

    pub fn resolution_meters_per_pixel(&self) -> Option<u32> {
        resolution(self.pixel_scale.as_ref())
    }

    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        self.date_time.as_deref().and_then(parse_capture_time)
    }
}

/// Band count; a stored SamplesPerPixel of 0 counts as one band
pub fn band_count(samples_per_pixel: u32) -> u32 {
    samples_per_pixel.max(1)
}

/// Bit depth from BitsPerSample: the scalar, or the first per-band value
pub fn bit_depth(bits_per_sample: Option<&TagValue>) -> Option<u32> {
    bits_per_sample?.as_u64().and_then(|v| u32::try_from(v).ok())
}

/// Ground resolution as the rounded mean of the X and Y pixel scale
pub fn resolution(pixel_scale: Option<&TagValue>) -> Option<u32> {
    let scale = match pixel_scale?.numbers()? {
        [sx, sy, ..] => (sx + sy) / 2.0,
        _ => return None,
    };

    let rounded = scale.round();
    if rounded.is_finite() && rounded >= 0.0 && rounded <= u32::MAX as f64 {
        Some(rounded as u32)
    } else {
        debug!("Pixel scale mean {} is not a usable resolution", scale);
        None
    }
}

/// Parses a TIFF DateTime (`YYYY:MM:DD HH:MM:SS`) as a UTC instant
///
/// ISO 8601 / RFC 3339 strings are accepted as well, since some writers
/// store those instead.
pub fn parse_capture_time(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    let normalized = match EXIF_DATE.as_ref() {
        Some(re) => re.replace(trimmed, "$1-$2-$3").into_owned(),
        None => trimmed.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });

    match naive {
        Some(naive) => Some(naive.and_utc()),
        None => {
            debug!("Unparseable DateTime: {:?}", raw);
            None
        }
    }
}

/// Coarse projection label
///
/// A GeoKey directory only earns the "Geographic" label when the box is
/// geographic too. Without a geographic box the label says so, whatever
/// the GeoKeys claim.
pub fn projection_label(has_geo_keys: bool, verdict: CoordinateSystemVerdict) -> Option<String> {
    match verdict {
        CoordinateSystemVerdict::Geographic if has_geo_keys => Some(GEOGRAPHIC_LABEL.to_string()),
        CoordinateSystemVerdict::Geographic => None,
        CoordinateSystemVerdict::Projected | CoordinateSystemVerdict::Absent => {
            Some(NON_GEOGRAPHIC_LABEL.to_string())
        }
    }
}
