//! GeoKey directory decoding
//!
//! The GeoKeyDirectory tag is an array of SHORTs: a four-value header
//! (version, revision, minor revision, key count) followed by four values
//! per key (key id, tag location, count, value or index). Keys with a tag
//! location of 0 carry their value inline; others point into the
//! GeoDoubleParams or GeoAsciiParams tags.

use std::fmt;

use log::{debug, warn};

use crate::tiff::constants::{geo_keys, tags};
use crate::tiff::geotags::{get_key_name, get_model_type_name};
use crate::tiff::ifd::IFD;
use crate::tiff::types::TagValue;

/// One GeoKey directory entry
#[derive(Debug, Clone, PartialEq)]
pub struct GeoKeyEntry {
    pub key_id: u16,
    /// 0 for inline values, otherwise the tag holding the value
    pub tiff_tag_location: u16,
    pub count: u16,
    /// Inline value, or index into the referenced tag
    pub value_offset: u16,
    /// Value resolved from the referenced params tag, if any
    pub resolved: Option<String>,
}

impl GeoKeyEntry {
    pub fn new(key_id: u16, tiff_tag_location: u16, count: u16, value_offset: u16) -> Self {
        GeoKeyEntry {
            key_id,
            tiff_tag_location,
            count,
            value_offset,
            resolved: None,
        }
    }

    pub fn name(&self) -> &'static str {
        get_key_name(self.key_id)
    }

    /// The key's value for display
    pub fn display_value(&self) -> String {
        if let Some(resolved) = &self.resolved {
            return resolved.clone();
        }

        match (self.tiff_tag_location, self.key_id) {
            (0, geo_keys::MODEL_TYPE) => {
                format!("{} ({})", self.value_offset, get_model_type_name(self.value_offset))
            },
            (0, geo_keys::GEOGRAPHIC_TYPE) | (0, geo_keys::PROJECTED_CS_TYPE) => {
                format!("EPSG:{}", self.value_offset)
            },
            (0, _) => self.value_offset.to_string(),
            (location, _) => format!("<tag {} index {}>", location, self.value_offset),
        }
    }
}

impl fmt::Display for GeoKeyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) = {}", self.name(), self.key_id, self.display_value())
    }
}

/// Decodes the GeoKey directory of an IFD
///
/// Returns an empty list when the IFD has no directory. A malformed
/// directory yields the keys that could be decoded.
pub fn parse_geo_key_directory(ifd: &IFD) -> Vec<GeoKeyEntry> {
    let values = match ifd.get_value(tags::GEO_KEY_DIRECTORY).and_then(TagValue::numbers) {
        Some(values) => values,
        None => return Vec::new(),
    };

    if values.len() < 4 {
        warn!("GeoKey directory has {} values, header needs 4", values.len());
        return Vec::new();
    }

    let as_u16 = |v: f64| v as u16;
    let num_keys = as_u16(values[3]) as usize;
    debug!("GeoKey directory: version={}, revision={}.{}, keys={}",
           as_u16(values[0]), as_u16(values[1]), as_u16(values[2]), num_keys);

    let available = (values.len() - 4) / 4;
    if available < num_keys {
        warn!("GeoKey directory declares {} keys but holds {}", num_keys, available);
    }

    values[4..]
        .chunks_exact(4)
        .take(num_keys)
        .map(|key| {
            let mut entry = GeoKeyEntry::new(as_u16(key[0]), as_u16(key[1]), as_u16(key[2]), as_u16(key[3]));
            entry.resolved = resolve_param(ifd, &entry);
            entry
        })
        .collect()
}

fn resolve_param(ifd: &IFD, entry: &GeoKeyEntry) -> Option<String> {
    let start = entry.value_offset as usize;
    let count = entry.count as usize;

    match entry.tiff_tag_location {
        tags::GEO_DOUBLE_PARAMS => {
            let doubles = ifd.get_value(tags::GEO_DOUBLE_PARAMS)?.numbers()?;
            let slice = doubles.get(start..start.checked_add(count)?)?;
            let parts: Vec<String> = slice.iter().map(|v| v.to_string()).collect();
            Some(parts.join(", "))
        },
        tags::GEO_ASCII_PARAMS => {
            let text = ifd.get_value(tags::GEO_ASCII_PARAMS)?.as_text()?;
            let slice = text.get(start..start.checked_add(count)?.min(text.len()))?;
            Some(slice.trim_end_matches(['|', '\0']).to_string())
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiff::ifd::IFDEntry;

    fn ifd_with(values: Vec<(u16, TagValue)>) -> IFD {
        let mut ifd = IFD::new(0, 8);
        for (tag, value) in values {
            ifd.add_entry(IFDEntry::new(tag, 3, 0, 0, Some(value)));
        }
        ifd
    }

    #[test]
    fn test_parse_wgs84_directory() {
        let ifd = ifd_with(vec![
            (tags::GEO_KEY_DIRECTORY, TagValue::Array(vec![
                1.0, 1.0, 0.0, 3.0,
                1024.0, 0.0, 1.0, 2.0,
                2048.0, 0.0, 1.0, 4326.0,
                2049.0, 34737.0, 7.0, 0.0,
            ])),
            (tags::GEO_ASCII_PARAMS, TagValue::Text("WGS 84|".to_string())),
        ]);

        let keys = parse_geo_key_directory(&ifd);
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[0].to_string(), "GTModelTypeGeoKey (1024) = 2 (Geographic)");
        assert_eq!(keys[1].display_value(), "EPSG:4326");
        assert_eq!(keys[2].display_value(), "WGS 84");
    }

    #[test]
    fn test_missing_or_short_directory() {
        assert!(parse_geo_key_directory(&IFD::new(0, 8)).is_empty());

        let ifd = ifd_with(vec![(tags::GEO_KEY_DIRECTORY, TagValue::Array(vec![1.0, 1.0]))]);
        assert!(parse_geo_key_directory(&ifd).is_empty());
    }

    #[test]
    fn test_directory_declaring_more_keys_than_present() {
        let ifd = ifd_with(vec![(tags::GEO_KEY_DIRECTORY, TagValue::Array(vec![
            1.0, 1.0, 0.0, 5.0,
            3072.0, 0.0, 1.0, 32636.0,
        ]))]);

        let keys = parse_geo_key_directory(&ifd);
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].display_value(), "EPSG:32636");
    }
}
