//! TIFF/GeoTIFF tag and GeoKey name tables
//!
//! Names are defined in `geotiff_tags.toml` at the crate root, embedded at
//! compile time and parsed once on first use.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::warn;

use crate::tiff::errors::{DecodeError, DecodeResult};

lazy_static! {
    static ref GEOTIFF_DEFINITIONS: GeoTiffDefinitions = {
        let content = include_str!("../../geotiff_tags.toml");
        GeoTiffDefinitions::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse GeoTIFF tag definitions: {}", e);
            GeoTiffDefinitions::default()
        })
    };
}

/// Tag and key name tables
#[derive(Debug, Default)]
pub struct GeoTiffDefinitions {
    /// Tag id -> tag name
    pub tag_names: HashMap<u16, String>,
    /// Tag name -> tag id
    pub tag_ids: HashMap<String, u16>,
    /// GeoKey id -> key name
    pub key_names: HashMap<u16, String>,
    /// GTModelTypeGeoKey value -> model type name
    pub model_type_names: HashMap<u16, String>,
}

impl GeoTiffDefinitions {
    /// Parses the definitions from TOML text
    pub fn from_str(content: &str) -> DecodeResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| DecodeError::InvalidArgument(format!("Failed to parse TOML: {}", e)))?;

        let mut defs = GeoTiffDefinitions {
            tag_names: parse_id_table(&toml_value, "tag_ids"),
            key_names: parse_id_table(&toml_value, "key_ids"),
            model_type_names: parse_id_table(&toml_value, "model_types"),
            ..Default::default()
        };

        defs.tag_ids = defs.tag_names.iter()
            .map(|(id, name)| (name.clone(), *id))
            .collect();

        Ok(defs)
    }
}

fn parse_id_table(root: &toml::Value, section: &str) -> HashMap<u16, String> {
    let mut names = HashMap::new();

    if let Some(table) = root.get(section).and_then(|v| v.as_table()) {
        for (k, v) in table {
            if let (Ok(id), Some(name)) = (k.parse::<u16>(), v.as_str()) {
                names.insert(id, name.to_string());
            }
        }
    }

    names
}

/// Name of a TIFF tag, or "Unknown"
pub fn get_tag_name(tag: u16) -> &'static str {
    GEOTIFF_DEFINITIONS.tag_names.get(&tag).map(String::as_str).unwrap_or("Unknown")
}

/// Tag id for a tag name such as "BitsPerSample"
pub fn get_tag_id(name: &str) -> Option<u16> {
    GEOTIFF_DEFINITIONS.tag_ids.get(name).copied()
}

/// Name of a GeoKey, or "Unknown"
pub fn get_key_name(key_id: u16) -> &'static str {
    GEOTIFF_DEFINITIONS.key_names.get(&key_id).map(String::as_str).unwrap_or("Unknown")
}

/// Name of a GTModelTypeGeoKey value, or "Unknown"
pub fn get_model_type_name(code: u16) -> &'static str {
    GEOTIFF_DEFINITIONS.model_type_names.get(&code).map(String::as_str).unwrap_or("Unknown")
}

/// Whether a tag belongs to the GeoTIFF extension
pub fn is_geotiff_tag(tag: u16) -> bool {
    matches!(tag, 33550 | 33922 | 34264 | 34735 | 34736 | 34737)
}
