//! Image File Directory (IFD) structures
//!
//! An IFD is the tag directory of one image in a TIFF file. Entries are
//! stored with their raw header fields plus the value the reader resolved
//! for them, so lookups never go back to the source.

use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::tiff::constants::tags;
use crate::tiff::types::TagValue;
use crate::utils::tag_utils;

/// Represents an Image File Directory (IFD) in a TIFF file
#[derive(Debug, Clone)]
pub struct IFD {
    /// Entries in file order
    pub entries: Vec<IFDEntry>,
    /// IFD number (0-based)
    pub number: usize,
    /// Offset to this IFD in the file
    pub offset: u64,
    /// Index into `entries` by tag id
    tag_map: HashMap<u16, usize>,
}

/// One tag entry of an IFD
#[derive(Debug, Clone)]
pub struct IFDEntry {
    /// TIFF tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u64,
    /// Value field interpreted as an offset (meaningless for inline values)
    pub value_offset: u64,
    /// Resolved value; `None` for unknown field types or oversized arrays
    pub value: Option<TagValue>,
}

impl IFDEntry {
    pub fn new(tag: u16, field_type: u16, count: u64, value_offset: u64, value: Option<TagValue>) -> Self {
        Self {
            tag,
            field_type,
            count,
            value_offset,
            value,
        }
    }

    /// Returns a human-readable description of this entry
    pub fn description(&self) -> String {
        let value_display = match &self.value {
            Some(value) => value.to_string(),
            None => format!("<unresolved, offset {}>", self.value_offset),
        };

        format!("Tag: {} ({}), Type: {} ({}), Count: {}, Value: {}",
                self.tag, tag_utils::get_tag_name(self.tag),
                self.field_type, tag_utils::get_field_type_name(self.field_type),
                self.count, value_display)
    }
}

impl IFD {
    /// Creates an empty IFD
    pub fn new(number: usize, offset: u64) -> Self {
        Self {
            entries: Vec::new(),
            number,
            offset,
            tag_map: HashMap::new(),
        }
    }

    /// Adds an entry; a repeated tag replaces the earlier lookup target
    pub fn add_entry(&mut self, entry: IFDEntry) {
        trace!("Adding entry to IFD #{}: {}", self.number, entry.description());

        self.tag_map.insert(entry.tag, self.entries.len());
        self.entries.push(entry);
    }

    pub fn has_tag(&self, tag: u16) -> bool {
        self.tag_map.contains_key(&tag)
    }

    /// Gets an IFD entry by tag
    pub fn get_entry(&self, tag: u16) -> Option<&IFDEntry> {
        self.tag_map.get(&tag).map(|&index| &self.entries[index])
    }

    /// Gets the resolved value of a tag
    pub fn get_value(&self, tag: u16) -> Option<&TagValue> {
        let value = self.get_entry(tag).and_then(|entry| entry.value.as_ref());

        if value.is_none() {
            trace!("Tag {} ({}) has no value in IFD #{}", tag, tag_utils::get_tag_name(tag), self.number);
        }

        value
    }

    /// Gets a tag value as an unsigned integer
    pub fn get_u64(&self, tag: u16) -> Option<u64> {
        self.get_value(tag).and_then(TagValue::as_u64)
    }

    /// Width and height, if both tags are present
    pub fn get_dimensions(&self) -> Option<(u64, u64)> {
        let width = self.get_u64(tags::IMAGE_WIDTH)?;
        let height = self.get_u64(tags::IMAGE_LENGTH)?;
        Some((width, height))
    }

    /// Number of samples per pixel (TIFF default is 1)
    pub fn get_samples_per_pixel(&self) -> u64 {
        self.get_u64(tags::SAMPLES_PER_PIXEL).unwrap_or(1)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for IFD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IFD #{} (offset: {})", self.number, self.offset)?;
        writeln!(f, "  Number of entries: {}", self.entries.len())?;

        if let Some((width, height)) = self.get_dimensions() {
            writeln!(f, "  Dimensions: {}x{}", width, height)?;
        }

        writeln!(f, "  Samples per pixel: {}", self.get_samples_per_pixel())?;

        writeln!(f, "  Tags:")?;
        for entry in &self.entries {
            writeln!(f, "    {}", entry.description())?;
        }

        Ok(())
    }
}
