//! TIFF/BigTIFF tag directory reader
//!
//! Reads the header and the IFD chain, resolving every tag value while the
//! source is open. Only the tag directories are decoded; pixel data is never
//! touched. Damage in the first IFD is fatal, damage further down the chain
//! ends the chain with a warning.

use std::collections::HashSet;
use std::io::{Cursor, SeekFrom};

use log::{debug, info, warn};

use crate::io::byte_order::ByteOrderHandler;
use crate::io::seekable::SeekableReader;
use crate::tiff::errors::{DecodeError, DecodeResult};
use crate::tiff::ifd::{IFD, IFDEntry};
use crate::tiff::types::TIFF;
use crate::tiff::validation;
use crate::utils::{format_utils, ifd_utils, tag_utils};

/// Upper bound on followed IFDs, guards against offset cycles
const MAX_IFDS: usize = 100;

/// Default upper bound on values resolved per tag
pub const DEFAULT_MAX_TAG_VALUES: u64 = 1 << 20;

/// Layout facts shared by every read within one file
struct Layout<'h> {
    handler: &'h dyn ByteOrderHandler,
    is_big_tiff: bool,
    file_size: u64,
}

/// Raw entry fields before the value is resolved
struct RawEntry {
    tag: u16,
    field_type: u16,
    count: u64,
    value_field: [u8; 8],
}

/// Reader for TIFF and BigTIFF tag directories
#[derive(Debug, Clone)]
pub struct TiffReader {
    /// Tags with more values than this are left unresolved
    max_tag_values: u64,
}

impl Default for TiffReader {
    fn default() -> Self {
        TiffReader::new()
    }
}

impl TiffReader {
    pub fn new() -> Self {
        TiffReader {
            max_tag_values: DEFAULT_MAX_TAG_VALUES,
        }
    }

    /// Sets the per-tag value limit
    pub fn with_max_tag_values(mut self, max_tag_values: u64) -> Self {
        self.max_tag_values = max_tag_values;
        self
    }

    /// Reads a TIFF file from the given reader
    ///
    /// 1. Detect byte order (little/big endian)
    /// 2. Check for TIFF or BigTIFF format
    /// 3. Read the IFD chain and resolve tag values
    /// 4. Validate the main IFD
    pub fn read(&self, reader: &mut dyn SeekableReader) -> DecodeResult<TIFF> {
        debug!("TiffReader::read starting");
        reader.seek(SeekFrom::Start(0))?;

        let (byte_order, handler) = format_utils::detect_byte_order(reader)?;
        let is_big_tiff = format_utils::detect_tiff_format(reader, handler.as_ref())?;

        let first_ifd_offset = ifd_utils::read_ifd_offset(reader, is_big_tiff, handler.as_ref())?;
        debug!("First IFD offset: {}", first_ifd_offset);

        let layout = Layout {
            handler: handler.as_ref(),
            is_big_tiff,
            file_size: validation::get_file_size(reader)?,
        };
        validation::validate_ifd_offset(first_ifd_offset, layout.file_size)?;

        let mut tiff = TIFF::new(is_big_tiff, byte_order);
        tiff.ifds = self.read_ifd_chain(reader, &layout, first_ifd_offset)?;

        let main_ifd = tiff.main_ifd().ok_or(DecodeError::NoImageDirectory)?;
        validation::validate_main_ifd(main_ifd)?;

        info!("Read {} IFDs from {} file", tiff.ifd_count(), if is_big_tiff { "BigTIFF" } else { "TIFF" });
        Ok(tiff)
    }

    /// Reads the chain of IFDs starting from the first offset
    fn read_ifd_chain(&self, reader: &mut dyn SeekableReader, layout: &Layout, first_ifd_offset: u64) -> DecodeResult<Vec<IFD>> {
        let mut ifds = Vec::new();
        let mut visited = HashSet::new();
        let mut ifd_offset = first_ifd_offset;

        while ifd_offset != 0 && ifds.len() < MAX_IFDS {
            if !visited.insert(ifd_offset) {
                warn!("IFD offset {} already visited, stopping IFD chain", ifd_offset);
                break;
            }

            let number = ifds.len();
            let (ifd, next_offset) = match self.read_ifd(reader, layout, ifd_offset, number) {
                Ok(result) => result,
                Err(e) if number == 0 => return Err(e),
                Err(e) => {
                    warn!("Error reading IFD #{}: {}, stopping IFD chain", number, e);
                    break;
                }
            };

            debug!("Read IFD #{} with {} entries, next offset {}", number, ifd.entry_count(), next_offset);
            ifds.push(ifd);

            if next_offset != 0 && validation::validate_ifd_offset(next_offset, layout.file_size).is_err() {
                warn!("Invalid next IFD offset: {}, stopping IFD chain", next_offset);
                break;
            }
            ifd_offset = next_offset;
        }

        Ok(ifds)
    }

    /// Reads one IFD and the offset of the next one
    fn read_ifd(&self, reader: &mut dyn SeekableReader, layout: &Layout, offset: u64, number: usize) -> DecodeResult<(IFD, u64)> {
        reader.seek(SeekFrom::Start(offset))?;

        let entry_count = ifd_utils::read_entry_count(reader, layout.is_big_tiff, layout.handler)?;
        validation::validate_data_range(
            offset,
            ifd_utils::calculate_ifd_size(entry_count, layout.is_big_tiff),
            layout.file_size,
            &format!("IFD #{} ({} entries)", number, entry_count),
        )?;

        let mut raw_entries = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            raw_entries.push(self.read_raw_entry(reader, layout)?);
        }
        let next_offset = ifd_utils::read_ifd_offset(reader, layout.is_big_tiff, layout.handler)?;

        let mut ifd = IFD::new(number, offset);
        for raw_entry in raw_entries {
            ifd.add_entry(self.resolve_entry(reader, layout, raw_entry)?);
        }

        Ok((ifd, next_offset))
    }

    fn read_raw_entry(&self, reader: &mut dyn SeekableReader, layout: &Layout) -> DecodeResult<RawEntry> {
        let tag = layout.handler.read_u16(reader)?;
        let field_type = layout.handler.read_u16(reader)?;
        let count = if layout.is_big_tiff {
            layout.handler.read_u64(reader)?
        } else {
            layout.handler.read_u32(reader)? as u64
        };

        let mut value_field = [0u8; 8];
        reader.read_exact(&mut value_field[..ifd_utils::value_field_size(layout.is_big_tiff)])?;

        Ok(RawEntry { tag, field_type, count, value_field })
    }

    /// Resolves an entry's value, inline or at its offset
    fn resolve_entry(&self, reader: &mut dyn SeekableReader, layout: &Layout, raw_entry: RawEntry) -> DecodeResult<IFDEntry> {
        let field_size = ifd_utils::value_field_size(layout.is_big_tiff);
        let value_offset = ifd_utils::read_ifd_offset(
            &mut Cursor::new(&raw_entry.value_field[..field_size]),
            layout.is_big_tiff,
            layout.handler,
        )?;
        let tag_name = tag_utils::get_tag_name(raw_entry.tag);

        let value = match tag_utils::get_data_size(raw_entry.field_type, raw_entry.count) {
            None => {
                debug!("Tag {} ({}) has unknown field type {}, leaving unresolved", raw_entry.tag, tag_name, raw_entry.field_type);
                None
            },
            Some(_) if raw_entry.count > self.max_tag_values => {
                debug!("Tag {} ({}) has {} values, over the limit of {}", raw_entry.tag, tag_name, raw_entry.count, self.max_tag_values);
                None
            },
            Some(size) if tag_utils::is_value_inline(size, layout.is_big_tiff) => {
                let mut inline = Cursor::new(&raw_entry.value_field[..field_size]);
                Some(tag_utils::read_tag_value(&mut inline, raw_entry.field_type, raw_entry.count, layout.handler)?)
            },
            Some(size) => {
                validation::validate_data_range(value_offset, size, layout.file_size, &format!("tag {} ({})", raw_entry.tag, tag_name))?;
                reader.seek(SeekFrom::Start(value_offset))?;
                Some(tag_utils::read_tag_value(reader, raw_entry.field_type, raw_entry.count, layout.handler)?)
            },
        };

        Ok(IFDEntry::new(raw_entry.tag, raw_entry.field_type, raw_entry.count, value_offset, value))
    }
}

