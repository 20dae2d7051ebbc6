//! Core TIFF data structures

use std::fmt;

use crate::io::byte_order::ByteOrder;
use crate::tiff::ifd::IFD;

/// A resolved tag value
///
/// The decoder may report a tag as a single number or as an array of
/// numbers (e.g. `BitsPerSample` is one value per band). Callers resolve the
/// shape once instead of re-checking it ad hoc.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// Numeric tag with a count of one
    Scalar(f64),
    /// Numeric tag with a count other than one
    Array(Vec<f64>),
    /// ASCII tag, trailing NULs removed
    Text(String),
}

impl TagValue {
    /// First numeric value: the scalar itself or the first array element
    pub fn first_number(&self) -> Option<f64> {
        match self {
            TagValue::Scalar(v) => Some(*v),
            TagValue::Array(values) => values.first().copied(),
            TagValue::Text(_) => None,
        }
    }

    /// All numeric values; a scalar is a one-element slice
    pub fn numbers(&self) -> Option<&[f64]> {
        match self {
            TagValue::Scalar(v) => Some(std::slice::from_ref(v)),
            TagValue::Array(values) => Some(values),
            TagValue::Text(_) => None,
        }
    }

    /// The text of an ASCII tag
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// First value as an unsigned integer, if it is one
    pub fn as_u64(&self) -> Option<u64> {
        self.first_number()
            .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
            .map(|v| v as u64)
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Scalar(v) => write!(f, "{}", v),
            TagValue::Array(values) if values.len() > 8 => {
                write!(f, "[{} values]", values.len())
            }
            TagValue::Array(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            TagValue::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// A decoded TIFF file: its Image File Directories and header facts
#[derive(Debug)]
pub struct TIFF {
    /// Image File Directories in file order
    pub ifds: Vec<IFD>,
    /// Whether this is a BigTIFF file
    pub is_big_tiff: bool,
    /// Byte order declared in the header
    pub byte_order: ByteOrder,
}

impl TIFF {
    pub fn new(is_big_tiff: bool, byte_order: ByteOrder) -> Self {
        TIFF {
            ifds: Vec::new(),
            is_big_tiff,
            byte_order,
        }
    }

    /// Returns the main (first) IFD if available
    pub fn main_ifd(&self) -> Option<&IFD> {
        self.ifds.first()
    }

    pub fn ifd_count(&self) -> usize {
        self.ifds.len()
    }
}

impl fmt::Display for TIFF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TIFF File:")?;
        writeln!(f, "  Format: {}", if self.is_big_tiff { "BigTIFF" } else { "TIFF" })?;
        writeln!(f, "  Byte order: {}", self.byte_order.name())?;
        writeln!(f, "  Number of IFDs: {}", self.ifds.len())?;

        if let Some(ifd) = self.main_ifd() {
            write!(f, "{}", ifd)?;
        }

        Ok(())
    }
}
