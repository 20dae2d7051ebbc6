//! String utility functions

/// Trims trailing NUL bytes from an ASCII tag buffer
///
/// TIFF ASCII values are NUL-terminated and some writers pad them further.
pub fn trim_trailing_nulls(buffer: &mut Vec<u8>) {
    while buffer.last() == Some(&0) {
        buffer.pop();
    }
}
