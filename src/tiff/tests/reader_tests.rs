//! Tests for the tag directory reader

use std::io::Cursor;

use crate::io::byte_order::ByteOrder;
use crate::tiff::constants::tags;
use crate::tiff::errors::{DecodeError, DecodeResult};
use crate::tiff::reader::TiffReader;
use crate::tiff::types::{TagValue, TIFF};

use super::test_utils::TiffFixture;

fn read(bytes: Vec<u8>) -> DecodeResult<TIFF> {
    TiffReader::new().read(&mut Cursor::new(bytes))
}

fn sample(fixture: TiffFixture) -> TiffFixture {
    fixture
        .long(tags::IMAGE_WIDTH, &[800])
        .long(tags::IMAGE_LENGTH, &[600])
        .short(tags::BITS_PER_SAMPLE, &[16, 16, 16])
        .short(tags::SAMPLES_PER_PIXEL, &[3])
        .ascii(tags::DATE_TIME, "2023:06:15 10:30:00")
        .double(tags::MODEL_PIXEL_SCALE, &[10.0, 10.0, 0.0])
}

#[test]
fn test_read_little_endian_tiff() {
    let tiff = read(sample(TiffFixture::new()).build()).unwrap();

    assert!(!tiff.is_big_tiff);
    assert_eq!(tiff.byte_order, ByteOrder::LittleEndian);
    assert_eq!(tiff.ifd_count(), 1);

    let ifd = tiff.main_ifd().unwrap();
    assert_eq!(ifd.get_dimensions(), Some((800, 600)));
    assert_eq!(ifd.get_samples_per_pixel(), 3);
    assert_eq!(ifd.get_value(tags::BITS_PER_SAMPLE), Some(&TagValue::Array(vec![16.0, 16.0, 16.0])));
    assert_eq!(ifd.get_value(tags::DATE_TIME), Some(&TagValue::Text("2023:06:15 10:30:00".to_string())));
    assert_eq!(ifd.get_value(tags::MODEL_PIXEL_SCALE), Some(&TagValue::Array(vec![10.0, 10.0, 0.0])));
}

#[test]
fn test_big_endian_and_bigtiff_decode_identically() {
    let reference = read(sample(TiffFixture::new()).build()).unwrap();
    let reference_ifd = reference.main_ifd().unwrap();

    for fixture in [
        sample(TiffFixture::new().big_endian()),
        sample(TiffFixture::new().big_tiff()),
        sample(TiffFixture::new().big_tiff().big_endian()),
    ] {
        let tiff = read(fixture.build()).unwrap();
        let ifd = tiff.main_ifd().unwrap();

        assert_eq!(ifd.entry_count(), reference_ifd.entry_count());
        for entry in &reference_ifd.entries {
            assert_eq!(ifd.get_value(entry.tag), entry.value.as_ref(), "tag {}", entry.tag);
        }
    }
}

#[test]
fn test_bigtiff_flags() {
    let tiff = read(sample(TiffFixture::new().big_tiff().big_endian()).build()).unwrap();
    assert!(tiff.is_big_tiff);
    assert_eq!(tiff.byte_order, ByteOrder::BigEndian);
}

#[test]
fn test_invalid_byte_order() {
    let mut bytes = sample(TiffFixture::new()).build();
    bytes[0] = b'X';
    bytes[1] = b'X';
    assert!(matches!(read(bytes), Err(DecodeError::InvalidByteOrder(_))));
}

#[test]
fn test_unsupported_version() {
    let mut bytes = sample(TiffFixture::new()).build();
    bytes[2] = 44;
    assert!(matches!(read(bytes), Err(DecodeError::UnsupportedVersion(44))));
}

#[test]
fn test_invalid_bigtiff_header() {
    let mut bytes = sample(TiffFixture::new().big_tiff()).build();
    bytes[4] = 4;
    assert!(matches!(read(bytes), Err(DecodeError::InvalidBigTiffHeader)));
}

#[test]
fn test_first_ifd_offset_out_of_range() {
    let mut bytes = sample(TiffFixture::new()).build();
    bytes[4..8].copy_from_slice(&100_000u32.to_le_bytes());
    assert!(matches!(read(bytes), Err(DecodeError::InvalidIfdOffset { offset: 100_000, .. })));
}

#[test]
fn test_truncated_main_ifd() {
    let mut bytes = sample(TiffFixture::new()).build();
    bytes.truncate(20);
    assert!(matches!(read(bytes), Err(DecodeError::Truncated(_))));
}

#[test]
fn test_truncated_tag_data() {
    let mut bytes = sample(TiffFixture::new()).build();
    let len = bytes.len();
    bytes.truncate(len - 8);
    assert!(matches!(read(bytes), Err(DecodeError::Truncated(_))));
}

#[test]
fn test_empty_and_tiny_sources() {
    assert!(read(Vec::new()).is_err());
    assert!(read(b"II".to_vec()).is_err());
    assert!(read(b"II*\0".to_vec()).is_err());
}

#[test]
fn test_missing_dimensions() {
    let bytes = TiffFixture::new().short(tags::BITS_PER_SAMPLE, &[8]).build();
    assert!(matches!(read(bytes), Err(DecodeError::MissingDimensions)));
}

#[test]
fn test_unregistered_compression() {
    let bytes = TiffFixture::with_dimensions(4, 4).short(tags::COMPRESSION, &[4242]).build();
    assert!(matches!(read(bytes), Err(DecodeError::UnsupportedCompression(4242))));

    let bytes = TiffFixture::with_dimensions(4, 4).short(tags::COMPRESSION, &[8]).build();
    assert!(read(bytes).is_ok());
}

#[test]
fn test_codec_registry_compressions_are_accepted() {
    for code in [50000, 50001, 50002, 34712, 34887, 34892, 52546] {
        let bytes = TiffFixture::with_dimensions(4, 4).short(tags::COMPRESSION, &[code]).build();
        assert!(read(bytes).is_ok(), "compression {} rejected", code);
    }

    let bytes = TiffFixture::with_dimensions(4, 4).short(tags::COMPRESSION, &[14]).build();
    assert!(matches!(read(bytes), Err(DecodeError::UnsupportedCompression(14))));
}

#[test]
fn test_follows_ifd_chain() {
    let tiff = read(sample(TiffFixture::new()).with_overview(400, 300).build()).unwrap();
    assert_eq!(tiff.ifd_count(), 2);
    assert_eq!(tiff.ifds[1].get_dimensions(), Some((400, 300)));
    assert_eq!(tiff.main_ifd().unwrap().get_dimensions(), Some((800, 600)));
}

#[test]
fn test_damaged_later_ifd_keeps_main_image() {
    let mut bytes = sample(TiffFixture::new()).with_overview(400, 300).build();
    let len = bytes.len();
    bytes.truncate(len - 4);

    let tiff = read(bytes).unwrap();
    assert_eq!(tiff.ifd_count(), 1);
}

#[test]
fn test_invalid_next_offset_stops_chain() {
    let tiff = read(sample(TiffFixture::new()).next_ifd_offset(1_000_000).build()).unwrap();
    assert_eq!(tiff.ifd_count(), 1);
}

#[test]
fn test_ifd_cycle_is_broken() {
    let tiff = read(sample(TiffFixture::new()).next_ifd_offset(8).build()).unwrap();
    assert_eq!(tiff.ifd_count(), 1);
}

#[test]
fn test_tag_value_limit() {
    let bytes = sample(TiffFixture::new()).build();
    let tiff = TiffReader::new().with_max_tag_values(2).read(&mut Cursor::new(bytes)).unwrap();
    let ifd = tiff.main_ifd().unwrap();

    assert!(ifd.has_tag(tags::BITS_PER_SAMPLE));
    assert_eq!(ifd.get_value(tags::BITS_PER_SAMPLE), None);
    assert_eq!(ifd.get_dimensions(), Some((800, 600)));
}
