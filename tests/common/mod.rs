//! Shared GeoTIFF fixtures for integration tests

#![allow(dead_code)]

use byteorder::{BigEndian, ByteOrder, LittleEndian};

const SHORT: u16 = 3;
const LONG: u16 = 4;
const ASCII: u16 = 2;
const DOUBLE: u16 = 12;

enum Values {
    Shorts(Vec<u16>),
    Longs(Vec<u32>),
    Doubles(Vec<f64>),
    Ascii(String),
}

/// Classic TIFF writer covering the tags the extractor reads
pub struct GeoTiffBuilder {
    big_endian: bool,
    entries: Vec<(u16, Values)>,
}

impl GeoTiffBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        GeoTiffBuilder {
            big_endian: false,
            entries: vec![(256, Values::Longs(vec![width])), (257, Values::Longs(vec![height]))],
        }
    }

    pub fn big_endian(mut self) -> Self {
        self.big_endian = true;
        self
    }

    pub fn shorts(mut self, tag: u16, values: &[u16]) -> Self {
        self.entries.push((tag, Values::Shorts(values.to_vec())));
        self
    }

    pub fn doubles(mut self, tag: u16, values: &[f64]) -> Self {
        self.entries.push((tag, Values::Doubles(values.to_vec())));
        self
    }

    pub fn ascii(mut self, tag: u16, text: &str) -> Self {
        self.entries.push((tag, Values::Ascii(text.to_string())));
        self
    }

    /// Georeferencing by tiepoint at pixel (0, 0) plus pixel scale
    pub fn tiepoint(self, x: f64, y: f64, scale_x: f64, scale_y: f64) -> Self {
        self.doubles(33550, &[scale_x, scale_y, 0.0])
            .doubles(33922, &[0.0, 0.0, 0.0, x, y, 0.0])
    }

    pub fn build(mut self) -> Vec<u8> {
        self.entries.sort_by_key(|(tag, _)| *tag);

        let mut out = Vec::new();
        out.extend_from_slice(if self.big_endian { b"MM" } else { b"II" });
        self.push_u16(&mut out, 42);
        self.push_u32(&mut out, 8);

        let ifd_size = 2 + 12 * self.entries.len() + 4;
        let mut data_offset = 8 + ifd_size;
        let mut data = Vec::new();

        self.push_u16(&mut out, self.entries.len() as u16);
        for (tag, values) in &self.entries {
            let (field_type, count, bytes) = self.encode(values);
            self.push_u16(&mut out, *tag);
            self.push_u16(&mut out, field_type);
            self.push_u32(&mut out, count);

            if bytes.len() <= 4 {
                let mut field = bytes;
                field.resize(4, 0);
                out.extend_from_slice(&field);
            } else {
                self.push_u32(&mut out, data_offset as u32);
                data_offset += bytes.len();
                data.extend_from_slice(&bytes);
            }
        }
        self.push_u32(&mut out, 0);
        out.extend_from_slice(&data);
        out
    }

    fn encode(&self, values: &Values) -> (u16, u32, Vec<u8>) {
        let mut bytes = Vec::new();
        match values {
            Values::Shorts(v) => {
                v.iter().for_each(|x| self.push_u16(&mut bytes, *x));
                (SHORT, v.len() as u32, bytes)
            }
            Values::Longs(v) => {
                v.iter().for_each(|x| self.push_u32(&mut bytes, *x));
                (LONG, v.len() as u32, bytes)
            }
            Values::Doubles(v) => {
                for x in v {
                    let mut buf = [0u8; 8];
                    if self.big_endian {
                        BigEndian::write_f64(&mut buf, *x);
                    } else {
                        LittleEndian::write_f64(&mut buf, *x);
                    }
                    bytes.extend_from_slice(&buf);
                }
                (DOUBLE, v.len() as u32, bytes)
            }
            Values::Ascii(text) => {
                bytes.extend_from_slice(text.as_bytes());
                bytes.push(0);
                (ASCII, bytes.len() as u32, bytes)
            }
        }
    }

    fn push_u16(&self, out: &mut Vec<u8>, value: u16) {
        let mut buf = [0u8; 2];
        if self.big_endian {
            BigEndian::write_u16(&mut buf, value);
        } else {
            LittleEndian::write_u16(&mut buf, value);
        }
        out.extend_from_slice(&buf);
    }

    fn push_u32(&self, out: &mut Vec<u8>, value: u32) {
        let mut buf = [0u8; 4];
        if self.big_endian {
            BigEndian::write_u32(&mut buf, value);
        } else {
            LittleEndian::write_u32(&mut buf, value);
        }
        out.extend_from_slice(&buf);
    }
}

/// Sentinel-2 style scene over Cyprus in WGS84
pub fn sentinel_scene() -> GeoTiffBuilder {
    GeoTiffBuilder::new(4, 4)
        .tiepoint(32.6, 35.0, 0.125, 0.125)
        .shorts(258, &[16, 16, 16])
        .shorts(277, &[3])
        .ascii(306, "2023:06:15 10:30:00")
        .shorts(34735, &[1, 1, 0, 2, 1024, 0, 1, 2, 2048, 0, 1, 4326])
}

/// UTM zone 36N scene, 10 m pixels
pub fn utm_scene() -> GeoTiffBuilder {
    GeoTiffBuilder::new(1000, 1000)
        .tiepoint(500_000.0, 4_010_000.0, 10.0, 10.0)
        .shorts(258, &[8])
        .shorts(34735, &[1, 1, 0, 2, 1024, 0, 1, 1, 3072, 0, 1, 32636])
}
