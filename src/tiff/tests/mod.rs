//! Decoder tests over hand-built TIFF buffers

mod reader_tests;
