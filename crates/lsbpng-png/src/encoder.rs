/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::debug;
use lsbpng_core::bytestream::ZByteWriter;

use crate::constants::PNG_SIGNATURE;
use crate::enums::PngColor;
use crate::headers::writers::{write_header_fn, write_idat, write_iend, write_ihdr};

/// A minimal png writer
///
/// Emits the signature, an IHDR chunk, a single IDAT chunk holding
/// already compressed image data and an empty IEND chunk.
///
/// The image data is expected to be a zlib stream of unfiltered
/// (filter type 0) 8 bit scanlines, nothing here inspects it.
pub struct PngEncoder<'a> {
    pub(crate) width:  u32,
    pub(crate) height: u32,
    pub(crate) color:  PngColor,
    pub(crate) idat:   &'a [u8]
}

impl<'a> PngEncoder<'a> {
    pub fn new(width: u32, height: u32, color: PngColor, idat: &'a [u8]) -> PngEncoder<'a> {
        PngEncoder {
            width,
            height,
            color,
            idat
        }
    }

    /// Encode the container into `sink`, returning the number of
    /// bytes appended
    pub fn encode_into(&self, sink: &mut Vec<u8>) -> usize {
        let mut writer = ZByteWriter::new(sink);
        // write signature
        writer.write_u64_be(PNG_SIGNATURE);

        write_header_fn(self, &mut writer, b"IHDR", write_ihdr);
        write_header_fn(self, &mut writer, b"IDAT", write_idat);
        write_header_fn(self, &mut writer, b"IEND", write_iend);

        debug!("Wrote {} byte png", writer.bytes_written());

        writer.bytes_written()
    }

    pub fn encode(&self) -> Vec<u8> {
        // signature + 3 chunk headers + ihdr
        let mut sink = Vec::with_capacity(8 + 36 + 13 + self.idat.len());
        self.encode_into(&mut sink);
        sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::calc_crc;
    use crate::PngDecoder;

    #[test]
    fn test_chunk_layout() {
        let idat = [1, 2, 3, 4, 5];
        let out = PngEncoder::new(7, 3, PngColor::RGBA, &idat).encode();

        assert_eq!(&out[0..8], &PNG_SIGNATURE.to_be_bytes());
        // IHDR
        assert_eq!(&out[8..16], b"\0\0\0\x0dIHDR");
        assert_eq!(&out[16..29], &[0, 0, 0, 7, 0, 0, 0, 3, 8, 6, 0, 0, 0]);
        // IDAT
        assert_eq!(&out[33..41], b"\0\0\0\x05IDAT");
        assert_eq!(&out[41..46], &idat);
        // IEND
        assert_eq!(&out[50..], &[0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]);
    }

    #[test]
    fn test_every_crc_verifies() {
        let idat = vec![0xAB; 300];
        let out = PngEncoder::new(10, 10, PngColor::RGB, &idat).encode();

        let mut position = 8;
        let mut chunks = 0;

        while position < out.len() {
            let length = u32::from_be_bytes(out[position..position + 4].try_into().unwrap()) as usize;
            let type_and_data = &out[position + 4..position + 8 + length];
            let stored = u32::from_be_bytes(
                out[position + 8 + length..position + 12 + length]
                    .try_into()
                    .unwrap()
            );
            assert_eq!(calc_crc(type_and_data), stored);

            position += 12 + length;
            chunks += 1;
        }
        assert_eq!(chunks, 3);
        assert_eq!(position, out.len());
    }

    #[test]
    fn test_simple_write_read() {
        let idat = vec![100; 40];
        let out = PngEncoder::new(40, 10, PngColor::RGB, &idat).encode();

        let container = PngDecoder::new(&out).decode_container().unwrap();

        assert_eq!(container.info.width, 40);
        assert_eq!(container.info.height, 10);
        assert_eq!(container.info.color, PngColor::RGB);
        assert_eq!(container.idat, idat);
    }
}
