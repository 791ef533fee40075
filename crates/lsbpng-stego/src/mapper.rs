/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Mapping between global bit indices and channel bytes
//!
//! Bit `n` of the embedded stream lives in the least significant bit of
//! the `n`th channel byte of the image, counting row by row and skipping
//! the filter byte that starts every scanline.
//!
//! For a row of `width * components` channel bytes, the channel byte for
//! bit `n` is at
//!
//! ```text
//! row    = n / (width * components)
//! offset = n % (width * components)
//! index  = row * stride + 1 + offset
//! ```

use crate::errors::StegoErrors;

/// Layout of an unfiltered image buffer
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Geometry {
    pub width:      usize,
    pub height:     usize,
    /// Bytes per pixel, 3 or 4
    pub components: usize
}

impl Geometry {
    pub const fn new(width: usize, height: usize, components: usize) -> Geometry {
        Geometry {
            width,
            height,
            components
        }
    }

    /// Channel bytes in a row, i.e the row minus its filter byte
    pub const fn row_channels(&self) -> usize {
        self.width * self.components
    }

    /// Bytes in a row including the filter byte
    pub const fn stride(&self) -> usize {
        self.row_channels() + 1
    }

    /// Number of bits the image can hold, one per channel byte
    pub const fn capacity_bits(&self) -> u64 {
        (self.row_channels() as u64) * (self.height as u64)
    }
}

/// Map a global bit index to a `(row, offset)` pair, where offset
/// is the index of the channel byte within the row, filter byte excluded.
///
/// Returns `None` when the index is past the end of the image.
pub fn map_bit_index(bit: u64, geometry: &Geometry) -> Option<(usize, usize)> {
    let row_channels = geometry.row_channels() as u64;

    if row_channels == 0 || bit >= geometry.capacity_bits() {
        return None;
    }
    Some(((bit / row_channels) as usize, (bit % row_channels) as usize))
}

/// Set the least significant bit of the channel byte at `(row, offset)`
/// to the low bit of `bit`
#[inline]
pub fn write_bit(pixels: &mut [u8], geometry: &Geometry, row: usize, offset: usize, bit: u8) {
    debug_assert!(offset < geometry.row_channels());

    let byte = &mut pixels[row * geometry.stride() + 1 + offset];
    *byte = (*byte & 0xFE) | (bit & 1);
}

/// Read the least significant bit of the channel byte at `(row, offset)`
#[inline]
pub fn read_bit(pixels: &[u8], geometry: &Geometry, row: usize, offset: usize) -> u8 {
    debug_assert!(offset < geometry.row_channels());

    pixels[row * geometry.stride() + 1 + offset] & 1
}

/// A running position in the embedded bit stream
///
/// Bytes are written and read most significant bit first, the
/// header and the payload share one cursor.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BitCursor {
    position: u64
}

impl BitCursor {
    pub const fn new() -> BitCursor {
        BitCursor { position: 0 }
    }

    /// Number of bits consumed so far
    pub const fn position(&self) -> u64 {
        self.position
    }

    fn next_location(&mut self, geometry: &Geometry) -> Result<(usize, usize), StegoErrors> {
        let location =
            map_bit_index(self.position, geometry).ok_or(StegoErrors::Capacity {
                required_bits:  self.position + 1,
                available_bits: geometry.capacity_bits()
            })?;
        self.position += 1;

        Ok(location)
    }

    pub fn write_byte(
        &mut self, pixels: &mut [u8], geometry: &Geometry, byte: u8
    ) -> Result<(), StegoErrors> {
        for shift in (0..8).rev() {
            let (row, offset) = self.next_location(geometry)?;
            write_bit(pixels, geometry, row, offset, byte >> shift);
        }
        Ok(())
    }

    pub fn write_bytes(
        &mut self, pixels: &mut [u8], geometry: &Geometry, bytes: &[u8]
    ) -> Result<(), StegoErrors> {
        for byte in bytes {
            self.write_byte(pixels, geometry, *byte)?;
        }
        Ok(())
    }

    pub fn read_byte(&mut self, pixels: &[u8], geometry: &Geometry) -> Result<u8, StegoErrors> {
        let mut byte = 0;

        for _ in 0..8 {
            let (row, offset) = self.next_location(geometry)?;
            byte = (byte << 1) | read_bit(pixels, geometry, row, offset);
        }
        Ok(byte)
    }

    /// Fill `out` with bytes read from the stream
    pub fn read_bytes(
        &mut self, pixels: &[u8], geometry: &Geometry, out: &mut [u8]
    ) -> Result<(), StegoErrors> {
        for byte in out.iter_mut() {
            *byte = self.read_byte(pixels, geometry)?;
        }
        Ok(())
    }
}
