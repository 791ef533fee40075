/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::mem::size_of;

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

/// Encapsulates a simple growable byte writer with
/// support for Endian aware writes
///
/// Writes never fail, the underlying vector grows as needed
pub struct ZByteWriter<'a> {
    buffer:        &'a mut Vec<u8>,
    bytes_written: usize
}

impl<'a> ZByteWriter<'a> {
    /// Create a new writer appending to `data`
    pub fn new(data: &'a mut Vec<u8>) -> ZByteWriter<'a> {
        ZByteWriter {
            buffer:        data,
            bytes_written: 0
        }
    }

    /// Return the number of bytes this writer has appended
    ///
    /// ```
    /// use lsbpng_core::bytestream::ZByteWriter;
    /// let mut sink = vec![];
    /// let mut stream = ZByteWriter::new(&mut sink);
    /// stream.write_u32_be(1);
    /// assert_eq!(stream.bytes_written(), 4);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    pub fn write_all(&mut self, buf: &[u8]) {
        self.buffer.extend_from_slice(buf);
        self.bytes_written += buf.len();
    }

    pub fn write_u8(&mut self, byte: u8) {
        self.buffer.push(byte);
        self.bytes_written += 1;
    }
}

macro_rules! write_single_type {
    ($inner:tt, $be:tt, $le:tt, $int_type:tt) => {
        impl<'a> ZByteWriter<'a> {
            #[inline(always)]
            fn $inner(&mut self, value: $int_type, mode: Mode) {
                const SIZE: usize = size_of::<$int_type>();

                let bytes: [u8; SIZE] = match mode {
                    Mode::BE => value.to_be_bytes(),
                    Mode::LE => value.to_le_bytes()
                };
                self.write_all(&bytes);
            }

            #[inline(always)]
            pub fn $be(&mut self, value: $int_type) {
                self.$inner(value, Mode::BE)
            }

            #[inline(always)]
            pub fn $le(&mut self, value: $int_type) {
                self.$inner(value, Mode::LE)
            }
        }
    };
}

write_single_type!(write_u16_inner, write_u16_be, write_u16_le, u16);
write_single_type!(write_u32_inner, write_u32_be, write_u32_le, u32);
write_single_type!(write_u64_inner, write_u64_be, write_u64_le, u64);
