/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

pub enum ZByteIoError {
    // requested, available
    NotEnoughBytes(usize, usize),
    Generic(&'static str)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ZByteIoError {}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// An encapsulation of a byte slice with a cursor
///
/// All reads are bounds checked, a read past the end
/// of the stream returns [`ZByteIoError::NotEnoughBytes`] and
/// leaves the position untouched.
pub struct ZByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

impl<'a> ZByteReader<'a> {
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Skip `num` bytes ahead of the stream.
    ///
    /// Errors out if this would move the cursor past the end
    /// of the stream
    pub fn skip(&mut self, num: usize) -> Result<(), ZByteIoError> {
        if !self.has(num) {
            return Err(ZByteIoError::NotEnoughBytes(num, self.remaining()));
        }
        self.position += num;
        Ok(())
    }

    /// Return true if the stream can satisfy a read
    /// of `num` bytes
    ///
    /// ```
    /// use lsbpng_core::bytestream::ZByteReader;
    /// let data = [0; 10];
    /// let stream = ZByteReader::new(&data);
    /// assert!(stream.has(10));
    /// assert!(!stream.has(11));
    /// ```
    pub const fn has(&self, num: usize) -> bool {
        match self.position.checked_add(num) {
            Some(end) => end <= self.stream.len(),
            None => false
        }
    }

    /// Number of bytes not yet consumed
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }

    pub const fn get_position(&self) -> usize {
        self.position
    }

    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Return a reference to the next `num` bytes and advance
    /// past them
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], ZByteIoError> {
        let slice = self.peek_at(0, num)?;
        self.position += num;
        Ok(slice)
    }

    /// Look ahead `position` bytes and return a reference
    /// to `num_bytes` from that position.
    ///
    /// This doesn't increment the position.
    pub fn peek_at(&self, position: usize, num_bytes: usize) -> Result<&'a [u8], ZByteIoError> {
        let start = self.position.saturating_add(position);
        let end = start.saturating_add(num_bytes);

        match self.stream.get(start..end) {
            Some(bytes) => Ok(bytes),
            None => Err(ZByteIoError::NotEnoughBytes(
                position.saturating_add(num_bytes),
                self.remaining()
            ))
        }
    }

    /// Read exactly `N` bytes into an array
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        byte_store.copy_from_slice(self.get_as_ref(N)?);
        Ok(byte_store)
    }
}

macro_rules! get_single_type {
    ($inner:tt, $be:tt, $le:tt, $int_type:tt) => {
        impl<'a> ZByteReader<'a> {
            #[inline(always)]
            fn $inner(&mut self, mode: Mode) -> Result<$int_type, ZByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let space = self.read_fixed_bytes_or_error::<SIZE_OF_VAL>()?;

                match mode {
                    Mode::LE => Ok($int_type::from_le_bytes(space)),
                    Mode::BE => Ok($int_type::from_be_bytes(space))
                }
            }

            pub fn $be(&mut self) -> Result<$int_type, ZByteIoError> {
                self.$inner(Mode::BE)
            }

            pub fn $le(&mut self) -> Result<$int_type, ZByteIoError> {
                self.$inner(Mode::LE)
            }
        }
    };
}

get_single_type!(get_u8_inner_or_die, get_u8_be_err, get_u8_le_err, u8);
get_single_type!(get_u16_inner_or_die, get_u16_be_err, get_u16_le_err, u16);
get_single_type!(get_u32_inner_or_die, get_u32_be_err, get_u32_le_err, u32);
get_single_type!(get_u64_inner_or_die, get_u64_be_err, get_u64_le_err, u64);

impl<'a> ZByteReader<'a> {
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        self.get_u8_be_err()
    }
}
