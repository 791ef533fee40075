/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when reading or de-filtering a png
use core::fmt::{Debug, Display, Formatter};

use lsbpng_core::bytestream::ZByteIoError;

/// Errors raised by the png container decoder
/// and the scanline filter engine
pub enum PngErrors {
    /// The first eight bytes are not the png signature
    NotPng,
    /// The first chunk is not a 13 byte IHDR chunk, or
    /// its fields are nonsensical
    InvalidIhdr(&'static str),
    /// Valid png feature we do not handle, e.g interlacing
    Unsupported(String),
    /// Colour type other than truecolor and truecolor with alpha
    UnsupportedColorType(u8),
    /// Image dimensions larger than the configured limits
    /// (dimension, found, limit)
    TooLarge(&'static str, usize, usize),
    /// Stored crc, calculated crc
    BadCrc(u32, u32),
    /// Scanline with a filter tag other than 0..=4, only raised
    /// in strict mode
    UnknownFilter(u8),
    /// Expected, found
    NotEnoughPixels(usize, usize),
    /// The stream ended in the middle of a chunk
    Truncated(ZByteIoError),
    GenericStatic(&'static str),
    Generic(String)
}

impl Debug for PngErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotPng => writeln!(f, "Bad PNG signature, not a png"),
            Self::InvalidIhdr(reason) => writeln!(f, "Invalid IHDR chunk: {reason}"),
            Self::Unsupported(reason) => writeln!(f, "Unsupported png: {reason}"),
            Self::UnsupportedColorType(color) => writeln!(
                f,
                "Unsupported color type {color}, only RGB(2) and RGBA(6) images are supported"
            ),
            Self::TooLarge(dimension, found, limit) => writeln!(
                f,
                "Image {dimension} {found} larger than maximum configured {dimension} {limit}, aborting"
            ),
            Self::BadCrc(expected, found) => writeln!(
                f,
                "CRC does not match, expected {expected:#010x} but found {found:#010x}"
            ),
            Self::UnknownFilter(filter) => writeln!(f, "Unknown filter {filter}"),
            Self::NotEnoughPixels(expected, found) => writeln!(
                f,
                "Not enough pixels, expected {expected} bytes but found {found}"
            ),
            Self::Truncated(err) => writeln!(f, "Truncated png stream: {err:?}"),
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::Generic(val) => writeln!(f, "{val}")
        }
    }
}

impl Display for PngErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PngErrors {}

impl From<ZByteIoError> for PngErrors {
    fn from(value: ZByteIoError) -> Self {
        Self::Truncated(value)
    }
}

impl From<&'static str> for PngErrors {
    fn from(val: &'static str) -> Self {
        Self::GenericStatic(val)
    }
}

impl From<String> for PngErrors {
    fn from(val: String) -> Self {
        Self::Generic(val)
    }
}
