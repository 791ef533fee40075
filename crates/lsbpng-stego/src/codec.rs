/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Zlib compression of image data
//!
//! Inflating is done by `zune-inflate`, deflating by `flate2`, both
//! behind the [`CompressionCodec`] trait so callers can bring their own.
use core::fmt::{Debug, Display, Formatter};
use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::trace;
use zune_inflate::{DeflateDecoder, DeflateOptions};

/// Upper bound on how much a deflate stream can expand, per input byte
const MAX_DEFLATE_RATIO: usize = 1032;

/// Errors from the compression stage
pub enum CodecError {
    /// The zlib stream could not be inflated, the string holds
    /// the inflater's description
    Inflate(String),
    /// Deflating failed
    Deflate(std::io::Error)
}

impl Debug for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Inflate(reason) => writeln!(f, "Could not inflate image data: {reason}"),
            Self::Deflate(err) => writeln!(f, "Could not deflate image data: {err}")
        }
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CodecError {}

impl From<std::io::Error> for CodecError {
    fn from(value: std::io::Error) -> Self {
        CodecError::Deflate(value)
    }
}

/// A zlib compressor and decompressor pair
pub trait CompressionCodec {
    /// Compress `data` into a complete zlib stream
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;

    /// Decompress a zlib stream, producing at most `expected_size` bytes
    ///
    /// `expected_size` comes from untrusted headers, implementations
    /// must not allocate it blindly.
    fn decompress(&self, data: &[u8], expected_size: usize) -> Result<Vec<u8>, CodecError>;
}

/// The default codec
#[derive(Copy, Clone, Debug)]
pub struct ZlibCodec {
    level:            Compression,
    confirm_checksum: bool
}

impl Default for ZlibCodec {
    fn default() -> Self {
        ZlibCodec {
            level:            Compression::default(),
            confirm_checksum: true
        }
    }
}

impl ZlibCodec {
    /// Create a codec, choosing whether the adler32 trailer
    /// is verified on decompression
    pub fn new(confirm_checksum: bool) -> ZlibCodec {
        ZlibCodec {
            confirm_checksum,
            ..Default::default()
        }
    }

    /// Set the deflate level, 0 (store) to 9 (best)
    #[must_use]
    pub fn set_level(mut self, level: u32) -> Self {
        self.level = Compression::new(level.min(9));
        self
    }
}

impl CompressionCodec for ZlibCodec {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), self.level);
        encoder.write_all(data)?;
        let out = encoder.finish()?;

        trace!("Deflated {} bytes to {} bytes", data.len(), out.len());

        Ok(out)
    }

    fn decompress(&self, data: &[u8], expected_size: usize) -> Result<Vec<u8>, CodecError> {
        // the hint is allocated up front, never let it exceed what the input can produce
        let size_hint = expected_size.min(
            data.len()
                .saturating_mul(MAX_DEFLATE_RATIO)
                .saturating_add(1024)
        );

        let options = DeflateOptions::default()
            .set_size_hint(size_hint)
            .set_limit(expected_size)
            .set_confirm_checksum(self.confirm_checksum);

        let mut decoder = DeflateDecoder::new_with_options(data, options);

        let out = decoder
            .decode_zlib()
            .map_err(|e| CodecError::Inflate(format!("{:?}", e)))?;

        trace!("Inflated {} bytes to {} bytes", data.len(), out.len());

        Ok(out)
    }
}
