/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The header embedded ahead of every payload
//!
//! Layout, 8 bytes:
//!
//! | offset | size | content                                        |
//! |--------|------|------------------------------------------------|
//! | 0      | 4    | payload length in bytes, little endian         |
//! | 4      | 4    | extension tag, ASCII, NUL or space padded      |
use lsbpng_core::bytestream::{ZByteReader, ZByteWriter};

use crate::errors::StegoErrors;

/// Size of the serialized header in bytes
pub const HEADER_SIZE: usize = 8;

/// Size of the serialized header in embedded bits
pub const HEADER_BITS: u64 = (HEADER_SIZE * 8) as u64;

/// Extension tag used when the caller provides none
pub const DEFAULT_EXTENSION: &str = "txt";

/// Length and type of an embedded payload
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PayloadHeader {
    pub payload_length: u32,
    pub extension_tag:  [u8; 4]
}

impl PayloadHeader {
    /// Create a header for a payload of `payload_length` bytes
    /// tagged with `extension`
    ///
    /// The extension must be one to four ASCII letters or digits.
    pub fn new(payload_length: usize, extension: &str) -> Result<PayloadHeader, StegoErrors> {
        let payload_length = u32::try_from(payload_length)
            .map_err(|_| StegoErrors::InvalidHeader("Payload length does not fit in 32 bits"))?;

        let bytes = extension.as_bytes();

        if bytes.is_empty() || bytes.len() > 4 {
            return Err(StegoErrors::InvalidHeader(
                "Extension tag must be between 1 and 4 characters"
            ));
        }
        if !bytes.iter().all(u8::is_ascii_alphanumeric) {
            return Err(StegoErrors::InvalidHeader(
                "Extension tag must be ASCII letters or digits"
            ));
        }
        let mut extension_tag = [0; 4];
        extension_tag[..bytes.len()].copy_from_slice(bytes);

        Ok(PayloadHeader {
            payload_length,
            extension_tag
        })
    }

    /// Serialize into the on-image layout
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = Vec::with_capacity(HEADER_SIZE);
        let mut writer = ZByteWriter::new(&mut out);

        writer.write_u32_le(self.payload_length);
        writer.write_all(&self.extension_tag);

        let mut bytes = [0; HEADER_SIZE];
        bytes.copy_from_slice(&out);
        bytes
    }

    /// Parse and validate a header read back from an image
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Result<PayloadHeader, StegoErrors> {
        let mut reader = ZByteReader::new(bytes);

        let payload_length = reader
            .get_u32_le_err()
            .map_err(|_| StegoErrors::InvalidHeader("Short header"))?;
        let extension_tag = reader
            .read_fixed_bytes_or_error::<4>()
            .map_err(|_| StegoErrors::InvalidHeader("Short header"))?;

        if !is_valid_tag(&extension_tag) {
            return Err(StegoErrors::InvalidHeader(
                "Unrecognised extension tag, image holds no payload"
            ));
        }

        Ok(PayloadHeader {
            payload_length,
            extension_tag
        })
    }

    /// The extension tag with padding removed
    pub fn extension(&self) -> &str {
        let end = self
            .extension_tag
            .iter()
            .position(|x| *x == 0 || *x == b' ')
            .unwrap_or(4);
        // validated tags are ASCII
        core::str::from_utf8(&self.extension_tag[..end]).unwrap_or("")
    }

    /// Bits needed to embed this header and its payload
    pub const fn required_bits(&self) -> u64 {
        HEADER_BITS + (self.payload_length as u64) * 8
    }
}

/// One to four letters or digits, then only NUL or space
fn is_valid_tag(tag: &[u8; 4]) -> bool {
    let len = tag
        .iter()
        .position(|x| !x.is_ascii_alphanumeric())
        .unwrap_or(4);

    len > 0 && tag[len..].iter().all(|x| *x == 0 || *x == b' ')
}
