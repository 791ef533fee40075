/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when hiding or recovering a payload
use core::fmt::{Debug, Display, Formatter};

use lsbpng_png::error::PngErrors;

use crate::codec::CodecError;

/// Errors raised while embedding or extracting a payload
pub enum StegoErrors {
    /// The carrier could not be read, or its pixels could not be
    /// reconstructed
    Format(PngErrors),
    /// The payload plus its header does not fit in the image
    Capacity {
        required_bits:  u64,
        available_bits: u64
    },
    /// Compression or decompression of image data failed
    Codec(CodecError),
    /// The embedded header is not one this library writes
    InvalidHeader(&'static str)
}

impl Debug for StegoErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Format(err) => writeln!(f, "{err:?}"),
            Self::Capacity {
                required_bits,
                available_bits
            } => writeln!(
                f,
                "Payload too large, {required_bits} bits needed but the image only has {available_bits} bits"
            ),
            Self::Codec(err) => writeln!(f, "{err:?}"),
            Self::InvalidHeader(reason) => writeln!(f, "Invalid payload header: {reason}")
        }
    }
}

impl Display for StegoErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for StegoErrors {}

impl From<PngErrors> for StegoErrors {
    fn from(value: PngErrors) -> Self {
        StegoErrors::Format(value)
    }
}

impl From<CodecError> for StegoErrors {
    fn from(value: CodecError) -> Self {
        StegoErrors::Codec(value)
    }
}
