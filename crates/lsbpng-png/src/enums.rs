/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms, non_camel_case_types)]

/// Chunk types we act on, see table 5.3 of
/// https://www.w3.org/TR/2003/REC-PNG-20031110/
///
/// Everything else is treated as opaque and skipped
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngChunkType {
    IHDR,
    IDAT,
    IEND,
    unkn
}

impl PngChunkType {
    pub fn from_bytes(chunk: &[u8; 4]) -> PngChunkType {
        match chunk {
            b"IHDR" => PngChunkType::IHDR,
            b"IDAT" => PngChunkType::IDAT,
            b"IEND" => PngChunkType::IEND,
            _ => PngChunkType::unkn
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterMethod {
    None,
    Sub,
    Up,
    Average,
    Paeth,
    // First scanline, special
    PaethFirst,
    AvgFirst
}

impl FilterMethod {
    pub fn from_int(int: u8) -> Option<FilterMethod> {
        match int {
            0 => Some(FilterMethod::None),
            1 => Some(FilterMethod::Sub),
            2 => Some(FilterMethod::Up),
            3 => Some(FilterMethod::Average),
            4 => Some(FilterMethod::Paeth),
            _ => None
        }
    }
}

/// Colour types the steganography pipeline can carry data in
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngColor {
    RGB,
    RGBA
}

impl PngColor {
    /// Bytes per pixel at a bit depth of 8
    pub const fn num_components(self) -> u8 {
        match self {
            PngColor::RGB => 3,
            PngColor::RGBA => 4
        }
    }

    pub const fn from_int(int: u8) -> Option<PngColor> {
        match int {
            2 => Some(Self::RGB),
            6 => Some(Self::RGBA),
            _ => None
        }
    }

    /// The colour type value stored in IHDR
    pub const fn to_int(self) -> u8 {
        match self {
            PngColor::RGB => 2,
            PngColor::RGBA => 6
        }
    }
}
