/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{debug, trace, warn};
use lsbpng_core::bytestream::ZByteReader;
use lsbpng_core::options::DecoderOptions;

use crate::constants::{IHDR_LENGTH, PNG_SIGNATURE};
use crate::enums::{PngChunkType, PngColor};
use crate::error::PngErrors;

#[derive(Copy, Clone, Debug)]
pub(crate) struct PngChunk {
    pub length:     usize,
    pub chunk_type: PngChunkType,
    pub chunk:      [u8; 4],
    pub crc:        u32
}

/// Image information stored in the IHDR chunk
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PngInfo {
    pub width:              usize,
    pub height:             usize,
    pub depth:              u8,
    pub color:              PngColor,
    pub compression_method: u8,
    pub filter_method:      u8,
    pub interlace_method:   u8
}

impl PngInfo {
    /// Bytes per pixel
    pub const fn components(&self) -> usize {
        self.color.num_components() as usize
    }

    /// Bytes in one encoded scanline, including the
    /// leading filter byte
    pub const fn stride(&self) -> usize {
        1 + self.width * self.components()
    }

    /// Size of the inflated image data, filter bytes included
    pub const fn inflated_size(&self) -> usize {
        self.stride().saturating_mul(self.height)
    }
}

/// The container level contents of a png, image information
/// plus the still compressed image data
#[derive(Debug, Clone)]
pub struct PngContainer {
    pub info: PngInfo,
    /// Concatenation of every IDAT chunk in file order
    pub idat: Vec<u8>
}

/// A png container reader
///
/// This walks the chunk stream, validates the header and gathers
/// IDAT chunks, it does not inflate or de-filter, see
/// [`unfilter`](crate::filters::unfilter) for that.
pub struct PngDecoder<'a> {
    pub(crate) stream:      ZByteReader<'a>,
    pub(crate) options:     DecoderOptions,
    pub(crate) png_info:    Option<PngInfo>,
    pub(crate) idat_chunks: Vec<u8>,
    pub(crate) seen_iend:   bool
}

impl<'a> PngDecoder<'a> {
    pub fn new(data: &'a [u8]) -> PngDecoder<'a> {
        PngDecoder::new_with_options(data, DecoderOptions::default())
    }

    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> PngDecoder<'a> {
        PngDecoder {
            stream: ZByteReader::new(data),
            options,
            png_info: None,
            idat_chunks: Vec::new(),
            seen_iend: false
        }
    }

    /// Return image information, or `None` if headers
    /// haven't been decoded
    pub const fn get_info(&self) -> Option<PngInfo> {
        self.png_info
    }

    pub fn get_dimensions(&self) -> Option<(usize, usize)> {
        self.png_info.map(|info| (info.width, info.height))
    }

    pub fn get_colorspace(&self) -> Option<PngColor> {
        self.png_info.map(|info| info.color)
    }

    fn read_chunk_header(&mut self) -> Result<PngChunk, PngErrors> {
        // Format is length - chunk type - [data] -  crc chunk
        let chunk_length = self.stream.get_u32_be_err()? as usize;
        let chunk_type_int = self.stream.read_fixed_bytes_or_error::<4>()?;

        let crc_ref = self.stream.peek_at(chunk_length, 4)?;
        let crc = u32::from_be_bytes([crc_ref[0], crc_ref[1], crc_ref[2], crc_ref[3]]);

        let chunk_type = PngChunkType::from_bytes(&chunk_type_int);

        if self.options.confirm_crc() {
            use crate::crc::calc_chunk_crc;

            let data = self.stream.peek_at(0, chunk_length)?;
            let calc_crc = calc_chunk_crc(&chunk_type_int, data);

            if crc != calc_crc {
                return Err(PngErrors::BadCrc(crc, calc_crc));
            }
        }

        Ok(PngChunk {
            length: chunk_length,
            chunk: chunk_type_int,
            chunk_type,
            crc
        })
    }

    /// Walk every chunk up to IEND, parsing the header and
    /// collecting image data.
    ///
    /// Calling this twice is a no-op.
    pub fn decode_headers(&mut self) -> Result<(), PngErrors> {
        if self.png_info.is_some() {
            return Ok(());
        }
        // READ PNG signature
        let signature = self.stream.get_u64_be_err().map_err(|_| PngErrors::NotPng)?;

        if signature != PNG_SIGNATURE {
            return Err(PngErrors::NotPng);
        }

        // check if first chunk is ihdr here
        let first_chunk = self
            .stream
            .peek_at(0, 8)
            .map_err(|_| PngErrors::InvalidIhdr("No IHDR chunk, corrupt PNG"))?;

        if &first_chunk[4..8] != b"IHDR" {
            return Err(PngErrors::InvalidIhdr("First chunk not IHDR, corrupt PNG"));
        }
        if first_chunk[0..4] != (IHDR_LENGTH as u32).to_be_bytes() {
            return Err(PngErrors::InvalidIhdr("BAD IHDR length"));
        }

        let header = self.read_chunk_header()?;
        self.parse_ihdr(header)?;

        while !self.stream.eof() {
            let header = self.read_chunk_header()?;

            match header.chunk_type {
                PngChunkType::IHDR => {
                    return Err(PngErrors::InvalidIhdr("Multiple IHDR, corrupt PNG"));
                }
                PngChunkType::IDAT => {
                    self.parse_idat(header)?;
                }
                PngChunkType::IEND => {
                    self.stream.skip(header.length + 4)?;
                    self.seen_iend = true;
                    break;
                }
                PngChunkType::unkn => self.skip_chunk(header)?
            }
        }

        if !self.seen_iend {
            if self.options.strict_mode() {
                return Err(PngErrors::GenericStatic("No IEND chunk, truncated PNG"));
            }
            warn!("No IEND chunk found, using image data read so far");
        }
        if self.idat_chunks.is_empty() {
            return Err(PngErrors::GenericStatic("No IDAT chunks found"));
        }
        debug!("Total IDAT size: {} bytes", self.idat_chunks.len());

        Ok(())
    }

    /// Decode headers and return the image information
    /// together with the compressed image data
    pub fn decode_container(mut self) -> Result<PngContainer, PngErrors> {
        self.decode_headers()?;

        let info = self
            .png_info
            .ok_or(PngErrors::GenericStatic("Headers not decoded"))?;

        Ok(PngContainer {
            info,
            idat: core::mem::take(&mut self.idat_chunks)
        })
    }

    /// Compressed image data gathered by [`decode_headers`](Self::decode_headers)
    pub fn idat(&self) -> &[u8] {
        &self.idat_chunks
    }

    fn skip_chunk(&mut self, chunk: PngChunk) -> Result<(), PngErrors> {
        let chunk_name = core::str::from_utf8(&chunk.chunk).unwrap_or("XXXX");

        trace!("Encountered chunk {:?}", chunk_name);
        trace!("Length of chunk {}, stored crc {:#010x}", chunk.length, chunk.crc);
        trace!("Skipping {} bytes", chunk.length + 4);

        self.stream.skip(chunk.length + 4)?;

        Ok(())
    }
}
