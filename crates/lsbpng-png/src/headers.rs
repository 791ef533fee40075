/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::info;

use crate::constants::IHDR_LENGTH;
use crate::decoder::{PngChunk, PngInfo};
use crate::enums::PngColor;
use crate::error::PngErrors;
use crate::PngDecoder;

pub(crate) mod writers;

impl<'a> PngDecoder<'a> {
    pub(crate) fn parse_ihdr(&mut self, chunk: PngChunk) -> Result<(), PngErrors> {
        if self.png_info.is_some() {
            return Err(PngErrors::InvalidIhdr("Multiple IHDR, corrupt PNG"));
        }

        if chunk.length != IHDR_LENGTH {
            return Err(PngErrors::InvalidIhdr("BAD IHDR length"));
        }

        let pos_start = self.stream.get_position();

        let width = self.stream.get_u32_be_err()? as usize;
        let height = self.stream.get_u32_be_err()? as usize;

        if width == 0 || height == 0 {
            return Err(PngErrors::InvalidIhdr("Width or height cannot be zero"));
        }

        if width > self.options.max_width() {
            return Err(PngErrors::TooLarge(
                "width",
                width,
                self.options.max_width()
            ));
        }

        if height > self.options.max_height() {
            return Err(PngErrors::TooLarge(
                "height",
                height,
                self.options.max_height()
            ));
        }

        let depth = self.stream.get_u8_err()?;
        let color_int = self.stream.get_u8_err()?;
        let compression_method = self.stream.get_u8_err()?;
        let filter_method = self.stream.get_u8_err()?;
        let interlace_method = self.stream.get_u8_err()?;

        let pos_end = self.stream.get_position();

        debug_assert_eq!(pos_end - pos_start, IHDR_LENGTH); //we read all bytes

        if depth != 8 {
            return Err(PngErrors::Unsupported(format!(
                "Bit depth {depth}, only 8 bit images are supported"
            )));
        }
        if interlace_method != 0 {
            return Err(PngErrors::Unsupported(format!(
                "Interlace method {interlace_method}, only non-interlaced images are supported"
            )));
        }
        if compression_method != 0 {
            return Err(PngErrors::Unsupported(format!(
                "Unknown compression method {compression_method}"
            )));
        }
        if filter_method != 0 {
            return Err(PngErrors::Unsupported(format!(
                "Unknown filter method {filter_method}"
            )));
        }

        let color = PngColor::from_int(color_int).ok_or(PngErrors::UnsupportedColorType(color_int))?;

        // skip crc
        self.stream.skip(4)?;

        let info = PngInfo {
            width,
            height,
            depth,
            color,
            compression_method,
            filter_method,
            interlace_method
        };

        info!("Width: {}", info.width);
        info!("Height: {}", info.height);
        info!("Color type: {:?}", info.color);
        info!("Depth: {:?}", info.depth);

        self.png_info = Some(info);

        Ok(())
    }

    pub(crate) fn parse_idat(&mut self, png_chunk: PngChunk) -> Result<(), PngErrors> {
        // get a reference to the IDAT chunk stream and push it,
        // we will later pass these to the deflate decoder as a whole, to get the whole
        // uncompressed stream.
        let idat_stream = self.stream.get_as_ref(png_chunk.length)?;

        self.idat_chunks.extend_from_slice(idat_stream);

        // skip crc
        self.stream.skip(4)?;

        Ok(())
    }
}
