/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{info, warn};
use lsbpng_core::options::DecoderOptions;
use lsbpng_png::error::PngErrors;
use lsbpng_png::filters::unfilter;
use lsbpng_png::{PngColor, PngDecoder, PngEncoder};

use crate::capacity::Capacity;
use crate::codec::{CompressionCodec, ZlibCodec};
use crate::errors::StegoErrors;
use crate::mapper::Geometry;

/// A decoded carrier image
///
/// Pixels are kept the way they are stored in a png after inflating,
/// one filter byte followed by the channel bytes of each row. After
/// decoding every filter byte is zero, so the buffer can be compressed
/// back as is.
#[derive(Clone, Debug)]
pub struct StegoImage {
    width:  u32,
    height: u32,
    color:  PngColor,
    pixels: Vec<u8>
}

impl StegoImage {
    /// Decode a png, inflating and de-filtering its image data
    pub fn from_png(data: &[u8], options: DecoderOptions) -> Result<StegoImage, StegoErrors> {
        let codec = ZlibCodec::new(options.confirm_checksum());
        StegoImage::from_png_with_codec(data, options, &codec)
    }

    pub fn from_png_with_codec<C: CompressionCodec + ?Sized>(
        data: &[u8], options: DecoderOptions, codec: &C
    ) -> Result<StegoImage, StegoErrors> {
        let container = PngDecoder::new_with_options(data, options).decode_container()?;
        let info = container.info;

        let expected = info.inflated_size();

        if expected > options.inflate_limit() {
            return Err(PngErrors::TooLarge(
                "inflated size",
                expected,
                options.inflate_limit()
            )
            .into());
        }
        let mut pixels = codec.decompress(&container.idat, expected)?;

        if pixels.len() < expected {
            return Err(PngErrors::NotEnoughPixels(expected, pixels.len()).into());
        }
        if pixels.len() > expected {
            warn!(
                "Image data has {} extra bytes, ignoring them",
                pixels.len() - expected
            );
            pixels.truncate(expected);
        }

        unfilter(
            &mut pixels,
            info.width,
            info.height,
            info.components(),
            &options
        )?;

        info!(
            "Decoded {}x{} {:?} carrier image",
            info.width, info.height, info.color
        );

        Ok(StegoImage {
            // both came from 32 bit IHDR fields
            width: info.width as u32,
            height: info.height as u32,
            color: info.color,
            pixels
        })
    }

    /// Compress the pixels and write a new png
    pub fn to_png(&self) -> Result<Vec<u8>, StegoErrors> {
        self.to_png_with_codec(&ZlibCodec::default())
    }

    pub fn to_png_with_codec<C: CompressionCodec + ?Sized>(
        &self, codec: &C
    ) -> Result<Vec<u8>, StegoErrors> {
        let idat = codec.compress(&self.pixels)?;

        Ok(PngEncoder::new(self.width, self.height, self.color, &idat).encode())
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn color(&self) -> PngColor {
        self.color
    }

    /// Bytes per pixel
    pub const fn components(&self) -> usize {
        self.color.num_components() as usize
    }

    pub const fn geometry(&self) -> Geometry {
        Geometry::new(self.width as usize, self.height as usize, self.components())
    }

    pub const fn capacity(&self) -> Capacity {
        Capacity::for_geometry(&self.geometry())
    }

    /// Rows of `1 + width * components` bytes, each starting with
    /// a zero filter byte
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;

    fn sample_png(width: u32, height: u32, color: png::ColorType, filter: png::FilterType) -> Vec<u8> {
        let components = if color == png::ColorType::Rgb { 3 } else { 4 };
        let pixels: Vec<u8> = (0..width * height * components)
            .map(|x| (x * 7 % 256) as u8)
            .collect();

        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_filter(filter);

            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&pixels).unwrap();
        }
        out
    }

    #[test]
    fn test_decode_rgb() {
        let data = sample_png(5, 3, png::ColorType::Rgb, png::FilterType::Paeth);
        let image = StegoImage::from_png(&data, DecoderOptions::default()).unwrap();

        assert_eq!((image.width(), image.height()), (5, 3));
        assert_eq!(image.color(), PngColor::RGB);
        assert_eq!(image.pixels().len(), 16 * 3);

        for (i, row) in image.pixels().chunks_exact(16).enumerate() {
            assert_eq!(row[0], 0);
            for (j, value) in row[1..].iter().enumerate() {
                assert_eq!(usize::from(*value), (i * 15 + j) * 7 % 256);
            }
        }
    }

    #[test]
    fn test_reencode_keeps_pixels() {
        let data = sample_png(9, 4, png::ColorType::Rgba, png::FilterType::Sub);
        let image = StegoImage::from_png(&data, DecoderOptions::default()).unwrap();

        let out = image.to_png().unwrap();
        let again = StegoImage::from_png(&out, DecoderOptions::default()).unwrap();

        assert_eq!(again.pixels(), image.pixels());
        assert_eq!(again.color(), PngColor::RGBA);
    }

    struct Broken;

    impl CompressionCodec for Broken {
        fn compress(&self, _: &[u8]) -> Result<Vec<u8>, CodecError> {
            Err(CodecError::Inflate("broken".to_string()))
        }

        fn decompress(&self, _: &[u8], _: usize) -> Result<Vec<u8>, CodecError> {
            Ok(vec![0; 3])
        }
    }

    #[test]
    fn test_short_image_data() {
        let data = sample_png(4, 4, png::ColorType::Rgb, png::FilterType::NoFilter);

        assert!(matches!(
            StegoImage::from_png_with_codec(&data, DecoderOptions::default(), &Broken),
            Err(StegoErrors::Format(PngErrors::NotEnoughPixels(52, 3)))
        ));
    }

    #[test]
    fn test_codec_errors_propagate() {
        let data = sample_png(4, 4, png::ColorType::Rgb, png::FilterType::NoFilter);
        let image = StegoImage::from_png(&data, DecoderOptions::default()).unwrap();

        assert!(matches!(
            image.to_png_with_codec(&Broken),
            Err(StegoErrors::Codec(_))
        ));
    }
}
