/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Behaviour of the lenient defaults against the opt-in checks on
//! damaged files

use lsbpng_core::options::DecoderOptions;
use lsbpng_png::error::PngErrors;
use lsbpng_png::{PngColor, PngEncoder};
use lsbpng_stego::codec::{CompressionCodec, ZlibCodec};
use lsbpng_stego::errors::StegoErrors;
use lsbpng_stego::{embed_png, extract_png, StegoImage};

use crate::{make_carrier, random_bytes, JsonColor, JsonFilter};

/// A png whose second row carries filter tag 7
fn png_with_unknown_filter() -> Vec<u8> {
    let (width, height) = (6_usize, 4_usize);
    let stride = width * 3 + 1;

    let mut raw = random_bytes(stride * height, 77);
    for row in raw.chunks_exact_mut(stride) {
        row[0] = 0;
    }
    raw[stride] = 7;

    let idat = ZlibCodec::default().compress(&raw).unwrap();
    PngEncoder::new(width as u32, height as u32, PngColor::RGB, &idat).encode()
}

#[test]
fn test_unknown_filter_lenient_and_strict() {
    let data = png_with_unknown_filter();

    let image = StegoImage::from_png(&data, DecoderOptions::default()).unwrap();
    // the row is left as is, but its tag is reset
    assert!(image.pixels().chunks_exact(19).all(|row| row[0] == 0));

    let strict = DecoderOptions::default().set_strict_mode(true);
    assert!(matches!(
        StegoImage::from_png(&data, strict),
        Err(StegoErrors::Format(PngErrors::UnknownFilter(7)))
    ));
}

#[test]
fn test_corrupt_chunk_crc() {
    let pixels = random_bytes(30 * 30 * 4, 3);
    let carrier = make_carrier(&pixels, 30, 30, JsonColor::Rgba, JsonFilter::Paeth);

    let mut output = embed_png(&carrier, b"payload", "txt", DecoderOptions::default()).unwrap();
    // last byte of the IEND crc
    let last = output.len() - 1;
    output[last] ^= 0x55;

    assert_eq!(
        extract_png(&output, DecoderOptions::default()).unwrap().data,
        b"payload"
    );

    let checked = DecoderOptions::default().set_confirm_crc(true);
    assert!(matches!(
        extract_png(&output, checked),
        Err(StegoErrors::Format(PngErrors::BadCrc(_, _)))
    ));
}

#[test]
fn test_short_image_data() {
    // zlib stream for half the image
    let raw = vec![0_u8; 10 * (1 + 10 * 4) / 2];
    let idat = ZlibCodec::default().compress(&raw).unwrap();
    let data = PngEncoder::new(10, 10, PngColor::RGBA, &idat).encode();

    assert!(matches!(
        StegoImage::from_png(&data, DecoderOptions::default()),
        Err(StegoErrors::Format(PngErrors::NotEnoughPixels(410, 205)))
    ));
}

#[test]
fn test_dimension_limits() {
    let pixels = random_bytes(50 * 2 * 3, 1);
    let carrier = make_carrier(&pixels, 50, 2, JsonColor::Rgb, JsonFilter::None);

    let options = DecoderOptions::default().set_max_width(49);

    assert!(matches!(
        extract_png(&carrier, options),
        Err(StegoErrors::Format(PngErrors::TooLarge(_, 50, 49)))
    ));
}

#[test]
fn test_ancillary_chunks_are_dropped() {
    let pixels = random_bytes(8 * 8 * 3, 8);
    let mut carrier = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut carrier, 8, 8);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .add_text_chunk("Comment".to_string(), "carrier".to_string())
            .unwrap();

        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&pixels).unwrap();
    }
    let output = embed_png(&carrier, b"hidden", "txt", DecoderOptions::default()).unwrap();

    let reader = png::Decoder::new(output.as_slice()).read_info().unwrap();
    assert!(reader.info().uncompressed_latin1_text.is_empty());

    assert_eq!(
        extract_png(&output, DecoderOptions::default()).unwrap().data,
        b"hidden"
    );
}

/// A tiny file whose IHDR claims a 131072x131072 RGBA image
fn huge_header_png() -> Vec<u8> {
    let idat = ZlibCodec::default().compress(&[0; 16]).unwrap();
    PngEncoder::new(1 << 17, 1 << 17, PngColor::RGBA, &idat).encode()
}

#[test]
fn test_huge_header_is_rejected_by_default() {
    let data = huge_header_png();
    assert!(data.len() < 100);

    assert!(matches!(
        StegoImage::from_png(&data, DecoderOptions::default()),
        Err(StegoErrors::Format(PngErrors::TooLarge("width", 131072, 16384)))
    ));
}

#[test]
fn test_huge_header_hits_inflate_limit() {
    let data = huge_header_png();
    let options = DecoderOptions::default()
        .set_max_width(1 << 17)
        .set_max_height(1 << 17);

    let expected = (4 * (1 << 17) + 1) * (1 << 17);

    assert!(matches!(
        StegoImage::from_png(&data, options),
        Err(StegoErrors::Format(PngErrors::TooLarge("inflated size", found, limit)))
            if found == expected && limit == 1 << 30
    ));
}

#[test]
fn test_huge_header_without_limits_does_not_allocate() {
    let data = huge_header_png();
    let options = DecoderOptions::default()
        .set_max_width(1 << 17)
        .set_max_height(1 << 17)
        .set_inflate_limit(usize::MAX);

    let expected = (4 * (1 << 17) + 1) * (1 << 17);

    assert!(matches!(
        StegoImage::from_png(&data, options),
        Err(StegoErrors::Format(PngErrors::NotEnoughPixels(found, 16))) if found == expected
    ));
}

#[test]
fn test_inflate_limit_on_small_image() {
    let pixels = random_bytes(10 * 10 * 3, 4);
    let carrier = make_carrier(&pixels, 10, 10, JsonColor::Rgb, JsonFilter::Sub);

    // 10 rows of 31 bytes
    let options = DecoderOptions::default().set_inflate_limit(309);
    assert!(matches!(
        extract_png(&carrier, options),
        Err(StegoErrors::Format(PngErrors::TooLarge(_, 310, 309)))
    ));

    let options = DecoderOptions::default().set_inflate_limit(310);
    assert!(StegoImage::from_png(&carrier, options).is_ok());
}
