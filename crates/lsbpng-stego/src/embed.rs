/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{debug, info};
use lsbpng_core::options::DecoderOptions;

use crate::errors::StegoErrors;
use crate::header::{PayloadHeader, DEFAULT_EXTENSION};
use crate::image::StegoImage;
use crate::mapper::BitCursor;

/// Hide `payload` in the image, tagged with the default `txt` extension
///
/// Returns the header that was embedded ahead of the payload.
///
/// # Errors
/// [`StegoErrors::Capacity`] if the header and payload do not fit, in which
/// case the image is left untouched
pub fn embed(image: &mut StegoImage, payload: &[u8]) -> Result<PayloadHeader, StegoErrors> {
    embed_with_tag(image, payload, DEFAULT_EXTENSION)
}

/// Hide `payload` in the image with a custom extension tag of one to four
/// ASCII letters or digits
pub fn embed_with_tag(
    image: &mut StegoImage, payload: &[u8], extension: &str
) -> Result<PayloadHeader, StegoErrors> {
    let header = PayloadHeader::new(payload.len(), extension)?;

    let geometry = image.geometry();
    image.capacity().check_bits(header.required_bits())?;

    let pixels = image.pixels_mut();
    let mut cursor = BitCursor::new();

    cursor.write_bytes(pixels, &geometry, &header.to_bytes())?;
    debug!("Wrote header, cursor at bit {}", cursor.position());

    cursor.write_bytes(pixels, &geometry, payload)?;

    info!(
        "Embedded {} byte payload tagged {:?}, last bit at {}",
        payload.len(),
        header.extension(),
        cursor.position()
    );

    Ok(header)
}

/// Decode a png, hide `payload` in it and return the new png
pub fn embed_png(
    data: &[u8], payload: &[u8], extension: &str, options: DecoderOptions
) -> Result<Vec<u8>, StegoErrors> {
    let mut image = StegoImage::from_png(data, options)?;
    embed_with_tag(&mut image, payload, extension)?;
    image.to_png()
}
