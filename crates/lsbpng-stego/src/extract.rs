/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::info;
use lsbpng_core::options::DecoderOptions;

use crate::errors::StegoErrors;
use crate::header::{PayloadHeader, HEADER_BITS, HEADER_SIZE};
use crate::image::StegoImage;
use crate::mapper::BitCursor;

/// A payload recovered from an image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtractedPayload {
    pub header: PayloadHeader,
    pub data:   Vec<u8>
}

impl ExtractedPayload {
    /// Extension tag the payload was embedded with
    pub fn extension(&self) -> &str {
        self.header.extension()
    }
}

/// Recover a payload hidden by [`embed`](fn@crate::embed)
///
/// # Errors
/// - [`StegoErrors::InvalidHeader`] if the first 64 embedded bits do not
///   form a header, i.e the image carries no payload
/// - [`StegoErrors::Capacity`] if the header claims more bytes than the
///   image can hold
pub fn extract(image: &StegoImage) -> Result<ExtractedPayload, StegoErrors> {
    let geometry = image.geometry();
    let capacity = image.capacity();

    capacity.check_bits(HEADER_BITS)?;

    let mut cursor = BitCursor::new();
    let mut header_bytes = [0; HEADER_SIZE];

    cursor.read_bytes(image.pixels(), &geometry, &mut header_bytes)?;

    let header = PayloadHeader::from_bytes(&header_bytes)?;
    capacity.check_bits(header.required_bits())?;

    let mut data = vec![0; header.payload_length as usize];
    cursor.read_bytes(image.pixels(), &geometry, &mut data)?;

    info!(
        "Extracted {} byte payload tagged {:?}",
        data.len(),
        header.extension()
    );

    Ok(ExtractedPayload { header, data })
}

/// Decode a png and recover the payload hidden in it
pub fn extract_png(data: &[u8], options: DecoderOptions) -> Result<ExtractedPayload, StegoErrors> {
    let image = StegoImage::from_png(data, options)?;
    extract(&image)
}
