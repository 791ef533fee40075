/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::errors::StegoErrors;
use crate::header::HEADER_BITS;
use crate::image::StegoImage;
use crate::mapper::Geometry;

/// How much an image can carry
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Capacity {
    /// Embeddable bits, one per channel byte
    pub total_bits:        u64,
    /// Bits taken by the payload header
    pub header_bits:       u64,
    /// Largest payload in bytes that fits after the header
    pub max_payload_bytes: u64
}

impl Capacity {
    pub const fn for_geometry(geometry: &Geometry) -> Capacity {
        let total_bits = geometry.capacity_bits();

        Capacity {
            total_bits,
            header_bits: HEADER_BITS,
            max_payload_bytes: (total_bits / 8).saturating_sub(HEADER_BITS / 8)
        }
    }

    /// Whether a payload of `payload_length` bytes fits
    /// together with its header
    pub fn fits(&self, payload_length: u64) -> bool {
        payload_length
            .checked_mul(8)
            .and_then(|bits| bits.checked_add(self.header_bits))
            .map_or(false, |bits| bits <= self.total_bits)
    }

    /// Check that `required_bits` fit, returning a capacity
    /// error if they do not
    pub fn check_bits(&self, required_bits: u64) -> Result<(), StegoErrors> {
        if required_bits > self.total_bits {
            return Err(StegoErrors::Capacity {
                required_bits,
                available_bits: self.total_bits
            });
        }
        Ok(())
    }
}

/// Report the capacity of a decoded image
pub fn capacity(image: &StegoImage) -> Capacity {
    Capacity::for_geometry(&image.geometry())
}
