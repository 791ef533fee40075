/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scanline de-filtering
//!
//! Png filters every scanline before compression, this module undoes
//! that in place, leaving every row tagged as filter type 0 (None).
//!
//! The buffer layout is the inflated IDAT stream, i.e `height` rows of
//! `1 + width * components` bytes where the first byte of each row is the
//! filter type.
use log::{trace, warn};
use lsbpng_core::options::DecoderOptions;

use crate::enums::FilterMethod;
use crate::error::PngErrors;

/// Reverse png scanline filters in place
///
/// After this returns successfully every row's filter byte is zero and
/// the channel bytes hold raw pixel values.
///
/// Filter tags outside 0..=4 are an error in strict mode, otherwise the
/// row is left as is, matching what lenient decoders do.
pub fn unfilter(
    data: &mut [u8], width: usize, height: usize, components: usize, options: &DecoderOptions
) -> Result<(), PngErrors> {
    let width_stride = width * components;
    let chunk_size = width_stride + 1;
    let image_len = chunk_size * height;

    if data.len() < image_len {
        return Err(PngErrors::NotEnoughPixels(image_len, data.len()));
    }

    let mut first_row = true;

    for row in 0..height {
        let row_start = row * chunk_size;
        // Split output into previous rows and the current one
        let (prev, rest) = data.split_at_mut(row_start);

        let filter_byte = rest[0];
        let current = &mut rest[1..chunk_size];

        // get the previous row.
        //Set this to a dummy to handle special case of first row, if we aren't in the first
        // row, we actually take the real slice a line up
        let prev_row: &[u8] = if first_row {
            &[]
        } else {
            &prev[row_start - width_stride..row_start]
        };

        match FilterMethod::from_int(filter_byte) {
            Some(mut filter) => {
                if first_row {
                    // these special filters do not need the previous scanline
                    // and treat it as zero
                    filter = match filter {
                        FilterMethod::Paeth => FilterMethod::PaethFirst,
                        // up for the first row becomes a no-op
                        FilterMethod::Up => FilterMethod::None,
                        FilterMethod::Average => FilterMethod::AvgFirst,
                        other => other
                    };
                }
                trace!("Row {row} filter {filter:?}");

                match filter {
                    FilterMethod::None => (),
                    FilterMethod::Sub => handle_sub(current, components),
                    FilterMethod::Up => handle_up(prev_row, current),
                    FilterMethod::Average => handle_avg(prev_row, current, components),
                    FilterMethod::Paeth => handle_paeth(prev_row, current, components),
                    FilterMethod::PaethFirst => handle_paeth_first(current, components),
                    FilterMethod::AvgFirst => handle_avg_first(current, components)
                }
            }
            None => {
                if options.strict_mode() {
                    return Err(PngErrors::UnknownFilter(filter_byte));
                }
                warn!("Unknown filter {filter_byte} on row {row}, leaving row as is");
            }
        }
        // commit to no filter semantics for re-encoding
        rest[0] = 0;
        first_row = false;
    }

    Ok(())
}

pub fn handle_sub(current: &mut [u8], components: usize) {
    // leftmost pixel has nothing to the left, so it stays as is
    for i in components..current.len() {
        let a = current[i - components];
        current[i] = current[i].wrapping_add(a);
    }
}

pub fn handle_up(prev_row: &[u8], current: &mut [u8]) {
    for (recon, up) in current.iter_mut().zip(prev_row) {
        *recon = recon.wrapping_add(*up)
    }
}

pub fn handle_avg(prev_row: &[u8], current: &mut [u8], components: usize) {
    if current.len() < components || prev_row.len() < current.len() {
        return;
    }
    // handle leftmost byte explicitly
    for i in 0..components {
        current[i] = current[i].wrapping_add(prev_row[i] >> 1);
    }

    for i in components..current.len() {
        // this needs to be performed with at least 9 bits of precision, so bump
        // it up to 16.
        let a = u16::from(current[i - components]);
        let b = u16::from(prev_row[i]);

        let avg = ((a + b) >> 1) as u8;

        current[i] = current[i].wrapping_add(avg);
    }
}

pub fn handle_paeth(prev_row: &[u8], current: &mut [u8], components: usize) {
    if current.len() < components || prev_row.len() < current.len() {
        return;
    }
    // handle leftmost byte explicitly
    for i in 0..components {
        current[i] = current[i].wrapping_add(paeth(0, prev_row[i], 0));
    }

    for i in components..current.len() {
        let paeth_res = paeth(
            current[i - components],
            prev_row[i],
            prev_row[i - components]
        );
        current[i] = current[i].wrapping_add(paeth_res)
    }
}

/// Handle images with the first scanline as paeth scanline
///
/// Special in that the above row is treated as zero, which makes
/// the predictor always pick the left byte
pub fn handle_paeth_first(current: &mut [u8], components: usize) {
    for i in components..current.len() {
        let paeth_res = paeth(current[i - components], 0, 0);
        current[i] = current[i].wrapping_add(paeth_res)
    }
}

/// Handle images with the first scanline as an average scanline
///
/// The above row is treated as zero
pub fn handle_avg_first(current: &mut [u8], components: usize) {
    for i in components..current.len() {
        let avg = current[i - components] >> 1;
        current[i] = current[i].wrapping_add(avg)
    }
}

/// The paeth predictor
///
/// Picks whichever of `a` (left), `b` (up) and `c` (up-left) is
/// closest to `a + b - c`, ties resolved in the order `a`, `b`, `c`.
#[inline(always)]
pub fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let a = i16::from(a);
    let b = i16::from(b);
    let c = i16::from(c);

    let p = a + b - c;
    let pa = (p - a).abs();
    let pb = (p - b).abs();
    let pc = (p - c).abs();

    if pa <= pb && pa <= pc {
        a as u8
    } else if pb <= pc {
        b as u8
    } else {
        c as u8
    }
}
