/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lsbpng_core::bytestream::ZByteWriter;

use crate::crc::calc_crc;
use crate::encoder::PngEncoder;

pub(crate) fn write_ihdr(ctx: &PngEncoder, output: &mut ZByteWriter) {
    // write width and height
    output.write_u32_be(ctx.width);
    output.write_u32_be(ctx.height);
    // depth, always 8
    output.write_u8(8);
    output.write_u8(ctx.color.to_int());
    //compression method
    output.write_u8(0);
    // filter method
    output.write_u8(0);
    // interlace method, always Standard
    output.write_u8(0);
}

pub(crate) fn write_idat(ctx: &PngEncoder, output: &mut ZByteWriter) {
    output.write_all(ctx.idat);
}

// iend is a no-op
pub(crate) fn write_iend(_: &PngEncoder, _: &mut ZByteWriter) {}

/// Write header writes the boilerplate for each png chunk
///
/// It writes the length, chunk type, calls a function to write the
/// data and then calculates the CRC chunk for that png and writes it.
///
/// This should be called with the appropriate inner function to write data
///
pub(crate) fn write_header_fn<F: Fn(&PngEncoder, &mut ZByteWriter)>(
    v: &PngEncoder, writer: &mut ZByteWriter, name: &[u8; 4], func: F
) {
    // The chunk is staged in its own buffer, its length sits in front
    // of the data and the crc covers the type and data, so both are
    // patched in once the writer callback is done. For IDAT the data
    // is the already deflated stream, copied through untouched.

    // format
    // length - chunk type - [data] -  crc chunk
    let mut temp_space = Vec::with_capacity(v.idat.len() + 12);
    // space for length
    temp_space.extend_from_slice(&[0; 4]);
    let mut local_writer = ZByteWriter::new(&mut temp_space);
    // write the type
    local_writer.write_all(name);
    // call underlying function
    (func)(v, &mut local_writer);
    // get bytes written;
    let bytes_written = local_writer.bytes_written();
    // write length less the chunk name
    temp_space[0..4].copy_from_slice(&(bytes_written as u32 - 4).to_be_bytes());
    // write crc, ignore the length
    let c = calc_crc(&temp_space[4..]);
    temp_space.extend_from_slice(&c.to_be_bytes());

    writer.write_all(&temp_space)
}
