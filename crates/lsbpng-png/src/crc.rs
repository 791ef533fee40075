/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! CRC-32 as used by png chunks
//!
//! The crc covers the chunk type and the chunk data, but not
//! the length field.
use crc32fast::Hasher;

/// Calculate the crc of a contiguous `type + data` slice
pub fn calc_crc(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Calculate the crc of a chunk whose type and data live in
/// different buffers
pub fn calc_chunk_crc(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    hasher.finalize()
}
